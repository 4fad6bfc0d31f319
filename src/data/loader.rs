use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, VizError};

use super::model::WeightedGraph;
use super::parser::{EdgeRecord, FormatParser};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a weighted graph from an adjacency-list text file.
///
/// A missing or unreadable file is a [`VizError::FileAccess`]; a malformed
/// weight aborts the load with [`VizError::Parse`]. Nothing partial is
/// returned in either case.
pub fn load_graph(path: &Path) -> Result<WeightedGraph> {
    let file_error = |source| VizError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(file_error)?;

    let mut parser = FormatParser::new();
    let mut graph = WeightedGraph::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(file_error)?;
        if let Some(record) = parser.feed(&line)? {
            apply(&mut graph, &record);
        }
    }
    log::debug!("Parsed {} from {}", summary(&graph), path.display());
    Ok(graph)
}

/// Replay parsed records into a fresh graph, in encounter order.
pub fn graph_from_records<'a, I>(records: I) -> WeightedGraph
where
    I: IntoIterator<Item = &'a EdgeRecord>,
{
    let mut graph = WeightedGraph::new();
    for record in records {
        apply(&mut graph, record);
    }
    graph
}

fn apply(graph: &mut WeightedGraph, record: &EdgeRecord) {
    graph.add_edge(&record.source, &record.target, record.weight);
}

/// "N nodes, M edges"
pub fn summary(graph: &WeightedGraph) -> String {
    format!("{} nodes, {} edges", graph.node_count(), graph.edge_count())
}
