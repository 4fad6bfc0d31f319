use std::borrow::Cow;

use super::model::WeightedGraph;

// ---------------------------------------------------------------------------
// Size-bounded sampling for drawing
// ---------------------------------------------------------------------------

/// The graph handed to layout and rendering.
#[derive(Debug, Clone)]
pub struct Sample<'g> {
    pub graph: Cow<'g, WeightedGraph>,
    /// Node count of the graph before sampling.
    pub original_nodes: usize,
}

impl Sample<'_> {
    /// Whether nodes were dropped.
    pub fn is_sampled(&self) -> bool {
        self.graph.node_count() < self.original_nodes
    }

    /// Detach from the source graph, cloning it only if it was borrowed.
    pub fn into_owned(self) -> Sample<'static> {
        Sample {
            graph: Cow::Owned(self.graph.into_owned()),
            original_nodes: self.original_nodes,
        }
    }
}

/// Bound the node set to at most `max_nodes`.
///
/// Graphs within the cap are borrowed unchanged. Larger graphs are cut down
/// to the first `max_nodes` nodes in insertion order and the subgraph they
/// induce.
pub fn sample(graph: &WeightedGraph, max_nodes: usize) -> Sample<'_> {
    let original_nodes = graph.node_count();
    if original_nodes <= max_nodes {
        return Sample {
            graph: Cow::Borrowed(graph),
            original_nodes,
        };
    }

    let sub = graph.induced_subgraph(graph.nodes_in_order().take(max_nodes));
    log::info!(
        "Visualizing only {} of {} nodes for performance",
        sub.node_count(),
        original_nodes
    );
    Sample {
        graph: Cow::Owned(sub),
        original_nodes,
    }
}
