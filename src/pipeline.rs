//! The linear run: load → sample → lay out → build figure.

use crate::config::VizConfig;
use crate::data::loader::{load_graph, summary};
use crate::data::model::WeightedGraph;
use crate::data::sampler::{sample, Sample};
use crate::error::Result;
use crate::layout::{LayoutOutcome, LayoutSelector};
use crate::render::{build_figure, Figure};

/// Everything a run produces, ready to be written or displayed.
#[derive(Debug, Clone)]
pub struct PipelineOutput<'g> {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// The graph that was drawn. Borrows the loaded graph when nothing was cut.
    pub drawn: Sample<'g>,
    pub layout: LayoutOutcome,
    pub figure: Figure,
}

impl PipelineOutput<'_> {
    pub fn was_sampled(&self) -> bool {
        self.drawn.is_sampled()
    }

    pub fn into_owned(self) -> PipelineOutput<'static> {
        PipelineOutput {
            total_nodes: self.total_nodes,
            total_edges: self.total_edges,
            drawn: self.drawn.into_owned(),
            layout: self.layout,
            figure: self.figure,
        }
    }
}

/// Validate `config` and load the graph it names.
pub fn load(config: &VizConfig) -> Result<WeightedGraph> {
    config.validate()?;
    let graph = load_graph(&config.file_path)?;
    log::info!("Graph loaded: {}", summary(&graph));
    Ok(graph)
}

/// Load `config.file_path` and run every later stage on it.
pub fn run(config: &VizConfig) -> Result<PipelineOutput<'static>> {
    let graph = load(config)?;
    let output = run_graph(&graph, config)?.into_owned();
    Ok(output)
}

/// Run sampling, layout and figure building on an already loaded graph.
pub fn run_graph<'g>(graph: &'g WeightedGraph, config: &VizConfig) -> Result<PipelineOutput<'g>> {
    let style = config.style()?;
    let sampled = sample(graph, config.max_nodes_to_draw);

    let outcome =
        LayoutSelector::new(config.layout_options()).layout(&sampled.graph, config.layout_mode);
    log::info!(
        "Layout: {} ({} nodes placed)",
        outcome.used,
        outcome.layout.len()
    );

    let figure = build_figure(&sampled.graph, &outcome.layout, &config.title, style)?;
    Ok(PipelineOutput {
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        drawn: sampled,
        layout: outcome,
        figure,
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::layout::LayoutMode;

    fn grid(side: usize) -> WeightedGraph {
        let mut g = WeightedGraph::new();
        for r in 0..side {
            for c in 0..side {
                let id = format!("{r}-{c}");
                if c + 1 < side {
                    g.add_edge(&id, &format!("{r}-{}", c + 1), 1.5);
                }
                if r + 1 < side {
                    g.add_edge(&id, &format!("{}-{c}", r + 1), 2.0);
                }
            }
        }
        g
    }

    #[test]
    fn large_graph_is_cut_to_cap() {
        let g = grid(6);
        let cfg = VizConfig {
            max_nodes_to_draw: 10,
            layout_mode: LayoutMode::Circular,
            ..Default::default()
        };
        let out = run_graph(&g, &cfg).unwrap();
        assert!(out.was_sampled());
        assert_eq!(out.total_nodes, 36);
        assert_eq!(out.figure.markers.len(), 10);
        assert_eq!(out.figure.lines.len(), out.drawn.graph.edge_count());
        assert_eq!(out.figure.labels.len(), out.drawn.graph.edge_count());
    }

    #[test]
    fn small_graph_is_drawn_whole() {
        let g = grid(2);
        let cfg = VizConfig {
            layout_mode: LayoutMode::SpringFallback,
            seed: Some(4),
            ..Default::default()
        };
        let out = run_graph(&g, &cfg).unwrap();
        assert!(!out.was_sampled());
        assert!(matches!(out.drawn.graph, Cow::Borrowed(_)));
        assert_eq!(*out.drawn.graph, g);
        assert_eq!(out.figure.lines.len(), 4);
    }
}
