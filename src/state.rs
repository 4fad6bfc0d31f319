use crate::config::VizConfig;
use crate::pipeline::PipelineOutput;
use crate::render::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the viewer window shows. Built once from a finished run; the window
/// only presents it.
pub struct AppState {
    pub figure: Figure,

    /// "N nodes, M edges loaded, K drawn"
    pub summary: String,

    /// Set when the requested layout had to be replaced.
    pub fallback_warning: Option<String>,

    /// Requested figure size in pixels.
    pub size: [f32; 2],
}

impl AppState {
    pub fn from_output(config: &VizConfig, output: PipelineOutput<'_>) -> Self {
        let outcome = &output.layout;
        let fallback_warning = outcome.fallback.as_ref().map(|err| {
            format!("{} layout failed ({err}); showing {}", outcome.requested, outcome.used)
        });
        let summary = format!(
            "{} nodes, {} edges loaded, {} drawn",
            output.total_nodes,
            output.total_edges,
            output.drawn.graph.node_count()
        );
        Self {
            figure: output.figure,
            summary,
            fallback_warning,
            size: [config.width as f32, config.height as f32],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WeightedGraph;
    use crate::layout::LayoutMode;
    use crate::pipeline::run_graph;

    fn roads() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 2.0);
        g.add_edge("C", "D", 3.0);
        g
    }

    #[test]
    fn summarises_loaded_and_drawn_counts() {
        let g = roads();
        let config = VizConfig {
            max_nodes_to_draw: 3,
            layout_mode: LayoutMode::Circular,
            ..Default::default()
        };
        let output = run_graph(&g, &config).unwrap();
        let state = AppState::from_output(&config, output);
        assert_eq!(state.summary, "4 nodes, 3 edges loaded, 3 drawn");
        assert!(state.fallback_warning.is_none());
        assert_eq!(state.figure.markers.len(), 3);
        assert_eq!(state.size, [1200.0, 1200.0]);
    }

    #[cfg(not(feature = "scaffold"))]
    #[test]
    fn missing_backend_is_reported() {
        let g = roads();
        let config = VizConfig::default();
        let output = run_graph(&g, &config).unwrap();
        let warning = AppState::from_output(&config, output).fallback_warning.unwrap();
        assert!(warning.ends_with("showing random"), "{warning}");
    }
}
