use crate::data::model::WeightedGraph;

use super::{Layout, LayoutEngine, LayoutError, LayoutMode};

/// Force simulation driven by the `force_graph` crate.
///
/// Only available when built with the `scaffold` feature; otherwise every
/// call reports [`LayoutError::Unavailable`] and the selector falls back.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldLayout {
    /// Simulation ticks to run.
    pub steps: usize,
    /// Seconds per tick.
    pub dt: f32,
}

impl Default for ScaffoldLayout {
    fn default() -> Self {
        Self { steps: 300, dt: 0.035 }
    }
}

impl LayoutEngine for ScaffoldLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::ForceScaffold
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
        simulate(graph, self)
    }
}

#[cfg(feature = "scaffold")]
fn simulate(graph: &WeightedGraph, params: &ScaffoldLayout) -> Result<Layout, LayoutError> {
    use std::f64::consts::TAU;

    use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

    const SEED_RADIUS: f64 = 100.0;

    let n = graph.node_count();
    if n == 0 {
        return Ok(Layout::new());
    }

    let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
        force_charge: 150.0,
        force_spring: 0.05,
        force_max: 100.0,
        node_speed: 3000.0,
        damping_factor: 0.9,
    });

    // Seed positions on a circle so the run is deterministic.
    let handles: Vec<_> = (0..n)
        .map(|i| {
            let angle = i as f64 * TAU / n as f64;
            sim.add_node(NodeData {
                x: (SEED_RADIUS * angle.cos()) as f32,
                y: (SEED_RADIUS * angle.sin()) as f32,
                mass: 10.0,
                is_anchor: false,
                user_data: i,
            })
        })
        .collect();

    for (u, v, _) in graph.edges() {
        if u == v {
            continue;
        }
        let (Some(a), Some(b)) = (graph.node_index(u), graph.node_index(v)) else {
            return Err(LayoutError::Failed(format!("edge {u} -- {v} has no endpoint")));
        };
        sim.add_edge(handles[a], handles[b], EdgeData::default());
    }

    for _ in 0..params.steps {
        sim.update(params.dt);
    }

    let mut coords = vec![[f64::NAN; 2]; n];
    sim.visit_nodes(|node| {
        if let Some(slot) = coords.get_mut(node.data.user_data) {
            *slot = [node.x() as f64, node.y() as f64];
        }
    });

    Ok(graph.nodes_in_order().zip(coords).collect())
}

#[cfg(not(feature = "scaffold"))]
fn simulate(_graph: &WeightedGraph, _params: &ScaffoldLayout) -> Result<Layout, LayoutError> {
    Err(LayoutError::Unavailable(
        "force_graph support not compiled in (enable the `scaffold` feature)".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::sample_graph;

    #[cfg(feature = "scaffold")]
    #[test]
    fn simulation_places_every_node() {
        let g = sample_graph();
        let layout = ScaffoldLayout::default().compute(&g).unwrap();
        assert!(layout.is_total_over(&g));
    }

    #[cfg(not(feature = "scaffold"))]
    #[test]
    fn reports_unavailable_without_feature() {
        let err = ScaffoldLayout::default().compute(&sample_graph()).unwrap_err();
        assert!(matches!(err, LayoutError::Unavailable(_)));
    }
}
