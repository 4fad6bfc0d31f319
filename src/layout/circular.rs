use std::f64::consts::TAU;

use crate::data::model::WeightedGraph;

use super::{Layout, LayoutEngine, LayoutError, LayoutMode};

/// Nodes evenly spaced on the unit circle, in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularLayout;

impl LayoutEngine for CircularLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Circular
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
        Ok(circular_layout(graph))
    }
}

/// A single node sits at the origin.
pub fn circular_layout(graph: &WeightedGraph) -> Layout {
    let n = graph.node_count();
    if n == 1 {
        return graph.nodes_in_order().map(|id| (id, [0.0, 0.0])).collect();
    }
    graph
        .nodes_in_order()
        .enumerate()
        .map(|(i, id)| {
            let theta = TAU * i as f64 / n as f64;
            (id, [theta.cos(), theta.sin()])
        })
        .collect()
}
