use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::model::WeightedGraph;

use super::{Layout, LayoutEngine, LayoutError, LayoutMode};

/// Independent uniform positions in `[0, 1)²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLayout {
    seed: Option<u64>,
}

impl RandomLayout {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl LayoutEngine for RandomLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Random
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
        Ok(random_layout(graph, self.seed))
    }
}

/// Seeded generator, or one drawn from OS entropy.
pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Infallible: this is the layout of last resort.
pub fn random_layout(graph: &WeightedGraph, seed: Option<u64>) -> Layout {
    let mut rng = rng(seed);
    graph
        .nodes_in_order()
        .map(|id| (id, [rng.gen::<f64>(), rng.gen::<f64>()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::sample_graph;

    #[test]
    fn positions_stay_in_unit_square() {
        let g = sample_graph();
        let layout = random_layout(&g, None);
        assert_eq!(layout.len(), g.node_count());
        assert!(layout
            .iter()
            .all(|(_, [x, y])| (0.0..1.0).contains(&x) && (0.0..1.0).contains(&y)));
    }

    #[test]
    fn same_seed_same_layout() {
        let g = sample_graph();
        assert_eq!(random_layout(&g, Some(3)), random_layout(&g, Some(3)));
    }
}
