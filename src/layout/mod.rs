//! Node placement.
//!
//! Every engine implements [`LayoutEngine`] and reports failure as a
//! [`LayoutError`]. [`LayoutSelector`] is the single recovery boundary: a
//! failed, partial or non-finite primary layout is replaced by a random one
//! and the caller always receives a total [`Layout`].

use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::WeightedGraph;

pub mod circular;
pub mod random;
pub mod scaffold;
pub mod spring;

pub use circular::CircularLayout;
pub use random::RandomLayout;
pub use scaffold::ScaffoldLayout;
pub use spring::SpringLayout;

/// A 2D coordinate `[x, y]`, the same shape `egui_plot` consumes.
pub type Point = [f64; 2];

// ---------------------------------------------------------------------------
// LayoutMode – user-selectable algorithm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Scalable force simulation; may be unavailable in a given build.
    #[default]
    #[serde(alias = "sfdp")]
    #[value(alias = "sfdp")]
    ForceScaffold,
    /// Evenly spaced on the unit circle.
    Circular,
    /// Uniform in the unit square.
    Random,
    /// Short Fruchterman-Reingold relaxation.
    #[serde(rename = "spring", alias = "spring-fallback")]
    #[value(name = "spring", alias = "spring-fallback")]
    SpringFallback,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::ForceScaffold,
        LayoutMode::Circular,
        LayoutMode::Random,
        LayoutMode::SpringFallback,
    ];
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutMode::ForceScaffold => "force-scaffold",
            LayoutMode::Circular => "circular",
            LayoutMode::Random => "random",
            LayoutMode::SpringFallback => "spring",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Layout – node → coordinate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: IndexMap<String, Point>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: &str, point: Point) {
        self.positions.insert(node.to_string(), point);
    }

    pub fn get(&self, node: &str) -> Option<Point> {
        self.positions.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.positions.iter().map(|(id, &p)| (id.as_str(), p))
    }

    /// Nodes of `graph` that have no position.
    pub fn missing<'g>(&self, graph: &'g WeightedGraph) -> Vec<&'g str> {
        graph
            .nodes_in_order()
            .filter(|id| !self.positions.contains_key(*id))
            .collect()
    }

    pub fn is_total_over(&self, graph: &WeightedGraph) -> bool {
        self.missing(graph).is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Point)> for Layout {
    fn from_iter<I: IntoIterator<Item = (&'a str, Point)>>(iter: I) -> Self {
        let mut layout = Layout::new();
        for (id, p) in iter {
            layout.insert(id, p);
        }
        layout
    }
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("layout engine unavailable: {0}")]
    Unavailable(String),

    #[error("non-finite position for node {0:?}")]
    NonFinite(String),

    #[error("no position for {count} node(s), first {first:?}")]
    Incomplete { count: usize, first: String },

    #[error("layout failed: {0}")]
    Failed(String),
}

/// A node-placement algorithm.
pub trait LayoutEngine {
    /// The mode this engine implements.
    fn mode(&self) -> LayoutMode;

    fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError>;
}

/// Tuning shared by the engines the selector builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Seed for the random and spring layouts; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub spring_iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            seed: None,
            spring_iterations: spring::DEFAULT_ITERATIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// LayoutSelector – single-level fallback
// ---------------------------------------------------------------------------

/// Result of the layout stage.
#[derive(Debug, Clone)]
pub struct LayoutOutcome {
    pub layout: Layout,
    pub requested: LayoutMode,
    /// The mode that actually produced `layout`.
    pub used: LayoutMode,
    /// Why the requested engine was abandoned, if it was.
    pub fallback: Option<LayoutError>,
}

impl LayoutOutcome {
    pub fn fell_back(&self) -> bool {
        self.fallback.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutSelector {
    options: LayoutOptions,
}

impl LayoutSelector {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Lay out `graph` with the engine for `mode`, falling back to random.
    pub fn layout(&self, graph: &WeightedGraph, mode: LayoutMode) -> LayoutOutcome {
        match mode {
            LayoutMode::ForceScaffold => self.layout_with(graph, &ScaffoldLayout::default()),
            LayoutMode::Circular => self.layout_with(graph, &CircularLayout),
            LayoutMode::Random => self.layout_with(graph, &RandomLayout::new(self.options.seed)),
            LayoutMode::SpringFallback => self.layout_with(
                graph,
                &SpringLayout::new(self.options.spring_iterations, self.options.seed),
            ),
        }
    }

    /// Run `engine` inside the recovery boundary.
    pub fn layout_with(&self, graph: &WeightedGraph, engine: &dyn LayoutEngine) -> LayoutOutcome {
        let requested = engine.mode();
        match engine.compute(graph).and_then(|layout| validate(graph, layout)) {
            Ok(layout) => {
                log::debug!("Computed {requested} layout for {} nodes", layout.len());
                LayoutOutcome {
                    layout,
                    requested,
                    used: requested,
                    fallback: None,
                }
            }
            Err(err) => {
                log::warn!("Layout fallback: {requested} layout failed: {err}; using random layout");
                LayoutOutcome {
                    layout: random::random_layout(graph, self.options.seed),
                    requested,
                    used: LayoutMode::Random,
                    fallback: Some(err),
                }
            }
        }
    }
}

/// Reject layouts that miss nodes or hold non-finite coordinates.
fn validate(graph: &WeightedGraph, layout: Layout) -> Result<Layout, LayoutError> {
    let missing = layout.missing(graph);
    if let Some(first) = missing.first() {
        return Err(LayoutError::Incomplete {
            count: missing.len(),
            first: first.to_string(),
        });
    }
    if let Some((id, _)) = layout
        .iter()
        .find(|(_, [x, y])| !x.is_finite() || !y.is_finite())
    {
        return Err(LayoutError::NonFinite(id.to_string()));
    }
    Ok(layout)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_graph() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 2.5);
        g.add_edge("B", "C", 0.5);
        g.add_edge("C", "D", 7.0);
        g.add_edge("E", "E", 0.0);
        g
    }

    struct Broken;

    impl LayoutEngine for Broken {
        fn mode(&self) -> LayoutMode {
            LayoutMode::ForceScaffold
        }

        fn compute(&self, _: &WeightedGraph) -> Result<Layout, LayoutError> {
            Err(LayoutError::Failed("engine exploded".into()))
        }
    }

    /// Places only the first node.
    struct Partial;

    impl LayoutEngine for Partial {
        fn mode(&self) -> LayoutMode {
            LayoutMode::Circular
        }

        fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
            Ok(graph.nodes_in_order().take(1).map(|id| (id, [0.0, 0.0])).collect())
        }
    }

    struct Diverging;

    impl LayoutEngine for Diverging {
        fn mode(&self) -> LayoutMode {
            LayoutMode::SpringFallback
        }

        fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
            Ok(graph.nodes_in_order().map(|id| (id, [f64::NAN, 1.0])).collect())
        }
    }

    #[test]
    fn every_mode_yields_total_layout() {
        let g = sample_graph();
        let selector = LayoutSelector::new(LayoutOptions {
            seed: Some(7),
            ..Default::default()
        });
        for mode in LayoutMode::ALL {
            let outcome = selector.layout(&g, mode);
            assert!(outcome.layout.is_total_over(&g), "{mode} not total");
            assert_eq!(outcome.requested, mode);
        }
    }

    #[test]
    fn failing_engine_falls_back_to_random() {
        let g = sample_graph();
        let outcome = LayoutSelector::default().layout_with(&g, &Broken);
        assert!(outcome.fell_back());
        assert_eq!(outcome.used, LayoutMode::Random);
        assert_eq!(outcome.requested, LayoutMode::ForceScaffold);
        assert_eq!(outcome.fallback, Some(LayoutError::Failed("engine exploded".into())));
        assert!(outcome.layout.is_total_over(&g));
    }

    #[test]
    fn partial_layout_triggers_fallback() {
        let g = sample_graph();
        let outcome = LayoutSelector::default().layout_with(&g, &Partial);
        assert!(matches!(
            outcome.fallback,
            Some(LayoutError::Incomplete { count: 4, .. })
        ));
        assert_eq!(outcome.layout.len(), g.node_count());
    }

    #[test]
    fn non_finite_layout_triggers_fallback() {
        let g = sample_graph();
        let outcome = LayoutSelector::default().layout_with(&g, &Diverging);
        assert_eq!(outcome.fallback, Some(LayoutError::NonFinite("A".into())));
        assert!(outcome.layout.iter().all(|(_, [x, y])| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn empty_graph_is_fine_for_every_mode() {
        let g = WeightedGraph::new();
        for mode in LayoutMode::ALL {
            let outcome = LayoutSelector::default().layout(&g, mode);
            assert!(outcome.layout.is_empty());
            if mode != LayoutMode::ForceScaffold || cfg!(feature = "scaffold") {
                assert!(!outcome.fell_back(), "{mode} fell back on empty graph");
            }
        }
    }

    #[test]
    fn mode_names_round_trip_through_serde() {
        let parsed: LayoutMode = serde_json::from_str("\"sfdp\"").unwrap();
        assert_eq!(parsed, LayoutMode::ForceScaffold);
        let parsed: LayoutMode = serde_json::from_str("\"spring-fallback\"").unwrap();
        assert_eq!(parsed, LayoutMode::SpringFallback);
        assert_eq!(serde_json::to_string(&LayoutMode::SpringFallback).unwrap(), "\"spring\"");
        assert_eq!(LayoutMode::Circular.to_string(), "circular");
    }
}
