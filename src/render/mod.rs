//! Backend-neutral figure built from a graph and its layout.
//!
//! A [`Figure`] is a flat list of primitives in layout coordinates. The SVG
//! writer and the egui viewer both draw from it, so what gets drawn is
//! decided once, here.

use palette::Srgba;
use thiserror::Error;

use crate::color::named_rgba;
use crate::data::model::WeightedGraph;
use crate::layout::{Layout, Point};

pub mod svg;

pub const DEFAULT_TITLE: &str = "Graph Visualization with Edge Weights (Sample Subgraph)";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("no layout position for node {0:?}")]
    MissingPosition(String),
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    /// Marker radius in pixels.
    pub node_radius: f32,
    pub node_color: Srgba<u8>,
    pub edge_color: Srgba<u8>,
    /// Stroke width in pixels.
    pub edge_width: f32,
    pub label_color: Srgba<u8>,
    /// Font size in pixels.
    pub label_size: f32,
}

impl FigureStyle {
    /// Default style with a different node colour.
    pub fn with_node_color(name: &str) -> Option<Self> {
        Some(Self {
            node_color: named_rgba(name, 0.8)?,
            ..Self::default()
        })
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            node_radius: 3.0,
            node_color: Srgba::new(0, 191, 255, 204),
            edge_color: Srgba::new(128, 128, 128, 77),
            edge_width: 0.7,
            label_color: Srgba::new(0, 0, 0, 255),
            label_size: 7.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    pub node: String,
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub text: String,
    pub at: Point,
}

/// A static, titled drawing of a graph. Node names are not labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub markers: Vec<NodeMarker>,
    pub lines: Vec<EdgeLine>,
    pub labels: Vec<EdgeLabel>,
    pub axes_visible: bool,
    pub style: FigureStyle,
}

impl Figure {
    /// Lower-left and upper-right corners of everything drawn.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.markers.iter().map(|m| m.at);
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), [x, y]| {
            ([lo[0].min(x), lo[1].min(y)], [hi[0].max(x), hi[1].max(y)])
        }))
    }
}

/// Weight label text: two decimal places.
pub fn weight_label(weight: f64) -> String {
    format!("{weight:.2}")
}

fn midpoint(a: Point, b: Point) -> Point {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}

/// Build the figure for `graph` placed by `layout`.
pub fn build_figure(
    graph: &WeightedGraph,
    layout: &Layout,
    title: &str,
    style: FigureStyle,
) -> Result<Figure, RenderError> {
    let position = |id: &str| {
        layout
            .get(id)
            .ok_or_else(|| RenderError::MissingPosition(id.to_string()))
    };

    let markers = graph
        .nodes_in_order()
        .map(|id| {
            Ok(NodeMarker {
                node: id.to_string(),
                at: position(id)?,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let mut lines = Vec::with_capacity(graph.edge_count());
    let mut labels = Vec::with_capacity(graph.edge_count());
    for (u, v, weight) in graph.edges() {
        let (from, to) = (position(u)?, position(v)?);
        lines.push(EdgeLine { from, to });
        labels.push(EdgeLabel {
            text: weight_label(weight),
            at: midpoint(from, to),
        });
    }

    Ok(Figure {
        title: title.to_string(),
        markers,
        lines,
        labels,
        axes_visible: false,
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::circular::circular_layout;

    #[test]
    fn one_node_no_edges() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        let g = g.induced_subgraph(["A"]);
        let layout = circular_layout(&g);
        let fig = build_figure(&g, &layout, DEFAULT_TITLE, FigureStyle::default()).unwrap();
        assert_eq!(fig.markers.len(), 1);
        assert!(fig.lines.is_empty());
        assert!(fig.labels.is_empty());
        assert!(!fig.axes_visible);
    }

    #[test]
    fn labels_sit_at_midpoints_with_two_decimals() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "C", 2.345);
        let layout: Layout = [("A", [0.0, 0.0]), ("B", [2.0, 0.0]), ("C", [2.0, 4.0])]
            .into_iter()
            .collect();
        let fig = build_figure(&g, &layout, "t", FigureStyle::default()).unwrap();
        assert_eq!(fig.lines.len(), 2);
        assert_eq!(fig.labels[0], EdgeLabel { text: "1.00".into(), at: [1.0, 0.0] });
        assert_eq!(fig.labels[1].text, "2.35");
        assert_eq!(fig.labels[1].at, [2.0, 2.0]);
        assert_eq!(fig.bounds(), Some(([0.0, 0.0], [2.0, 4.0])));
    }

    #[test]
    fn missing_position_is_an_error() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        let layout: Layout = [("A", [0.0, 0.0])].into_iter().collect();
        let err = build_figure(&g, &layout, "t", FigureStyle::default()).unwrap_err();
        assert_eq!(err, RenderError::MissingPosition("B".into()));
    }

    #[test]
    fn custom_node_colour() {
        let style = FigureStyle::with_node_color("tomato").unwrap();
        assert_eq!((style.node_color.red, style.node_color.green), (255, 99));
        assert!(FigureStyle::with_node_color("nope").is_none());
    }
}
