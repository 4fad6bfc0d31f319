use std::fmt::Write as _;
use std::path::Path;

use crate::color::to_svg_paint;
use crate::error::{Result, VizError};
use crate::layout::Point;

use super::Figure;

const MARGIN: f64 = 24.0;
const TITLE_BAND: f64 = 36.0;

/// Maps layout coordinates onto the canvas, keeping aspect ratio and
/// flipping y so that up is up.
struct Viewport {
    origin: Point,
    scale: f64,
    offset: Point,
}

impl Viewport {
    fn fit(figure: &Figure, width: f64, height: f64) -> Self {
        let avail_w = (width - 2.0 * MARGIN).max(1.0);
        let avail_h = (height - 2.0 * MARGIN - TITLE_BAND).max(1.0);
        let (lo, hi) = figure.bounds().unwrap_or(([0.0, 0.0], [0.0, 0.0]));
        let span_x = hi[0] - lo[0];
        let span_y = hi[1] - lo[1];
        let scale = match (span_x > 0.0, span_y > 0.0) {
            (false, false) => 1.0,
            (true, false) => avail_w / span_x,
            (false, true) => avail_h / span_y,
            (true, true) => (avail_w / span_x).min(avail_h / span_y),
        };
        // Centre the drawing inside the available area.
        let offset = [
            MARGIN + (avail_w - span_x * scale) / 2.0,
            MARGIN + TITLE_BAND + (avail_h - span_y * scale) / 2.0,
        ];
        Viewport { origin: [lo[0], hi[1]], scale, offset }
    }

    fn map(&self, [x, y]: Point) -> Point {
        [
            self.offset[0] + (x - self.origin[0]) * self.scale,
            self.offset[1] + (self.origin[1] - y) * self.scale,
        ]
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize `figure` as a standalone SVG document of `width`×`height` px.
pub fn to_svg(figure: &Figure, width: u32, height: u32) -> String {
    let (w, h) = (width as f64, height as f64);
    let view = Viewport::fit(figure, w, h);
    let style = &figure.style;
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"  <text class="title" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
        w / 2.0,
        MARGIN + TITLE_BAND / 2.0,
        escape(&figure.title)
    );

    let (edge_fill, edge_opacity) = to_svg_paint(style.edge_color);
    let _ = writeln!(
        svg,
        r#"  <g stroke="{edge_fill}" stroke-opacity="{edge_opacity:.2}" stroke-width="{:.2}">"#,
        style.edge_width
    );
    for line in &figure.lines {
        let ([x1, y1], [x2, y2]) = (view.map(line.from), view.map(line.to));
        let _ = writeln!(
            svg,
            r#"    <line class="edge" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"/>"#
        );
    }
    svg.push_str("  </g>\n");

    let (node_fill, node_opacity) = to_svg_paint(style.node_color);
    let _ = writeln!(
        svg,
        r#"  <g fill="{node_fill}" fill-opacity="{node_opacity:.2}">"#
    );
    for marker in &figure.markers {
        let [cx, cy] = view.map(marker.at);
        let _ = writeln!(
            svg,
            r#"    <circle class="node" cx="{cx:.2}" cy="{cy:.2}" r="{:.2}"/>"#,
            style.node_radius
        );
    }
    svg.push_str("  </g>\n");

    let (label_fill, label_opacity) = to_svg_paint(style.label_color);
    let _ = writeln!(
        svg,
        r#"  <g fill="{label_fill}" fill-opacity="{label_opacity:.2}" font-size="{:.1}" text-anchor="middle" dominant-baseline="middle">"#,
        style.label_size
    );
    for label in &figure.labels {
        let [x, y] = view.map(label.at);
        let _ = writeln!(
            svg,
            r#"    <text class="weight" x="{x:.2}" y="{y:.2}">{}</text>"#,
            escape(&label.text)
        );
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

/// Write the figure to `path` as SVG.
pub fn write_svg(figure: &Figure, path: &Path, width: u32, height: u32) -> Result<()> {
    std::fs::write(path, to_svg(figure, width, height)).map_err(|source| VizError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Figure written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WeightedGraph;
    use crate::layout::Layout;
    use crate::render::{build_figure, FigureStyle};

    fn figure(edges: &[(&str, &str, f64)], layout: &[(&str, Point)]) -> Figure {
        let mut g = WeightedGraph::new();
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        let layout: Layout = layout.iter().copied().collect();
        build_figure(&g, &layout, "Roads & <junctions>", FigureStyle::default()).unwrap()
    }

    #[test]
    fn counts_match_figure() {
        let fig = figure(
            &[("A", "B", 1.0), ("B", "C", 0.5)],
            &[("A", [0.0, 0.0]), ("B", [1.0, 1.0]), ("C", [2.0, 0.0])],
        );
        let svg = to_svg(&fig, 400, 300);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches(r#"class="weight""#).count(), 2);
        assert!(svg.contains(">0.50</text>"));
        assert!(svg.contains("Roads &amp; &lt;junctions&gt;"));
    }

    #[test]
    fn single_point_is_centred() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "A", 1.0);
        let layout: Layout = [("A", [5.0, 5.0])].into_iter().collect();
        let fig = build_figure(&g, &layout, "t", FigureStyle::default()).unwrap();
        let view = Viewport::fit(&fig, 200.0, 200.0);
        let [x, y] = view.map([5.0, 5.0]);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - (MARGIN + TITLE_BAND + (200.0 - 2.0 * MARGIN - TITLE_BAND) / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn y_axis_points_up() {
        let fig = figure(&[("A", "B", 1.0)], &[("A", [0.0, 0.0]), ("B", [0.0, 1.0])]);
        let view = Viewport::fit(&fig, 300.0, 300.0);
        assert!(view.map([0.0, 1.0])[1] < view.map([0.0, 0.0])[1]);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.svg");
        let fig = figure(&[("A", "B", 1.0)], &[("A", [0.0, 0.0]), ("B", [1.0, 0.0])]);
        write_svg(&fig, &path, 200, 200).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<svg"));
    }
}
