use eframe::egui::{RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::to_color32;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Graph plot (central panel)
// ---------------------------------------------------------------------------

/// Render the figure held by `state`.
pub fn graph_plot(ui: &mut Ui, state: &AppState) {
    let figure = &state.figure;
    let style = &figure.style;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.title);
    });

    Plot::new("graph_plot")
        .data_aspect(1.0)
        .show_axes(figure.axes_visible)
        .show_grid(figure.axes_visible)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let edge_color = to_color32(style.edge_color);
            for line in &figure.lines {
                let points: PlotPoints = [line.from, line.to].into_iter().collect();
                plot_ui.line(Line::new(points).color(edge_color).width(style.edge_width));
            }

            let markers: PlotPoints = figure.markers.iter().map(|m| m.at).collect();
            plot_ui.points(
                Points::new(markers)
                    .radius(style.node_radius)
                    .color(to_color32(style.node_color)),
            );

            let label_color = to_color32(style.label_color);
            for label in &figure.labels {
                let [x, y] = label.at;
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(&label.text)
                        .size(style.label_size)
                        .color(label_color),
                ));
            }
        });
}
