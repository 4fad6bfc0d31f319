use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RouteGraphApp {
    pub state: AppState,
}

impl RouteGraphApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RouteGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: run summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::graph_plot(ui, &self.state);
        });
    }
}

/// Open a window showing `state` until the user closes it.
pub fn run_viewer(state: AppState) -> eframe::Result {
    let [width, height] = state.size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.min(1600.0), height.min(1000.0)])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Route Graph Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(RouteGraphApp::new(state)))),
    )
}
