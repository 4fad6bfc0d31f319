use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Run summary and, if the layout fell back, the warning.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(&state.summary);

        if let Some(warning) = &state.fallback_warning {
            ui.separator();
            ui.label(RichText::new(warning).color(Color32::from_rgb(230, 160, 0)));
        }
    });
}
