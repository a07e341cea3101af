use std::path::Path;

use eframe::egui::Ui;

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar – run summary
// ---------------------------------------------------------------------------

/// Render the top summary bar: source path, subset counts, and where
/// the static figure was written.
pub fn top_bar(ui: &mut Ui, state: &ViewState, saved_to: Option<&Path>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("Source: {}", state.source.display()));
        ui.separator();
        ui.label(format!(
            "{} samples ({} with x ≤ 0, {} with x > 0)",
            state.sample_count(),
            state.non_positive.len(),
            state.positive.len()
        ));
        if let Some(path) = saved_to {
            ui.separator();
            ui.label(format!("Saved as {}", path.display()));
        }
    });
}
