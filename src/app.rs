use std::path::PathBuf;

use eframe::egui;

use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlotterApp {
    state: ViewState,
    saved_to: Option<PathBuf>,
    /// Clamped bounds are applied once, on the first frame only.
    bounds_applied: bool,
}

impl PlotterApp {
    pub fn new(state: ViewState, saved_to: Option<PathBuf>) -> Self {
        Self {
            state,
            saved_to,
            bounds_applied: false,
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: run summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, self.saved_to.as_deref());
        });

        // ---- Central panel: the two comparison plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let apply_clamp = !self.bounds_applied;
            ui.columns(2, |columns| {
                plot::full_range_panel(&mut columns[0], &self.state, apply_clamp);
                plot::positive_detail_panel(&mut columns[1], &self.state);
            });
            self.bounds_applied = true;
        });
    }
}
