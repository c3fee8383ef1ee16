use std::path::Path;

use eframe::egui;

use crate::data::loader::DEFAULT_SOURCE;
use crate::state::AppState;
use crate::ui::{detail, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ConsumptionApp {
    pub state: AppState,
}

impl ConsumptionApp {
    /// Start with the default issues file from the working directory.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_from(Path::new(DEFAULT_SOURCE));
        Self { state }
    }
}

impl eframe::App for ConsumptionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: summary ----
        egui::TopBottomPanel::bottom("summary_bar").show(ctx, |ui| {
            panels::summary_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: details ----
        if self.state.detail_visible() {
            egui::SidePanel::right("detail_panel")
                .default_width(420.0)
                .resizable(true)
                .show(ctx, |ui| {
                    detail::detail_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::issues_table(ui, &mut self.state);
        });

        panels::save_notice(ctx, &mut self.state);
    }
}
