use eframe::egui;

use crate::data::model::ReviewDataset;
use crate::state::AppState;
use crate::theme;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Panel layout only; all dashboard logic lives in `state` and `charts`.
pub struct ReviewScopeApp {
    pub state: AppState,
}

impl ReviewScopeApp {
    pub fn new(dataset: ReviewDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for ReviewScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_fill = theme::color(theme::PANEL_BACKGROUND);
        let page_fill = theme::color(theme::PAGE_BACKGROUND);

        // ---- Top panel: title + counts ----
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::default()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                panels::top_bar(ui, &self.state);
            });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: the two charts ----
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(page_fill)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                plot::charts_panel(ui, &self.state);
            });
    }
}
