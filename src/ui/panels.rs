use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;
use crate::theme;

/// Range of the minimum-rating-count slider.
const RATING_COUNT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=500.0;
/// Slider increment.
const RATING_COUNT_STEP: f64 = 10.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: title plus loaded/visible counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(
            RichText::new("Amazon Product Review Dashboard")
                .heading()
                .color(theme::color(theme::PAGE_TEXT)),
        );

        ui.separator();

        ui.label(
            RichText::new(format!(
                "{} products loaded, {} in view",
                state.dataset.len(),
                state.scatter_chart.points.len()
            ))
            .color(theme::emphasis(theme::PAGE_TEXT, 0.25)),
        );
    });
}

// ---------------------------------------------------------------------------
// Left control panel
// ---------------------------------------------------------------------------

/// Render the control panel: category selector and vote threshold.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Controls").color(theme::color(theme::HEADING_TEXT)));
    ui.separator();

    ui.strong("Select a Category:");
    let selected_label = state.selected_label().to_string();
    // Selection is applied after the combo closure so the category list
    // stays borrowable while the popup is open.
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("category_select")
        .selected_text(&selected_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for entry in &state.dataset.categories {
                if ui
                    .selectable_label(
                        entry.raw_code == state.selected_category,
                        &entry.display_label,
                    )
                    .clicked()
                {
                    picked = Some(entry.raw_code.clone());
                }
            }
        });
    if let Some(raw_code) = picked {
        state.set_category(raw_code);
    }

    ui.add_space(12.0);

    ui.strong("Minimum Rating Count:");
    let mut threshold = state.min_rating_count;
    if ui
        .add(
            egui::Slider::new(&mut threshold, RATING_COUNT_RANGE)
                .step_by(RATING_COUNT_STEP)
                .integer(),
        )
        .changed()
    {
        state.set_min_rating_count(threshold);
    }
}
