use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, Points};

use crate::charts::{BarChartSpec, ScatterChartSpec, ScatterPoint};
use crate::state::AppState;
use crate::theme;

// ---------------------------------------------------------------------------
// Chart areas (central panel)
// ---------------------------------------------------------------------------

/// Render both chart areas in the central panel.
pub fn charts_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            section_heading(ui, "Top Rated Products");
            rating_bar_chart(ui, &state.bar_chart);

            ui.add_space(24.0);

            section_heading(ui, "Discount % vs Rating");
            discount_scatter(ui, &state.scatter_chart);
        });
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.heading(RichText::new(text).color(theme::color(theme::HEADING_TEXT)));
    ui.add_space(4.0);
}

/// Point the plot-relevant visuals at the chart theme. egui_plot fills
/// the plot rectangle with `extreme_bg_color`.
fn apply_plot_visuals(ui: &mut Ui, background: &str, text: &str) {
    let visuals = ui.visuals_mut();
    visuals.extreme_bg_color = theme::color(background);
    visuals.override_text_color = Some(theme::color(text));
}

// ---------------------------------------------------------------------------
// Top-rated bar chart
// ---------------------------------------------------------------------------

/// Horizontal bars, highest rating at the top, product names as ticks.
fn rating_bar_chart(ui: &mut Ui, spec: &BarChartSpec) {
    apply_plot_visuals(ui, spec.theme.plot_background, spec.theme.font_color);

    let n = spec.bars.len();
    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            // Rank 0 gets the largest position so it draws at the top.
            Bar::new((n - 1 - rank) as f64, entry.rating)
                .name(&entry.label)
                .width(0.6)
        })
        .collect();

    let chart = BarChart::new(bars)
        .color(theme::color(spec.theme.series_color))
        .horizontal();

    let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();

    Plot::new("top_rated_products")
        .height(spec.theme.height)
        .x_axis_label(spec.value_label)
        .y_axis_label(spec.category_label)
        .y_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            bar_tick_label(&labels, mark.value)
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Map a y-axis grid position back to the product label drawn there.
/// Non-integer positions and out-of-range marks get no tick text.
fn bar_tick_label(labels: &[String], position: f64) -> String {
    let nearest = position.round();
    if (position - nearest).abs() > 0.05 || nearest < 0.0 {
        return String::new();
    }
    let rank = labels.len() as i64 - 1 - nearest as i64;
    if rank < 0 {
        return String::new();
    }
    labels.get(rank as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Discount-vs-rating scatter
// ---------------------------------------------------------------------------

/// One egui_plot element per record so each point carries its own hover
/// metadata, the same way the reference viewer names its lines.
fn discount_scatter(ui: &mut Ui, spec: &ScatterChartSpec) {
    apply_plot_visuals(ui, spec.theme.plot_background, spec.theme.font_color);

    let color = theme::color(spec.theme.series_color);

    Plot::new("discount_vs_rating")
        .height(spec.theme.height)
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for point in &spec.points {
                let marks = Points::new(vec![[point.discount_percentage, point.rating]])
                    .name(hover_label(point))
                    .color(color)
                    .radius(3.0);
                plot_ui.points(marks);
            }
        });
}

/// Hover metadata for one point: name, vote count, then both links.
fn hover_label(point: &ScatterPoint) -> String {
    format!(
        "{}\n{} ratings\n{}\n{}",
        point.product_name, point.rating_count, point.product_link, point.img_link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_labels_map_top_position_to_first_bar() {
        let labels = vec!["first...".to_string(), "second...".to_string()];
        // Two bars: positions 1 (top, rank 0) and 0 (rank 1).
        assert_eq!(bar_tick_label(&labels, 1.0), "first...");
        assert_eq!(bar_tick_label(&labels, 0.0), "second...");
    }

    #[test]
    fn tick_labels_skip_fractional_and_out_of_range_marks() {
        let labels = vec!["only...".to_string()];
        assert_eq!(bar_tick_label(&labels, 0.5), "");
        assert_eq!(bar_tick_label(&labels, -1.0), "");
        assert_eq!(bar_tick_label(&labels, 3.0), "");
    }

    #[test]
    fn hover_label_carries_all_metadata() {
        let point = ScatterPoint {
            discount_percentage: 40.0,
            rating: 4.2,
            product_name: "Widget".to_string(),
            product_link: "https://example.com/p".to_string(),
            img_link: "No image".to_string(),
            rating_count: 120.0,
        };
        let label = hover_label(&point);
        assert!(label.contains("Widget"));
        assert!(label.contains("120 ratings"));
        assert!(label.contains("https://example.com/p"));
        assert!(label.contains("No image"));
    }
}
