//! Chart computation: the pure core behind both dashboard charts.
//!
//! `render` is a stateless function of the immutable dataset and the two
//! control values; the UI layer calls it on every control change and
//! draws whatever comes back. Nothing here depends on egui.

use crate::data::filter::filtered_indices;
use crate::data::model::ReviewDataset;
use crate::theme;

/// Bars shown in the top-rated chart.
pub const MAX_BAR_ROWS: usize = 10;
/// Product names are cut to this many characters for bar labels.
pub const NAME_TRUNCATE_CHARS: usize = 50;

// ---------------------------------------------------------------------------
// Chart specs
// ---------------------------------------------------------------------------

/// Fixed visual styling carried by a chart spec, independent of data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub plot_background: &'static str,
    pub font_color: &'static str,
    pub series_color: &'static str,
    pub height: f32,
}

impl ChartTheme {
    fn bar() -> Self {
        ChartTheme {
            plot_background: theme::PLOT_BACKGROUND,
            font_color: theme::PLOT_TEXT,
            series_color: theme::BAR_SERIES,
            height: 400.0,
        }
    }

    fn scatter() -> Self {
        ChartTheme {
            series_color: theme::SCATTER_SERIES,
            ..ChartTheme::bar()
        }
    }
}

/// One bar: pre-truncated product label plus its rating.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub rating: f64,
}

/// Horizontal top-rated-products chart, highest rating first.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    /// At most [`MAX_BAR_ROWS`] entries, ratings non-increasing.
    pub bars: Vec<BarEntry>,
    pub value_label: &'static str,
    pub category_label: &'static str,
    pub theme: ChartTheme,
}

/// One scatter point with its hover metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub discount_percentage: f64,
    pub rating: f64,
    pub product_name: String,
    pub product_link: String,
    pub img_link: String,
    pub rating_count: f64,
}

/// Discount-vs-rating chart, one point per filtered record, uncapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub points: Vec<ScatterPoint>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub theme: ChartTheme,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Compute both charts for the current control values.
pub fn render(
    dataset: &ReviewDataset,
    selected_category: &str,
    min_rating_count: f64,
) -> (BarChartSpec, ScatterChartSpec) {
    let indices = filtered_indices(dataset, selected_category, min_rating_count);

    // Stable sort: records tied on rating keep their input order.
    let mut ranked = indices.clone();
    ranked.sort_by(|&a, &b| dataset.records[b].rating.total_cmp(&dataset.records[a].rating));
    ranked.truncate(MAX_BAR_ROWS);

    let bars = ranked
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            BarEntry {
                label: short_name(&rec.product_name),
                rating: rec.rating,
            }
        })
        .collect();

    let points = indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            ScatterPoint {
                discount_percentage: rec.discount_percentage,
                rating: rec.rating,
                product_name: rec.product_name.clone(),
                product_link: rec.product_link.clone(),
                img_link: rec.img_link.clone(),
                rating_count: rec.rating_count,
            }
        })
        .collect();

    (
        BarChartSpec {
            bars,
            value_label: "Rating",
            category_label: "Product",
            theme: ChartTheme::bar(),
        },
        ScatterChartSpec {
            points,
            x_label: "Discount %",
            y_label: "Rating",
            theme: ChartTheme::scatter(),
        },
    )
}

/// First [`NAME_TRUNCATE_CHARS`] characters plus an ellipsis marker.
/// The suffix is applied unconditionally, names already shorter than the
/// cut included (mirrors the source data pipeline as-is).
fn short_name(name: &str) -> String {
    let mut short: String = name.chars().take(NAME_TRUNCATE_CHARS).collect();
    short.push_str("...");
    short
}
