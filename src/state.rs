use crate::charts::{self, BarChartSpec, ScatterChartSpec};
use crate::data::model::ReviewDataset;

/// Threshold the rating-count slider starts at.
pub const DEFAULT_MIN_RATING_COUNT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state: the immutable dataset, the two control values, and
/// the chart specs computed from them.
pub struct AppState {
    /// Cleaned dataset, built once at startup and never mutated.
    pub dataset: ReviewDataset,

    /// Raw code of the selected category.
    pub selected_category: String,

    /// Minimum number of ratings a record needs to stay in view.
    pub min_rating_count: f64,

    /// Charts for the current control values (cached between changes).
    pub bar_chart: BarChartSpec,
    pub scatter_chart: ScatterChartSpec,
}

impl AppState {
    /// Wrap a prepared dataset. Defaults: first category in sorted order,
    /// threshold of [`DEFAULT_MIN_RATING_COUNT`]. The caller guarantees a
    /// non-empty category list.
    pub fn new(dataset: ReviewDataset) -> Self {
        let selected_category = dataset
            .categories
            .first()
            .map(|c| c.raw_code.clone())
            .unwrap_or_default();
        let min_rating_count = DEFAULT_MIN_RATING_COUNT;
        let (bar_chart, scatter_chart) =
            charts::render(&dataset, &selected_category, min_rating_count);

        Self {
            dataset,
            selected_category,
            min_rating_count,
            bar_chart,
            scatter_chart,
        }
    }

    /// Switch category and recompute both charts.
    pub fn set_category(&mut self, raw_code: String) {
        if self.selected_category != raw_code {
            self.selected_category = raw_code;
            self.refresh_charts();
        }
    }

    /// Move the vote threshold and recompute both charts.
    pub fn set_min_rating_count(&mut self, threshold: f64) {
        if self.min_rating_count != threshold {
            self.min_rating_count = threshold;
            self.refresh_charts();
        }
    }

    /// Display label of the currently selected category.
    pub fn selected_label(&self) -> &str {
        self.dataset
            .categories
            .iter()
            .find(|c| c.raw_code == self.selected_category)
            .map(|c| c.display_label.as_str())
            .unwrap_or(&self.selected_category)
    }

    /// Re-run chart computation after a control change.
    fn refresh_charts(&mut self) {
        let (bar, scatter) =
            charts::render(&self.dataset, &self.selected_category, self.min_rating_count);
        self.bar_chart = bar;
        self.scatter_chart = scatter;
    }
}
