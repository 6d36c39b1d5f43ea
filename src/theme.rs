use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Dashboard palette
// ---------------------------------------------------------------------------

/// Page background behind the chart panels.
pub const PAGE_BACKGROUND: &str = "#f4f6f8";
/// Background of the control and status panels.
pub const PANEL_BACKGROUND: &str = "#ffffff";
/// Background inside the plot rectangles.
pub const PLOT_BACKGROUND: &str = "#f9f9f9";
/// Primary page text.
pub const PAGE_TEXT: &str = "#2c3e50";
/// Section headings above the charts.
pub const HEADING_TEXT: &str = "#34495e";
/// Axis and tick text inside the plots.
pub const PLOT_TEXT: &str = "#333333";
/// Bar series of the top-rated chart.
pub const BAR_SERIES: &str = "#3498db";
/// Point series of the discount-vs-rating chart.
pub const SCATTER_SERIES: &str = "#e74c3c";

/// Parse a `#rrggbb` hex string into an egui color. Malformed input
/// falls back to black rather than panicking mid-frame.
pub fn color(hex: &str) -> Color32 {
    let rgb = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Shift a palette color's lightness, used for muted status text.
/// Positive shifts lighten, negative darken; the result is clamped.
pub fn emphasis(hex: &str, lightness_shift: f32) -> Color32 {
    let base = color(hex);
    let srgb = Srgb::new(
        base.r() as f32 / 255.0,
        base.g() as f32 / 255.0,
        base.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + lightness_shift).clamp(0.0, 1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
