use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::model::{ProductRecord, ReviewDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Sentinel for a missing product link.
pub const NO_LINK: &str = "No link";
/// Sentinel for a missing image link.
pub const NO_IMAGE: &str = "No image";
/// Category code for rows whose category field is missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Columns the source file must carry (after header trimming).
const REQUIRED_COLUMNS: [&str; 7] = [
    "product_name",
    "category",
    "rating",
    "discount_percentage",
    "rating_count",
    "product_link",
    "img_link",
];

/// Errors surfaced while loading the source file.
///
/// Data-quality problems (unparseable numbers, missing links) are handled
/// by the cleaning rules below and never reach this type.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening review file")]
    Io(#[from] std::io::Error),
    #[error("reading review file")]
    Csv(#[from] csv::Error),
    #[error("review file is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Load and clean a review CSV into a [`ReviewDataset`].
///
/// Cleaning pass, in order:
/// 1. trim incidental whitespace from column headers
/// 2. derive the raw category code (first `|` segment, `"Unknown"` when
///    the field is missing) and its display label
/// 3. coerce rating, discount percentage (`"64%"` → `64.0`) and rating
///    count to numbers; unparseable cells count as missing
/// 4. default missing links to the `"No link"` / `"No image"` sentinels
/// 5. drop rows still missing any of the three numeric fields
///
/// Zero surviving rows is not an error here; callers initialising UI
/// state from the category list must guard against the empty case.
pub fn load_reviews(path: &Path) -> Result<ReviewDataset, LoadError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let labels = LabelFormatter::new();
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RawRow>() {
        match clean_row(row?, &labels) {
            Some(rec) => records.push(rec),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} rows with unparseable numeric fields");
    }

    Ok(ReviewDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// One CSV row before cleaning. Every field is optional: empty cells
/// deserialize to `None` and are resolved by the cleaning rules. Columns
/// outside this set are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    product_name: Option<String>,
    category: Option<String>,
    rating: Option<String>,
    discount_percentage: Option<String>,
    rating_count: Option<String>,
    product_link: Option<String>,
    img_link: Option<String>,
}

/// Apply the cleaning rules to one raw row. `None` means the row failed
/// numeric coercion and is excluded from the dataset.
fn clean_row(row: RawRow, labels: &LabelFormatter) -> Option<ProductRecord> {
    let raw_category = match row.category.as_deref() {
        Some(path) if !path.is_empty() => {
            path.split('|').next().unwrap_or(path).to_string()
        }
        _ => UNKNOWN_CATEGORY.to_string(),
    };
    let display_category = labels.display_label(&raw_category);

    let rating = coerce_numeric(row.rating.as_deref())?;
    let discount_percentage = coerce_percent(row.discount_percentage.as_deref())?;
    let rating_count = coerce_numeric(row.rating_count.as_deref())?;

    Some(ProductRecord {
        product_name: row.product_name.unwrap_or_default(),
        raw_category,
        display_category,
        rating,
        discount_percentage,
        rating_count,
        product_link: row.product_link.unwrap_or_else(|| NO_LINK.to_string()),
        img_link: row.img_link.unwrap_or_else(|| NO_IMAGE.to_string()),
    })
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Lenient numeric coercion: trim and parse, `None` on failure. A literal
/// `"NaN"` cell parses as a float but still counts as missing.
fn coerce_numeric(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Discounts arrive percent-formatted (`"64%"`); strip one trailing `%`
/// before parsing.
fn coerce_percent(field: Option<&str>) -> Option<f64> {
    coerce_numeric(field.map(|s| {
        let s = s.trim();
        s.strip_suffix('%').unwrap_or(s)
    }))
}

// ---------------------------------------------------------------------------
// Display labels
// ---------------------------------------------------------------------------

/// Formats raw category codes into display labels:
/// `"OfficeProducts"` → `"Office Products"`,
/// `"Computers&Accessories"` → `"Computers & Accessories"`.
struct LabelFormatter {
    camel_boundary: Regex,
    ampersand: Regex,
}

impl LabelFormatter {
    fn new() -> Self {
        LabelFormatter {
            camel_boundary: Regex::new(r"([a-z])([A-Z])").unwrap(),
            ampersand: Regex::new(r"\s*&\s*").unwrap(),
        }
    }

    fn display_label(&self, raw_code: &str) -> String {
        let spaced = self.camel_boundary.replace_all(raw_code, "${1} ${2}");
        let cleaned = self.ampersand.replace_all(&spaced, " & ");
        cleaned.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str =
        "product_name, category ,rating,discount_percentage, rating_count,product_link,img_link";

    fn load_from(contents: &str) -> Result<ReviewDataset, LoadError> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        load_reviews(file.path())
    }

    #[test]
    fn camel_case_codes_get_spaced() {
        let labels = LabelFormatter::new();
        assert_eq!(labels.display_label("OfficeProducts"), "Office Products");
        assert_eq!(
            labels.display_label("MusicalInstruments"),
            "Musical Instruments"
        );
        assert_eq!(labels.display_label("Electronics"), "Electronics");
    }

    #[test]
    fn ampersands_are_normalized() {
        let labels = LabelFormatter::new();
        assert_eq!(
            labels.display_label("Computers&Accessories"),
            "Computers & Accessories"
        );
        assert_eq!(labels.display_label("Home& Kitchen"), "Home & Kitchen");
        assert_eq!(labels.display_label("Toys & Games"), "Toys & Games");
    }

    #[test]
    fn labels_are_nonempty_without_double_spaces() {
        let labels = LabelFormatter::new();
        for code in [
            "Electronics",
            "Computers&Accessories",
            "Home&Kitchen",
            "OfficeProducts",
            "MusicalInstruments",
            "HomeImprovement",
            "Car&Motorbike",
            "Health&PersonalCare",
            "Toys&Games",
            "Unknown",
        ] {
            let label = labels.display_label(code);
            assert!(!label.is_empty(), "empty label for {code}");
            assert!(!label.contains("  "), "double space in label {label:?}");
        }
    }

    #[test]
    fn percent_and_plain_numbers_coerce() {
        assert_eq!(coerce_percent(Some("40%")), Some(40.0));
        assert_eq!(coerce_percent(Some(" 12.5% ")), Some(12.5));
        assert_eq!(coerce_percent(Some("7")), Some(7.0));
        assert_eq!(coerce_numeric(Some("4.2")), Some(4.2));
        assert_eq!(coerce_numeric(Some(" 301 ")), Some(301.0));
        assert_eq!(coerce_numeric(Some("N/A")), None);
        assert_eq!(coerce_numeric(Some("24,269")), None);
        assert_eq!(coerce_numeric(Some("NaN")), None);
        assert_eq!(coerce_numeric(None), None);
    }

    #[test]
    fn category_code_is_first_pipe_segment() {
        let dataset = load_from(&format!(
            "{HEADER}\nWidget,Electronics|Mobiles|Accessories,4.2,40%,120,https://x,https://y\n"
        ))
        .expect("load");
        assert_eq!(dataset.records[0].raw_category, "Electronics");
        assert_eq!(dataset.records[0].display_category, "Electronics");
    }

    #[test]
    fn missing_category_becomes_unknown() {
        let dataset = load_from(&format!(
            "{HEADER}\nWidget,,4.2,40%,120,https://x,https://y\n"
        ))
        .expect("load");
        assert_eq!(dataset.records[0].raw_category, UNKNOWN_CATEGORY);
    }

    #[test]
    fn rows_failing_coercion_are_dropped() {
        let dataset = load_from(&format!(
            "{HEADER}\n\
             Good,Electronics,4.2,40%,120,https://x,https://y\n\
             BadRating,Electronics,N/A,40%,120,https://x,https://y\n\
             BadCount,Electronics,4.0,40%,\"24,269\",https://x,https://y\n\
             BadDiscount,Electronics,4.0,none,120,https://x,https://y\n"
        ))
        .expect("load");

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].product_name, "Good");
        for rec in &dataset.records {
            assert!(rec.rating.is_finite());
            assert!(rec.discount_percentage.is_finite());
            assert!(rec.rating_count.is_finite());
        }
    }

    #[test]
    fn missing_links_get_sentinels() {
        let dataset = load_from(&format!(
            "{HEADER}\nWidget,Electronics,4.2,40%,120,,\n"
        ))
        .expect("load");
        assert_eq!(dataset.records[0].product_link, NO_LINK);
        assert_eq!(dataset.records[0].img_link, NO_IMAGE);
    }

    #[test]
    fn headers_with_whitespace_are_trimmed() {
        // HEADER already pads `category` and `rating_count`.
        let dataset = load_from(&format!(
            "{HEADER}\nWidget,Electronics,4.2,40%,120,https://x,https://y\n"
        ))
        .expect("load");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn empty_file_yields_empty_dataset() {
        let dataset = load_from(&format!("{HEADER}\n")).expect("load");
        assert!(dataset.is_empty());
        assert!(dataset.categories.is_empty());
    }

    #[test]
    fn missing_column_is_an_error() {
        let result = load_from(
            "product_name,category,discount_percentage,rating_count,product_link,img_link\n",
        );
        assert!(matches!(result, Err(LoadError::MissingColumn("rating"))));
    }

    #[test]
    fn category_list_is_sorted_and_deduplicated() {
        let dataset = load_from(&format!(
            "{HEADER}\n\
             A,OfficeProducts|Paper,4.0,10%,50,https://x,https://y\n\
             B,Electronics|Audio,4.5,20%,60,https://x,https://y\n\
             C,OfficeProducts|Pens,3.9,30%,70,https://x,https://y\n"
        ))
        .expect("load");

        let labels: Vec<&str> = dataset
            .categories
            .iter()
            .map(|c| c.display_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Electronics", "Office Products"]);
    }
}
