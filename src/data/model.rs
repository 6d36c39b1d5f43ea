use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// ProductRecord – one cleaned row of the source file
// ---------------------------------------------------------------------------

/// A single cleaned product row.
///
/// Only the loader constructs these, and only for rows whose rating,
/// discount, and rating count all coerced successfully. The three numeric
/// fields are plain `f64` rather than options for that reason.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub product_name: String,
    /// First segment of the pipe-delimited category hierarchy.
    pub raw_category: String,
    /// Human-readable rendering of `raw_category`.
    pub display_category: String,
    pub rating: f64,
    pub discount_percentage: f64,
    /// Number of user ratings behind `rating`.
    pub rating_count: f64,
    pub product_link: String,
    pub img_link: String,
}

// ---------------------------------------------------------------------------
// CategoryEntry – one selectable category
// ---------------------------------------------------------------------------

/// A `(raw_code, display_label)` pair backing the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Value used for filtering, e.g. `"Computers&Accessories"`.
    pub raw_code: String,
    /// Label shown to the user, e.g. `"Computers & Accessories"`.
    pub display_label: String,
}

// ---------------------------------------------------------------------------
// ReviewDataset – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The cleaned records plus their category lookup.
///
/// Built once at startup and read-only for the rest of the process:
/// every interaction derives views from it, nothing mutates it.
#[derive(Debug, Clone)]
pub struct ReviewDataset {
    pub records: Vec<ProductRecord>,
    /// Distinct `(raw_code, display_label)` pairs, sorted by display label.
    pub categories: Vec<CategoryEntry>,
}

impl ReviewDataset {
    /// Build the category lookup from the cleaned records.
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
        let mut categories: Vec<CategoryEntry> = Vec::new();

        for rec in &records {
            let key = (rec.raw_category.clone(), rec.display_category.clone());
            if seen.insert(key) {
                categories.push(CategoryEntry {
                    raw_code: rec.raw_category.clone(),
                    display_label: rec.display_category.clone(),
                });
            }
        }
        // Stable: pairs sharing a label keep first-seen order.
        categories.sort_by(|a, b| a.display_label.cmp(&b.display_label));

        ReviewDataset {
            records,
            categories,
        }
    }

    /// Number of cleaned records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, raw: &str, display: &str) -> ProductRecord {
        ProductRecord {
            product_name: name.to_string(),
            raw_category: raw.to_string(),
            display_category: display.to_string(),
            rating: 4.0,
            discount_percentage: 10.0,
            rating_count: 100.0,
            product_link: "No link".to_string(),
            img_link: "No image".to_string(),
        }
    }

    #[test]
    fn categories_are_deduplicated_and_sorted_by_label() {
        let dataset = ReviewDataset::from_records(vec![
            record("a", "OfficeProducts", "Office Products"),
            record("b", "Electronics", "Electronics"),
            record("c", "OfficeProducts", "Office Products"),
            record("d", "Computers&Accessories", "Computers & Accessories"),
        ]);

        let labels: Vec<&str> = dataset
            .categories
            .iter()
            .map(|c| c.display_label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Computers & Accessories", "Electronics", "Office Products"]
        );
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn equal_labels_keep_first_seen_order() {
        // Two raw codes can normalise to the same label; both entries
        // survive, in input order.
        let dataset = ReviewDataset::from_records(vec![
            record("a", "Home& Kitchen", "Home & Kitchen"),
            record("b", "Home&Kitchen", "Home & Kitchen"),
        ]);

        let codes: Vec<&str> = dataset
            .categories
            .iter()
            .map(|c| c.raw_code.as_str())
            .collect();
        assert_eq!(codes, vec!["Home& Kitchen", "Home&Kitchen"]);
    }

    #[test]
    fn empty_records_give_empty_categories() {
        let dataset = ReviewDataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.categories.is_empty());
    }
}
