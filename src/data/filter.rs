use super::model::ReviewDataset;

// ---------------------------------------------------------------------------
// Filter predicate: selected category + minimum vote count
// ---------------------------------------------------------------------------

/// Indices of records in the selected category with at least
/// `min_rating_count` ratings.
///
/// The category code is not validated: an unknown code matches nothing
/// and the result is simply empty. Input order is preserved.
pub fn filtered_indices(
    dataset: &ReviewDataset,
    raw_category: &str,
    min_rating_count: f64,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.raw_category == raw_category && rec.rating_count >= min_rating_count
        })
        .map(|(i, _)| i)
        .collect()
}
