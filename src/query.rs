use crate::constants::ALL_CATEGORIES;
use crate::types::ControlRecord;

/// Filter the record collection by title substring and category.
///
/// The title match is case-insensitive; the category match is exact
/// unless `selected_category` is the "all categories" sentinel. Both
/// constraints are ANDed. Input order is preserved, so an id-sorted
/// collection stays id-sorted.
pub fn filter_controls<'a>(
    records: &'a [ControlRecord],
    search_text: &str,
    selected_category: &str,
) -> Vec<&'a ControlRecord> {
    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .filter(|record| {
            selected_category == ALL_CATEGORIES || record.category == selected_category
        })
        .collect()
}
