//! Landmark search and filtering.

use crate::landmark::Landmark;

/// Filter the landmark collection by a free-text query.
///
/// Base ordering is ascending by id (missing ids decode as 0 upstream).
/// An empty query (after trimming) returns the full sorted collection.
/// Otherwise a landmark matches when the case-folded query is a substring
/// of its stringified id, name, address or province. Matches keep the
/// base ordering, so the function is idempotent.
pub fn filter_landmarks(all: &[Landmark], query: &str) -> Vec<Landmark> {
    let mut base: Vec<Landmark> = all.to_vec();
    base.sort_by_key(|lm| lm.id);

    let keyword = query.trim().to_lowercase();
    if keyword.is_empty() {
        return base;
    }

    base.into_iter()
        .filter(|lm| {
            lm.id.to_string().contains(&keyword)
                || lm.name.to_lowercase().contains(&keyword)
                || lm.address.to_lowercase().contains(&keyword)
                || lm.province.to_lowercase().contains(&keyword)
        })
        .collect()
}
