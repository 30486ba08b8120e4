//! Case-insensitive substring matching shared by the query helpers.
//!
//! An empty query is a substring of every field, so searching with `""`
//! returns the full input.

/// True when any field contains `query`, ignoring case.
pub fn matches_any<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
