//! Case-insensitive substring matching used by the admin list filter.
//!
//! The filter runs against the in-memory collection on every keystroke, so
//! the predicate is a straight `contains` over the record's designated
//! display fields. An empty term matches everything, which keeps
//! `filter("")` an identity over the collection.

/// Returns true when any of `fields` contains `term`, ignoring case.
pub fn matches_term(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
