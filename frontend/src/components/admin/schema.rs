//! The parameterization seam of the admin pages.
//!
//! Every admin page used to re-implement the same fetch/filter/form/submit
//! plumbing by hand. `ResourceSchema` captures the only things that
//! actually differ between resources: the API path, the envelope key, the
//! field list driving the table and the form, which fields are searched,
//! and the required-field checks. The generic `ResourceAdmin` component
//! does the rest once.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// How a field is rendered in the form.
pub enum FieldKind {
    Text,
    LongText,
    /// Long text with a markdown preview tab (blog content).
    Markdown,
    /// Parsed through `common::numeric::NumberInput`; blank clears the
    /// field, garbage blocks submit with a message.
    Number,
    Select(&'static [&'static str]),
}

/// One field of a resource: drives both a table column and a form input.
///
/// `get` renders the current value as a display string; `set` applies a raw
/// input string back onto the draft. Plain function pointers keep the
/// descriptor `'static` and copyable into callbacks.
pub struct FieldDef<R> {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Show as a column in the list table.
    pub in_list: bool,
    pub get: fn(&R) -> String,
    pub set: fn(&mut R, &str),
}

pub trait ResourceSchema: 'static {
    type Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static;

    /// Admin collection endpoint, e.g. `/api/admin/activities`.
    const BASE_PATH: &'static str;
    /// Key wrapping the collection in the GET envelope.
    const COLLECTION_KEY: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn default_draft() -> Self::Record;

    /// Store-assigned identifier; `None` on an unsaved draft.
    fn record_id(record: &Self::Record) -> Option<&str>;

    /// Values the list filter matches against.
    fn search_fields(record: &Self::Record) -> Vec<&str>;

    fn fields() -> Vec<FieldDef<Self::Record>>;

    /// Required-field emptiness checks only, mirroring HTML `required`
    /// semantics. Returns the first problem found.
    fn validate(draft: &Self::Record) -> Result<(), String> {
        for field in Self::fields() {
            if field.required && (field.get)(draft).trim().is_empty() {
                return Err(format!("{} is required.", field.label));
            }
        }
        Ok(())
    }
}

/// Splits a comma-separated input line into trimmed, non-empty items.
/// Used by array-of-string fields such as trip highlights.
pub fn split_list_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_input_trims_and_drops_empties() {
        assert_eq!(
            split_list_input(" Sunrise hike ,, Boat ride , "),
            vec!["Sunrise hike".to_string(), "Boat ride".to_string()]
        );
        assert!(split_list_input("").is_empty());
    }
}
