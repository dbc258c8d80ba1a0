//! State for the generic admin page: the loaded collection, the search
//! term, and the current mode (list or form). All decision logic that does
//! not touch the DOM lives here so it can be unit tested.

use std::collections::BTreeMap;

use common::numeric::NumberInput;
use common::search::matches_term;
use serde::Serialize;

use super::schema::{FieldKind, ResourceSchema};

/// The page is always either showing the table or editing one draft.
pub enum Mode<S: ResourceSchema> {
    List,
    Form(FormState<S>),
}

/// Draft of a record being created or edited.
pub struct FormState<S: ResourceSchema> {
    pub draft: S::Record,
    /// `Some` when editing an existing record; decides POST vs PUT.
    pub editing_id: Option<String>,
    /// Guard against re-entrant submits: while true, further `Submit`
    /// messages are ignored and the controls are disabled.
    pub submitting: bool,
    /// Digest of the draft payload when the form was opened; drives the
    /// unsaved-changes indicator.
    baseline_md5: String,
    /// Pending numeric-input errors by field index. A non-empty map blocks
    /// submission.
    pub number_errors: BTreeMap<usize, String>,
    /// What the user actually typed into an invalid numeric field, kept so
    /// the input does not snap back while they fix it.
    raw_numbers: BTreeMap<usize, String>,
    /// Markdown fields show a preview tab when this is set.
    pub preview: bool,
}

impl<S: ResourceSchema> FormState<S> {
    pub fn create() -> Self {
        Self::with_draft(S::default_draft(), None)
    }

    /// Opens the form over a copy of an existing record. The clone owns its
    /// array fields, so edits never alias the list entry.
    pub fn edit(record: &S::Record) -> Self {
        let id = S::record_id(record).map(str::to_string);
        Self::with_draft(record.clone(), id)
    }

    fn with_draft(draft: S::Record, editing_id: Option<String>) -> Self {
        let baseline_md5 = payload_md5(&payload_of(&draft));
        Self {
            draft,
            editing_id,
            submitting: false,
            baseline_md5,
            number_errors: BTreeMap::new(),
            raw_numbers: BTreeMap::new(),
            preview: false,
        }
    }

    /// Applies a raw input string to the draft field at `index`.
    ///
    /// Numeric fields go through the tagged parser: blank clears the field,
    /// a valid number sets it, and garbage is recorded as a field error
    /// without touching the draft.
    pub fn apply_input(&mut self, index: usize, raw: &str) {
        let fields = S::fields();
        let Some(field) = fields.get(index) else {
            return;
        };
        match field.kind {
            FieldKind::Number => match NumberInput::parse(raw) {
                NumberInput::Invalid(reason) => {
                    self.number_errors.insert(index, reason);
                    self.raw_numbers.insert(index, raw.to_string());
                }
                _ => {
                    self.number_errors.remove(&index);
                    self.raw_numbers.remove(&index);
                    (field.set)(&mut self.draft, raw);
                }
            },
            _ => (field.set)(&mut self.draft, raw),
        }
    }

    /// What the input at `index` should display right now.
    pub fn display_value(&self, index: usize) -> String {
        if let Some(raw) = self.raw_numbers.get(&index) {
            return raw.clone();
        }
        S::fields()
            .get(index)
            .map(|field| (field.get)(&self.draft))
            .unwrap_or_default()
    }

    /// Marks the form as submitting. Refuses while a submit is already in
    /// flight, so a double-click issues exactly one request.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// First reason the draft cannot be submitted, if any: a pending
    /// numeric error wins over a missing required field.
    pub fn first_blocker(&self) -> Option<String> {
        if let Some(reason) = self.number_errors.values().next() {
            return Some(reason.clone());
        }
        S::validate(&self.draft).err()
    }

    pub fn is_dirty(&self) -> bool {
        payload_md5(&payload_of(&self.draft)) != self.baseline_md5
    }
}

/// Serializes a record to the JSON body sent on POST/PUT: the payload
/// fields only, with the store-owned `id` and timestamps stripped.
pub fn payload_of<R: Serialize>(record: &R) -> serde_json::Value {
    let mut value = serde_json::to_value(record).unwrap_or(serde_json::Value::Null);
    if let Some(map) = value.as_object_mut() {
        map.remove("id");
        map.remove("createdAt");
        map.remove("updatedAt");
    }
    value
}

fn payload_md5(payload: &serde_json::Value) -> String {
    format!("{:x}", md5::compute(payload.to_string()))
}

pub struct ResourceAdmin<S: ResourceSchema> {
    pub records: Vec<S::Record>,
    pub search: String,
    pub mode: Mode<S>,
    pub loading: bool,
    /// Incremented on every `load()`; responses carrying an older epoch are
    /// stale and get dropped instead of overwriting newer state.
    pub load_epoch: u32,
}

impl<S: ResourceSchema> ResourceAdmin<S> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            mode: Mode::List,
            loading: false,
            load_epoch: 0,
        }
    }

    /// The filtered view of the collection: case-insensitive substring
    /// match over the schema's designated fields, recomputed per keystroke.
    /// An empty term yields the collection unchanged.
    pub fn filtered(&self) -> Vec<&S::Record> {
        self.records
            .iter()
            .filter(|record| matches_term(&S::search_fields(record), &self.search))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&S::Record> {
        self.records
            .iter()
            .find(|record| S::record_id(record) == Some(id))
    }

    /// Drops a record from local state after a confirmed delete succeeded.
    pub fn remove_local(&mut self, id: &str) {
        self.records.retain(|record| S::record_id(record) != Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::admin::resources::{ActivitySchema, LeadSchema, TripSchema};
    use common::model::activity::Activity;
    use common::model::lead::Lead;
    use common::model::trip::Trip;

    fn activity(name: &str, category: &str) -> Activity {
        Activity {
            id: Some(format!("id-{}", name)),
            name: name.into(),
            category: category.into(),
            ..Activity::default()
        }
    }

    #[test]
    fn empty_search_is_identity() {
        let mut page = ResourceAdmin::<ActivitySchema>::new();
        page.records = vec![activity("Scuba Diving", "Water Sports"), activity("Yoga", "")];
        assert_eq!(page.filtered().len(), 2);
    }

    #[test]
    fn search_matches_designated_fields_case_insensitively() {
        let mut page = ResourceAdmin::<ActivitySchema>::new();
        page.records = vec![
            activity("Scuba Diving", "Water Sports"),
            activity("Museum Walk", "Culture"),
        ];
        page.search = "water".into();
        let hits = page.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Scuba Diving");
    }

    #[test]
    fn remove_local_drops_only_the_deleted_record() {
        let mut page = ResourceAdmin::<ActivitySchema>::new();
        page.records = vec![activity("A", ""), activity("B", "")];
        page.remove_local("id-A");
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].name, "B");
    }

    #[test]
    fn create_draft_starts_from_defaults_without_id() {
        let form = FormState::<ActivitySchema>::create();
        assert!(form.editing_id.is_none());
        assert!(!form.submitting);
        assert_eq!(form.draft, Activity::default());
    }

    #[test]
    fn edit_then_submit_payload_equals_source_fields() {
        let source = Activity {
            id: Some("abc".into()),
            name: "Scuba Diving".into(),
            category: "Water Sports".into(),
            description: String::new(),
            image_url: "https://img".into(),
            created_at: Some("2026-01-01T00:00:00Z".into()),
            updated_at: Some("2026-01-02T00:00:00Z".into()),
        };
        let form = FormState::<ActivitySchema>::edit(&source);
        let body = payload_of(&form.draft);
        // Payload carries the fields verbatim, without store metadata.
        assert_eq!(body["name"], "Scuba Diving");
        assert_eq!(body["category"], "Water Sports");
        assert!(body.get("id").is_none());
        assert!(body.get("createdAt").is_none());
        assert!(body.get("updatedAt").is_none());
        assert!(!form.is_dirty());
    }

    #[test]
    fn blank_numeric_input_clears_the_field() {
        let mut form = FormState::<LeadSchema>::create();
        let group_size_idx = field_index::<LeadSchema>("Group size");
        form.apply_input(group_size_idx, "4");
        assert_eq!(form.draft.group_size, Some(4.0));
        form.apply_input(group_size_idx, "");
        assert_eq!(form.draft.group_size, None);
        assert!(form.number_errors.is_empty());
    }

    #[test]
    fn invalid_numeric_input_blocks_submit_and_keeps_the_text() {
        let mut form = FormState::<LeadSchema>::create();
        form.apply_input(0, "Ada");
        form.apply_input(1, "ada@example.com");
        let group_size_idx = field_index::<LeadSchema>("Group size");
        form.apply_input(group_size_idx, "four");
        assert_eq!(form.draft.group_size, None);
        assert!(form.first_blocker().unwrap().contains("four"));
        assert_eq!(form.display_value(group_size_idx), "four");
        // Fixing the input unblocks.
        form.apply_input(group_size_idx, "4");
        assert!(form.first_blocker().is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = FormState::<ActivitySchema>::create();
        form.apply_input(field_index::<ActivitySchema>("Name"), "Scuba Diving");
        form.apply_input(field_index::<ActivitySchema>("Category"), "Water Sports");
        // First click wins; the double-click while in flight is a no-op.
        assert!(form.begin_submit());
        assert!(form.submitting);
        assert!(!form.begin_submit());
        // After the request settles a new submit may start.
        form.submitting = false;
        assert!(form.begin_submit());
    }

    #[test]
    fn required_fields_block_submit() {
        let form = FormState::<ActivitySchema>::create();
        let blocker = form.first_blocker().unwrap();
        assert!(blocker.contains("required"));
    }

    #[test]
    fn optional_description_does_not_block() {
        let mut form = FormState::<ActivitySchema>::create();
        form.apply_input(field_index::<ActivitySchema>("Name"), "Scuba Diving");
        form.apply_input(field_index::<ActivitySchema>("Category"), "Water Sports");
        assert!(form.first_blocker().is_none());
    }

    #[test]
    fn highlights_input_round_trips_as_owned_list() {
        let mut form = FormState::<TripSchema>::create();
        let idx = field_index::<TripSchema>("Highlights");
        form.apply_input(idx, "Sunrise hike, Boat ride");
        assert_eq!(
            form.draft.highlights,
            vec!["Sunrise hike".to_string(), "Boat ride".to_string()]
        );
        assert_eq!(form.display_value(idx), "Sunrise hike, Boat ride");
    }

    #[test]
    fn dirty_flag_follows_edits() {
        let source = Trip {
            id: Some("t1".into()),
            title: "Island Hop".into(),
            ..Trip::default()
        };
        let mut form = FormState::<TripSchema>::edit(&source);
        assert!(!form.is_dirty());
        form.apply_input(field_index::<TripSchema>("Title"), "Island Hopping");
        assert!(form.is_dirty());
    }

    fn field_index<S: ResourceSchema>(label: &str) -> usize {
        S::fields()
            .iter()
            .position(|f| f.label == label)
            .unwrap_or_else(|| panic!("no field labelled {}", label))
    }
}
