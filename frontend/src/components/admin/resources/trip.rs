use common::model::trip::Trip;
use common::numeric::NumberInput;

use super::super::schema::{split_list_input, FieldDef, FieldKind, ResourceSchema};

pub struct TripSchema;

impl ResourceSchema for TripSchema {
    type Record = Trip;

    const BASE_PATH: &'static str = "/api/admin/trips";
    const COLLECTION_KEY: &'static str = "trips";
    const SINGULAR: &'static str = "Trip";
    const PLURAL: &'static str = "Trips";

    fn default_draft() -> Trip {
        Trip::default()
    }

    fn record_id(record: &Trip) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Trip) -> Vec<&str> {
        vec![
            &record.title,
            &record.destination,
            &record.trip_type,
            &record.category,
        ]
    }

    fn fields() -> Vec<FieldDef<Trip>> {
        vec![
            FieldDef {
                label: "Title",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |t| t.title.clone(),
                set: |t, raw| t.title = raw.to_string(),
            },
            FieldDef {
                label: "Destination",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |t| t.destination.clone(),
                set: |t, raw| t.destination = raw.to_string(),
            },
            FieldDef {
                label: "Trip type",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |t| t.trip_type.clone(),
                set: |t, raw| t.trip_type = raw.to_string(),
            },
            FieldDef {
                label: "Category",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |t| t.category.clone(),
                set: |t, raw| t.category = raw.to_string(),
            },
            FieldDef {
                label: "Days",
                kind: FieldKind::Number,
                required: false,
                in_list: false,
                get: |t| t.days.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.days = Some(v),
                    NumberInput::Empty => t.days = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Sale price",
                kind: FieldKind::Number,
                required: false,
                in_list: true,
                get: |t| t.sale_price.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.sale_price = Some(v),
                    NumberInput::Empty => t.sale_price = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Adult price",
                kind: FieldKind::Number,
                required: false,
                in_list: false,
                get: |t| t.adult_price.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.adult_price = Some(v),
                    NumberInput::Empty => t.adult_price = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Normal price",
                kind: FieldKind::Number,
                required: false,
                in_list: false,
                get: |t| t.normal_price.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.normal_price = Some(v),
                    NumberInput::Empty => t.normal_price = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Highlights",
                kind: FieldKind::Text,
                required: false,
                in_list: false,
                get: |t| t.highlights.join(", "),
                set: |t, raw| t.highlights = split_list_input(raw),
            },
            FieldDef {
                label: "Description",
                kind: FieldKind::LongText,
                required: false,
                in_list: false,
                get: |t| t.description.clone(),
                set: |t, raw| t.description = raw.to_string(),
            },
        ]
    }
}
