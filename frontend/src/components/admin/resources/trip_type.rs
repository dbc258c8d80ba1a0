use common::model::trip_type::TripType;

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

pub struct TripTypeSchema;

impl ResourceSchema for TripTypeSchema {
    type Record = TripType;

    const BASE_PATH: &'static str = "/api/admin/trip-types";
    const COLLECTION_KEY: &'static str = "tripTypes";
    const SINGULAR: &'static str = "Trip Type";
    const PLURAL: &'static str = "Trip Types";

    fn default_draft() -> TripType {
        TripType::default()
    }

    fn record_id(record: &TripType) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &TripType) -> Vec<&str> {
        vec![&record.name, &record.description]
    }

    fn fields() -> Vec<FieldDef<TripType>> {
        vec![
            FieldDef {
                label: "Name",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |t| t.name.clone(),
                set: |t, raw| t.name = raw.to_string(),
            },
            FieldDef {
                label: "Description",
                kind: FieldKind::LongText,
                required: false,
                in_list: true,
                get: |t| t.description.clone(),
                set: |t, raw| t.description = raw.to_string(),
            },
        ]
    }
}
