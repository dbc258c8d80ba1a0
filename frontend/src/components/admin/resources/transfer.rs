use common::model::transfer::Transfer;
use common::numeric::NumberInput;

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

pub struct TransferSchema;

impl ResourceSchema for TransferSchema {
    type Record = Transfer;

    const BASE_PATH: &'static str = "/api/admin/transfers";
    const COLLECTION_KEY: &'static str = "transfers";
    const SINGULAR: &'static str = "Transfer";
    const PLURAL: &'static str = "Transfers";

    fn default_draft() -> Transfer {
        Transfer::default()
    }

    fn record_id(record: &Transfer) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Transfer) -> Vec<&str> {
        vec![&record.route, &record.vehicle]
    }

    fn fields() -> Vec<FieldDef<Transfer>> {
        vec![
            FieldDef {
                label: "Route",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |t| t.route.clone(),
                set: |t, raw| t.route = raw.to_string(),
            },
            FieldDef {
                label: "Vehicle",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |t| t.vehicle.clone(),
                set: |t, raw| t.vehicle = raw.to_string(),
            },
            FieldDef {
                label: "Capacity",
                kind: FieldKind::Number,
                required: false,
                in_list: true,
                get: |t| t.capacity.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.capacity = Some(v),
                    NumberInput::Empty => t.capacity = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Price",
                kind: FieldKind::Number,
                required: false,
                in_list: true,
                get: |t| t.price.map(|v| v.to_string()).unwrap_or_default(),
                set: |t, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => t.price = Some(v),
                    NumberInput::Empty => t.price = None,
                    NumberInput::Invalid(_) => {}
                },
            },
        ]
    }
}
