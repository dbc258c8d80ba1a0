use common::model::lead::{Lead, LeadStatus};
use common::numeric::NumberInput;

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

const STATUS_OPTIONS: [&str; 4] = ["new", "contacted", "converted", "rejected"];

pub struct LeadSchema;

impl ResourceSchema for LeadSchema {
    type Record = Lead;

    const BASE_PATH: &'static str = "/api/admin/leads";
    const COLLECTION_KEY: &'static str = "leads";
    const SINGULAR: &'static str = "Lead";
    const PLURAL: &'static str = "Leads";

    fn default_draft() -> Lead {
        Lead::default()
    }

    fn record_id(record: &Lead) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Lead) -> Vec<&str> {
        vec![
            &record.name,
            &record.email,
            &record.phone,
            &record.destination,
            record.status.as_str(),
        ]
    }

    fn fields() -> Vec<FieldDef<Lead>> {
        vec![
            FieldDef {
                label: "Name",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |l| l.name.clone(),
                set: |l, raw| l.name = raw.to_string(),
            },
            FieldDef {
                label: "Email",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |l| l.email.clone(),
                set: |l, raw| l.email = raw.to_string(),
            },
            FieldDef {
                label: "Phone",
                kind: FieldKind::Text,
                required: false,
                in_list: false,
                get: |l| l.phone.clone(),
                set: |l, raw| l.phone = raw.to_string(),
            },
            FieldDef {
                label: "Destination",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |l| l.destination.clone(),
                set: |l, raw| l.destination = raw.to_string(),
            },
            FieldDef {
                label: "Group size",
                kind: FieldKind::Number,
                required: false,
                in_list: false,
                get: |l| l.group_size.map(|v| v.to_string()).unwrap_or_default(),
                set: |l, raw| match NumberInput::parse(raw) {
                    NumberInput::Value(v) => l.group_size = Some(v),
                    NumberInput::Empty => l.group_size = None,
                    NumberInput::Invalid(_) => {}
                },
            },
            FieldDef {
                label: "Status",
                kind: FieldKind::Select(&STATUS_OPTIONS),
                required: false,
                in_list: true,
                get: |l| l.status.as_str().to_string(),
                set: |l, raw| {
                    if let Some(status) = LeadStatus::parse(raw) {
                        l.status = status;
                    }
                },
            },
        ]
    }
}
