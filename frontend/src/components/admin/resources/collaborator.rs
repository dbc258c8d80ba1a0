use common::model::collaborator::{Collaborator, CollaboratorStatus};

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

const STATUS_OPTIONS: [&str; 3] = ["pending", "active", "inactive"];

pub struct CollaboratorSchema;

impl ResourceSchema for CollaboratorSchema {
    type Record = Collaborator;

    const BASE_PATH: &'static str = "/api/admin/collaborators";
    const COLLECTION_KEY: &'static str = "collaborators";
    const SINGULAR: &'static str = "Collaborator";
    const PLURAL: &'static str = "Collaborators";

    fn default_draft() -> Collaborator {
        Collaborator::default()
    }

    fn record_id(record: &Collaborator) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Collaborator) -> Vec<&str> {
        vec![&record.name, &record.email, &record.role]
    }

    fn fields() -> Vec<FieldDef<Collaborator>> {
        vec![
            FieldDef {
                label: "Name",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |c| c.name.clone(),
                set: |c, raw| c.name = raw.to_string(),
            },
            FieldDef {
                label: "Email",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |c| c.email.clone(),
                set: |c, raw| c.email = raw.to_string(),
            },
            FieldDef {
                label: "Role",
                kind: FieldKind::Text,
                required: false,
                in_list: true,
                get: |c| c.role.clone(),
                set: |c, raw| c.role = raw.to_string(),
            },
            FieldDef {
                label: "Status",
                kind: FieldKind::Select(&STATUS_OPTIONS),
                required: false,
                in_list: true,
                get: |c| c.status.as_str().to_string(),
                set: |c, raw| {
                    if let Some(status) = CollaboratorStatus::parse(raw) {
                        c.status = status;
                    }
                },
            },
        ]
    }
}
