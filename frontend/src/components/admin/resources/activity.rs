use common::model::activity::Activity;

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

pub struct ActivitySchema;

impl ResourceSchema for ActivitySchema {
    type Record = Activity;

    const BASE_PATH: &'static str = "/api/admin/activities";
    const COLLECTION_KEY: &'static str = "activities";
    const SINGULAR: &'static str = "Activity";
    const PLURAL: &'static str = "Activities";

    fn default_draft() -> Activity {
        Activity::default()
    }

    fn record_id(record: &Activity) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Activity) -> Vec<&str> {
        vec![&record.name, &record.category, &record.description]
    }

    fn fields() -> Vec<FieldDef<Activity>> {
        vec![
            FieldDef {
                label: "Name",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |a| a.name.clone(),
                set: |a, raw| a.name = raw.to_string(),
            },
            FieldDef {
                label: "Category",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |a| a.category.clone(),
                set: |a, raw| a.category = raw.to_string(),
            },
            FieldDef {
                label: "Description",
                kind: FieldKind::LongText,
                required: false,
                in_list: false,
                get: |a| a.description.clone(),
                set: |a, raw| a.description = raw.to_string(),
            },
            FieldDef {
                label: "Image URL",
                kind: FieldKind::Text,
                required: false,
                in_list: false,
                get: |a| a.image_url.clone(),
                set: |a, raw| a.image_url = raw.to_string(),
            },
        ]
    }
}
