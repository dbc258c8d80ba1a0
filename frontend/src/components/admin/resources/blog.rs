use common::model::blog::{Blog, BlogStatus};

use super::super::schema::{FieldDef, FieldKind, ResourceSchema};

const STATUS_OPTIONS: [&str; 2] = ["draft", "published"];

pub struct BlogSchema;

impl ResourceSchema for BlogSchema {
    type Record = Blog;

    const BASE_PATH: &'static str = "/api/admin/blogs";
    const COLLECTION_KEY: &'static str = "blogs";
    const SINGULAR: &'static str = "Blog";
    const PLURAL: &'static str = "Blogs";

    fn default_draft() -> Blog {
        Blog::default()
    }

    fn record_id(record: &Blog) -> Option<&str> {
        record.id.as_deref()
    }

    fn search_fields(record: &Blog) -> Vec<&str> {
        vec![&record.title, &record.author, record.status.as_str()]
    }

    fn fields() -> Vec<FieldDef<Blog>> {
        vec![
            FieldDef {
                label: "Title",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |b| b.title.clone(),
                set: |b, raw| b.title = raw.to_string(),
            },
            FieldDef {
                label: "Author",
                kind: FieldKind::Text,
                required: true,
                in_list: true,
                get: |b| b.author.clone(),
                set: |b, raw| b.author = raw.to_string(),
            },
            FieldDef {
                label: "Content",
                kind: FieldKind::Markdown,
                required: false,
                in_list: false,
                get: |b| b.content.clone(),
                set: |b, raw| b.content = raw.to_string(),
            },
            FieldDef {
                label: "Status",
                kind: FieldKind::Select(&STATUS_OPTIONS),
                required: false,
                in_list: true,
                get: |b| b.status.as_str().to_string(),
                set: |b, raw| {
                    if let Some(status) = BlogStatus::parse(raw) {
                        b.status = status;
                    }
                },
            },
        ]
    }
}
