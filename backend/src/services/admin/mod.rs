//! # Admin CRUD Service
//!
//! One set of handlers serves every admin resource. The `{resource}` path
//! segment is checked against the closed registry below; anything else is a
//! 404 with a `{ message }` body. Collections are stored under the path
//! segment as the collection name, and listed back wrapped in the
//! camelCase envelope key the frontend unwraps.

mod delete;
mod export;
mod list;
mod save;

use actix_web::web::{delete as http_delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

/// The closed set of admin resources: `(path segment, envelope key)`.
const RESOURCES: [(&str, &str); 7] = [
    ("activities", "activities"),
    ("blogs", "blogs"),
    ("collaborators", "collaborators"),
    ("leads", "leads"),
    ("transfers", "transfers"),
    ("trip-types", "tripTypes"),
    ("trips", "trips"),
];

/// Envelope key for a known resource segment, `None` for anything else.
pub fn collection_key(resource: &str) -> Option<&'static str> {
    RESOURCES
        .iter()
        .find(|(segment, _)| *segment == resource)
        .map(|(_, key)| *key)
}

/// Configures the admin scope.
///
/// # Registered Routes:
///
/// *   **`GET /leads/export.csv`** — CSV download of every lead
///     (registered before the generic routes so it wins the match).
/// *   **`GET /{resource}`** — full collection, `{ "<plural>": [...] }`.
/// *   **`POST /{resource}`** — create; body is the record sans id.
/// *   **`PUT /{resource}/{id}`** — update an existing record.
/// *   **`DELETE /{resource}/{id}`** — remove a record.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/leads/export.csv", get().to(export::process))
        .route("/{resource}", get().to(list::process))
        .route("/{resource}", post().to(save::create))
        .route("/{resource}/{id}", put().to(save::update))
        .route("/{resource}/{id}", http_delete().to(delete::process))
}
