//! Document store over SQLite.
//!
//! Records of every resource live in one `documents` table as JSON bodies
//! keyed by `(collection, id)`. The store owns the identifier and both
//! timestamps: ids are UUIDv4 assigned on insert and immutable afterwards,
//! `created_at` is written once, `updated_at` on every write. Whatever the
//! client sends for those keys is discarded before persisting.
//!
//! Handlers open a fresh connection per request: the workload is a handful
//! of admin users, not a connection-pool problem.

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

/// Environment variable naming the database file; the only configuration
/// contract of the backend.
pub const DB_ENV_VAR: &str = "VOYAGEDESK_DB";
const DEFAULT_DB_PATH: &str = "voyagedesk.sqlite";

/// Timestamps in ISO-8601 UTC, produced by SQLite itself.
const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%SZ','now')";

/// Opens (and initializes) the configured database.
pub fn open() -> Result<Connection, String> {
    let path = std::env::var(DB_ENV_VAR).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    open_at(&path)
}

/// Opens a database at an explicit path. Used by `open` and by tests.
pub fn open_at(path: &str) -> Result<Connection, String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    init(&conn)?;
    Ok(conn)
}

fn init(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        )",
    )
    .map_err(|e| e.to_string())
}

/// Lists every document of a collection, in insertion order. Each entry is
/// the stored body with `id`, `createdAt` and `updatedAt` spliced in.
pub fn list(conn: &Connection, collection: &str) -> Result<Vec<Value>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, body, created_at, updated_at FROM documents
             WHERE collection = ?1 ORDER BY rowid",
        )
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![collection], row_to_document)
        .map_err(|e| e.to_string())?;
    let mut documents = Vec::new();
    for row in rows {
        documents.push(row.map_err(|e| e.to_string())?);
    }
    Ok(documents)
}

/// Fetches a single document, `None` when absent.
pub fn fetch(conn: &Connection, collection: &str, id: &str) -> Result<Option<Value>, String> {
    conn.query_row(
        "SELECT id, body, created_at, updated_at FROM documents
         WHERE collection = ?1 AND id = ?2",
        params![collection, id],
        row_to_document,
    )
    .optional()
    .map_err(|e| e.to_string())
}

/// Inserts a new document: assigns a fresh id and both timestamps, then
/// returns the complete stored record.
pub fn insert(conn: &Connection, collection: &str, payload: &Value) -> Result<Value, String> {
    let body = payload_body(payload)?;
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        &format!(
            "INSERT INTO documents (collection, id, body, created_at, updated_at)
             VALUES (?1, ?2, ?3, {NOW}, {NOW})"
        ),
        params![collection, id, body],
    )
    .map_err(|e| e.to_string())?;
    fetch(conn, collection, &id)?.ok_or_else(|| "inserted document not found".to_string())
}

/// Replaces the body of an existing document, bumping `updated_at` and
/// preserving `created_at`. Returns `None` when the id does not exist.
pub fn update(
    conn: &Connection,
    collection: &str,
    id: &str,
    payload: &Value,
) -> Result<Option<Value>, String> {
    let body = payload_body(payload)?;
    let changed = conn
        .execute(
            &format!(
                "UPDATE documents SET body = ?3, updated_at = {NOW}
                 WHERE collection = ?1 AND id = ?2"
            ),
            params![collection, id, body],
        )
        .map_err(|e| e.to_string())?;
    if changed == 0 {
        return Ok(None);
    }
    fetch(conn, collection, id)
}

/// Deletes a document; `false` when there was nothing to delete.
pub fn delete(conn: &Connection, collection: &str, id: &str) -> Result<bool, String> {
    let changed = conn
        .execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
            params![collection, id],
        )
        .map_err(|e| e.to_string())?;
    Ok(changed > 0)
}

/// Serializes an incoming payload for storage. Store-owned keys are
/// stripped so a client can never overwrite the id or the timestamps.
fn payload_body(payload: &Value) -> Result<String, String> {
    let mut body = payload
        .as_object()
        .cloned()
        .ok_or_else(|| "expected a JSON object".to_string())?;
    body.remove("id");
    body.remove("createdAt");
    body.remove("updatedAt");
    serde_json::to_string(&body).map_err(|e| e.to_string())
}

fn row_to_document(row: &rusqlite::Row<'_>) -> rusqlite::Result<Value> {
    let id: String = row.get(0)?;
    let body: String = row.get(1)?;
    let created_at: String = row.get(2)?;
    let updated_at: String = row.get(3)?;
    let mut value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    if let Some(map) = value.as_object_mut() {
        map.insert("id".to_string(), Value::String(id));
        map.insert("createdAt".to_string(), Value::String(created_at));
        map.insert("updatedAt".to_string(), Value::String(updated_at));
    }
    Ok(value)
}
