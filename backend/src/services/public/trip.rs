use actix_web::{web, HttpResponse, Responder};
use common::requests::ErrorMessage;
use serde_json::json;

use crate::services::store;

/// `GET /api/trips/{id}`: one trip wrapped as `{ "trip": {...} }`.
pub async fn process(id: web::Path<String>) -> impl Responder {
    let result = store::open().and_then(|conn| store::fetch(&conn, "trips", &id));
    match result {
        Ok(Some(document)) => HttpResponse::Ok().json(json!({ "trip": document })),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorMessage::new(format!("No trip with id {}", id)))
        }
        Err(e) => {
            log::error!("fetching trip {} failed: {}", id, e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new("Could not load the trip"))
        }
    }
}
