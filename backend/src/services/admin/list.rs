use actix_web::{web, HttpResponse, Responder};
use common::requests::ErrorMessage;
use serde_json::json;

use crate::services::admin::collection_key;
use crate::services::store;

/// `GET /api/admin/{resource}`: the whole collection, no pagination.
/// Admin collections are small and filtered client-side.
pub async fn process(resource: web::Path<String>) -> impl Responder {
    let Some(key) = collection_key(&resource) else {
        return unknown_resource(&resource);
    };
    let result = store::open().and_then(|conn| store::list(&conn, &resource));
    match result {
        Ok(documents) => HttpResponse::Ok().json(json!({ key: documents })),
        Err(e) => {
            log::error!("listing {} failed: {}", resource, e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new(format!("Could not list {}", resource)))
        }
    }
}

pub fn unknown_resource(resource: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorMessage::new(format!(
        "Unknown admin resource \"{}\"",
        resource
    )))
}
