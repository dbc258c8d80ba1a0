use actix_web::{web, HttpResponse, Responder};
use common::requests::ErrorMessage;
use serde_json::Value;

use crate::services::admin::collection_key;
use crate::services::admin::list::unknown_resource;
use crate::services::store;

/// `POST /api/admin/{resource}`: stores a new record and echoes it back
/// with the assigned id and timestamps.
pub async fn create(resource: web::Path<String>, payload: web::Json<Value>) -> impl Responder {
    if collection_key(&resource).is_none() {
        return unknown_resource(&resource);
    }
    if !payload.is_object() {
        return HttpResponse::BadRequest().json(ErrorMessage::new("Expected a JSON object"));
    }
    let result = store::open().and_then(|conn| store::insert(&conn, &resource, &payload));
    match result {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => {
            log::error!("creating in {} failed: {}", resource.as_str(), e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new(format!("Could not save the {}", singular(&resource))))
        }
    }
}

/// `PUT /api/admin/{resource}/{id}`: replaces the payload of an existing
/// record; 404 with a message when the id is unknown.
pub async fn update(
    path: web::Path<(String, String)>,
    payload: web::Json<Value>,
) -> impl Responder {
    let (resource, id) = path.into_inner();
    if collection_key(&resource).is_none() {
        return unknown_resource(&resource);
    }
    if !payload.is_object() {
        return HttpResponse::BadRequest().json(ErrorMessage::new("Expected a JSON object"));
    }
    let result = store::open().and_then(|conn| store::update(&conn, &resource, &id, &payload));
    match result {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::NotFound().json(ErrorMessage::new(format!(
            "No {} with id {}",
            singular(&resource),
            id
        ))),
        Err(e) => {
            log::error!("updating {}/{} failed: {}", resource, id, e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new(format!("Could not save the {}", singular(&resource))))
        }
    }
}

/// Rough singular form for messages ("activities" -> "activity").
pub fn singular(resource: &str) -> String {
    match resource {
        "activities" => "activity".to_string(),
        "trip-types" => "trip type".to_string(),
        other => other.trim_end_matches('s').to_string(),
    }
}
