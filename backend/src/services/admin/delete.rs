use actix_web::{web, HttpResponse, Responder};
use common::requests::ErrorMessage;

use crate::services::admin::collection_key;
use crate::services::admin::list::unknown_resource;
use crate::services::admin::save::singular;
use crate::services::store;

/// `DELETE /api/admin/{resource}/{id}`. Deletion is final; there is no
/// soft-delete or archive.
pub async fn process(path: web::Path<(String, String)>) -> impl Responder {
    let (resource, id) = path.into_inner();
    if collection_key(&resource).is_none() {
        return unknown_resource(&resource);
    }
    let result = store::open().and_then(|conn| store::delete(&conn, &resource, &id));
    match result {
        Ok(true) => HttpResponse::Ok().json(ErrorMessage::new(format!(
            "{} deleted",
            singular(&resource)
        ))),
        Ok(false) => HttpResponse::NotFound().json(ErrorMessage::new(format!(
            "No {} with id {}",
            singular(&resource),
            id
        ))),
        Err(e) => {
            log::error!("deleting {}/{} failed: {}", resource, id, e);
            HttpResponse::ServiceUnavailable().json(ErrorMessage::new(format!(
                "Could not delete the {}",
                singular(&resource)
            )))
        }
    }
}
