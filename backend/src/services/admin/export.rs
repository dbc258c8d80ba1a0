use actix_web::{HttpResponse, Responder};
use common::model::lead::Lead;
use common::requests::ErrorMessage;

use crate::services::store;

/// `GET /api/admin/leads/export.csv`: the whole leads collection as a CSV
/// download, one row per lead, blank cells for absent optional fields.
pub async fn process() -> impl Responder {
    match export_leads() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"leads.csv\""))
            .body(bytes),
        Err(e) => {
            log::error!("lead export failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ErrorMessage::new("Could not export leads"))
        }
    }
}

fn export_leads() -> Result<Vec<u8>, String> {
    let conn = store::open()?;
    let documents = store::list(&conn, "leads")?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "name",
            "email",
            "phone",
            "destination",
            "groupSize",
            "status",
            "createdAt",
        ])
        .map_err(|e| e.to_string())?;

    for document in documents {
        // Malformed documents are skipped rather than failing the export.
        let Ok(lead) = serde_json::from_value::<Lead>(document) else {
            continue;
        };
        writer
            .write_record([
                lead.id.as_deref().unwrap_or(""),
                &lead.name,
                &lead.email,
                &lead.phone,
                &lead.destination,
                &lead
                    .group_size
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                lead.status.as_str(),
                lead.created_at.as_deref().unwrap_or(""),
            ])
            .map_err(|e| e.to_string())?;
    }

    writer.into_inner().map_err(|e| e.to_string())
}
