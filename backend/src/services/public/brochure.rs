use actix_web::{web, HttpResponse, Responder};
use common::model::trip::Trip;
use common::requests::ErrorMessage;
use genpdf::elements::{Break, Paragraph};
use genpdf::style::{Style, StyledString};
use genpdf::{Document, Element};
use std::error::Error;

use crate::services::store;

/// `GET /api/trips/{id}/brochure`: renders the trip as a one-page PDF and
/// serves it inline.
pub async fn process(id: web::Path<String>) -> impl Responder {
    match generate_brochure(&id) {
        Ok(Some(bytes)) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(("Content-Disposition", "inline; filename=\"brochure.pdf\""))
            .body(bytes),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorMessage::new(format!("No trip with id {}", id)))
        }
        Err(e) => {
            log::error!("brochure for trip {} failed: {}", id, e);
            HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new("Could not generate the brochure"))
        }
    }
}

fn generate_brochure(id: &str) -> Result<Option<Vec<u8>>, Box<dyn Error>> {
    let conn = store::open()?;
    let Some(document) = store::fetch(&conn, "trips", id)? else {
        return Ok(None);
    };
    let trip: Trip = serde_json::from_value(document)?;

    let mut doc = configure_document(&trip.title)?;
    push_trip(&mut doc, &trip);

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    Ok(Some(bytes))
}

/// Loads the font family shipped next to the binary; falls back from Arial
/// to LiberationSans like the rest of our PDF tooling.
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error>> {
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files("./fonts", "LiberationSans", None).map_err(Into::into)
}

fn configure_document(title: &str) -> Result<Document, Box<dyn Error>> {
    let font_family = load_font()?;
    let mut doc = Document::new(font_family);
    doc.set_title(title);
    doc.set_font_size(10);
    doc.set_line_spacing(1.2);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(15);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

fn push_trip(doc: &mut Document, trip: &Trip) {
    doc.push(Paragraph::new(trip.title.clone()).styled(Style::new().bold().with_font_size(18)));

    let mut subtitle = Vec::new();
    if !trip.destination.is_empty() {
        subtitle.push(trip.destination.clone());
    }
    if !trip.trip_type.is_empty() {
        subtitle.push(trip.trip_type.clone());
    }
    if let Some(days) = trip.days {
        subtitle.push(format!("{} days", days));
    }
    if !subtitle.is_empty() {
        doc.push(Paragraph::new(subtitle.join(" · ")).styled(Style::new().italic()));
    }
    doc.push(Break::new(1));

    let price = trip.effective_price();
    if price > 0.0 {
        let mut line = Paragraph::new("");
        line.push(StyledString::new("From ", Style::new()));
        line.push(StyledString::new(
            format!("${:.0}", price),
            Style::new().bold().with_font_size(14),
        ));
        line.push(StyledString::new(" per person", Style::new()));
        doc.push(line);
        doc.push(Break::new(1));
    }

    if !trip.highlights.is_empty() {
        doc.push(Paragraph::new("Highlights").styled(Style::new().bold()));
        for highlight in &trip.highlights {
            doc.push(Paragraph::new(format!("• {}", highlight)));
        }
        doc.push(Break::new(1));
    }

    for line in trip.description.lines() {
        if line.is_empty() {
            doc.push(Break::new(1));
        } else {
            doc.push(Paragraph::new(line.to_string()));
        }
    }
}
