//! Public read-only endpoints consumed by the marketing site.
//!
//! Unlike the admin lists, these are filtered and paged server-side:
//! `page`/`limit` plus free-text, category and price-range filters over the
//! trips collection. Prices are normalized through
//! `Trip::effective_price`, the single place that resolves the unevenly
//! populated price fields.

mod brochure;
mod listings;
mod trip;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

/// Registered routes:
/// * `GET /holidays` — paged holiday trips.
/// * `GET /hotels` — paged hotel listings.
/// * `GET /trips/{id}` — one trip, `{ "trip": {...} }`.
/// * `GET /trips/{id}/brochure` — generated PDF brochure.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/holidays", get().to(listings::holidays))
        .route("/hotels", get().to(listings::hotels))
        .route("/trips/{id}", get().to(trip::process))
        .route("/trips/{id}/brochure", get().to(brochure::process))
}
