use actix_web::{web, HttpResponse, Responder};
use common::model::trip::Trip;
use common::requests::{ErrorMessage, ListingQuery};
use common::search::matches_term;
use serde_json::json;

use crate::services::store;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 12;
const MAX_LIMIT: u32 = 50;

/// `GET /api/holidays?page=&limit=&search=&category=&minPrice=&maxPrice=`
pub async fn holidays(query: web::Query<ListingQuery>) -> impl Responder {
    listing("holiday", "holidays", query.into_inner())
}

/// `GET /api/hotels` with the same query parameters.
pub async fn hotels(query: web::Query<ListingQuery>) -> impl Responder {
    listing("hotel", "hotels", query.into_inner())
}

fn listing(bucket: &str, key: &str, query: ListingQuery) -> HttpResponse {
    let result = store::open().and_then(|conn| store::list(&conn, "trips"));
    let documents = match result {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("listing {} failed: {}", key, e);
            return HttpResponse::ServiceUnavailable()
                .json(ErrorMessage::new(format!("Could not list {}", key)));
        }
    };

    // Documents that no longer parse as trips are dropped, not fatal.
    let trips: Vec<Trip> = documents
        .into_iter()
        .filter_map(|doc| serde_json::from_value(doc).ok())
        .collect();

    let matched = apply_filters(trips, bucket, &query);
    let total = matched.len();
    let (page, limit) = page_and_limit(&query);
    let items = paginate(matched, page, limit);

    HttpResponse::Ok().json(json!({
        key: items,
        "total": total,
        "page": page,
        "limit": limit,
    }))
}

/// Keeps the trips of `bucket` that satisfy every provided filter.
fn apply_filters(trips: Vec<Trip>, bucket: &str, query: &ListingQuery) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|trip| trip.category.eq_ignore_ascii_case(bucket))
        .filter(|trip| match &query.search {
            Some(term) => matches_term(
                &[
                    &trip.title,
                    &trip.destination,
                    &trip.trip_type,
                    &trip.description,
                ],
                term,
            ),
            None => true,
        })
        .filter(|trip| match &query.category {
            Some(trip_type) => {
                trip_type.is_empty() || trip.trip_type.eq_ignore_ascii_case(trip_type)
            }
            None => true,
        })
        .filter(|trip| {
            let price = trip.effective_price();
            query.min_price.map_or(true, |min| price >= min)
                && query.max_price.map_or(true, |max| price <= max)
        })
        .collect()
}

fn page_and_limit(query: &ListingQuery) -> (u32, u32) {
    let page = query.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
    let limit = query
        .limit
        .filter(|l| *l >= 1)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    (page, limit)
}

fn paginate(trips: Vec<Trip>, page: u32, limit: u32) -> Vec<Trip> {
    // Widen before multiplying; `page` comes straight from the query
    // string and u32::MAX * limit overflows u32.
    let skip = (page as usize)
        .saturating_sub(1)
        .saturating_mul(limit as usize);
    trips
        .into_iter()
        .skip(skip)
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(title: &str, category: &str, trip_type: &str, sale: Option<f64>, normal: Option<f64>) -> Trip {
        Trip {
            title: title.into(),
            category: category.into(),
            trip_type: trip_type.into(),
            sale_price: sale,
            normal_price: normal,
            ..Trip::default()
        }
    }

    fn sample() -> Vec<Trip> {
        vec![
            trip("Annapurna Base Camp", "holiday", "Trekking", Some(899.0), None),
            trip("Island Hopping", "holiday", "Beach", None, Some(1200.0)),
            trip("City Grand Hotel", "hotel", "Stay", Some(80.0), None),
            trip("Old Quarter Walk", "excursion", "Culture", None, None),
        ]
    }

    #[test]
    fn bucket_filter_is_case_insensitive_and_exclusive() {
        let matched = apply_filters(sample(), "holiday", &ListingQuery::default());
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|t| t.category == "holiday"));
    }

    #[test]
    fn free_text_search_spans_title_and_type() {
        let query = ListingQuery {
            search: Some("trek".into()),
            ..ListingQuery::default()
        };
        let matched = apply_filters(sample(), "holiday", &query);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Annapurna Base Camp");
    }

    #[test]
    fn price_range_uses_effective_price() {
        let query = ListingQuery {
            max_price: Some(1000.0),
            ..ListingQuery::default()
        };
        // Island Hopping has no sale price; its normal price 1200 applies.
        let matched = apply_filters(sample(), "holiday", &query);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Annapurna Base Camp");
    }

    #[test]
    fn pagination_defaults_and_caps() {
        let query = ListingQuery::default();
        assert_eq!(page_and_limit(&query), (1, 12));

        let query = ListingQuery {
            page: Some(0),
            limit: Some(500),
            ..ListingQuery::default()
        };
        assert_eq!(page_and_limit(&query), (1, 50));
    }

    #[test]
    fn paginate_slices_the_requested_window() {
        let trips: Vec<Trip> = (0..5)
            .map(|i| trip(&format!("T{}", i), "holiday", "", None, None))
            .collect();
        let page2 = paginate(trips, 2, 2);
        assert_eq!(page2.len(), 2);
        assert_eq!(page2[0].title, "T2");
        assert_eq!(page2[1].title, "T3");
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let trips = vec![trip("Only", "holiday", "", None, None)];
        assert!(paginate(trips, 9, 12).is_empty());
    }

    #[test]
    fn maximum_page_number_is_an_empty_window() {
        let trips = vec![trip("Only", "holiday", "", None, None)];
        assert!(paginate(trips, u32::MAX, 50).is_empty());
        assert!(paginate(vec![trip("Only", "holiday", "", None, None)], 0, 50).len() == 1);
    }
}
