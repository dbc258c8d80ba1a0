//! HTTP-level tests for the admin and public services.
//!
//! Handlers resolve the database through the `VOYAGEDESK_DB` environment
//! variable, which is process-global, so every test here takes `ENV_LOCK`
//! and points the variable at its own temporary file before touching the
//! API.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Mutex;
use tempfile::TempDir;

use crate::services::{admin, public, store};

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct TestDb {
    _dir: TempDir,
}

impl TestDb {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("test.sqlite");
        std::env::set_var(store::DB_ENV_VAR, path.to_str().expect("utf-8 path"));
        TestDb { _dir: dir }
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().limit(2 * 1024 * 1024))
                .service(admin::configure_routes())
                .service(public::configure_routes()),
        )
        .await
    };
}

#[actix_web::test]
async fn admin_crud_round_trip() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    // Create: description left empty is fine, category is preserved.
    let req = test::TestRequest::post()
        .uri("/api/admin/activities")
        .set_json(json!({
            "name": "Scuba Diving",
            "category": "Water Sports",
            "description": "",
            "imageUrl": ""
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().expect("assigned id").to_string();
    assert_eq!(created["category"], "Water Sports");
    assert!(created["createdAt"].is_string());

    // List: wrapped in the plural envelope key.
    let req = test::TestRequest::get()
        .uri("/api/admin/activities")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let activities = listed["activities"].as_array().expect("envelope");
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["name"], "Scuba Diving");

    // Update by id.
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/activities/{}", id))
        .set_json(json!({ "name": "Night Dive", "category": "Water Sports" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Night Dive");
    assert_eq!(updated["id"].as_str(), Some(id.as_str()));

    // Delete, then the record stays gone on a fresh list.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/activities/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/admin/activities")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert!(listed["activities"].as_array().expect("envelope").is_empty());
}

#[actix_web::test]
async fn unknown_resource_is_rejected_with_a_message() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/admin/invoices")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().expect("message").contains("invoices"));
}

#[actix_web::test]
async fn failed_delete_reports_a_message_and_changes_nothing() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/blogs")
        .set_json(json!({ "title": "Hidden Beaches", "author": "Ada" }))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri("/api/admin/blogs/no-such-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::get().uri("/api/admin/blogs").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["blogs"].as_array().expect("envelope").len(), 1);
}

#[actix_web::test]
async fn put_to_unknown_id_is_a_404_with_message() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri("/api/admin/trips/missing")
        .set_json(json!({ "title": "Ghost Trip" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().expect("message").contains("missing"));
}

#[actix_web::test]
async fn holidays_listing_filters_and_pages() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    for (title, category, sale) in [
        ("Annapurna Base Camp", "holiday", Some(899.0)),
        ("Island Hopping", "holiday", Some(1500.0)),
        ("City Grand Hotel", "hotel", Some(80.0)),
    ] {
        let mut body = json!({ "title": title, "category": category });
        if let Some(price) = sale {
            body["salePrice"] = json!(price);
        }
        let req = test::TestRequest::post()
            .uri("/api/admin/trips")
            .set_json(body)
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/holidays?maxPrice=1000")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let holidays = listed["holidays"].as_array().expect("envelope");
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0]["title"], "Annapurna Base Camp");
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["page"], 1);

    let req = test::TestRequest::get().uri("/api/hotels").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["hotels"].as_array().expect("envelope").len(), 1);
}

#[actix_web::test]
async fn trip_detail_wraps_the_document() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/trips")
        .set_json(json!({ "title": "Island Hopping", "category": "holiday" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/trips/{}", id))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(detail["trip"]["title"], "Island Hopping");

    let req = test::TestRequest::get().uri("/api/trips/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn lead_export_keeps_blank_group_size_blank() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _db = TestDb::new();
    let app = test_app!();

    // One lead with a group size, one without.
    for body in [
        json!({ "name": "Ada", "email": "ada@example.com", "groupSize": 4.0 }),
        json!({ "name": "Bo", "email": "bo@example.com" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/admin/leads")
            .set_json(body)
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/admin/leads/export.csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let csv_text = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8 csv");

    let mut lines = csv_text.lines();
    let header = lines.next().expect("header");
    assert!(header.contains("groupSize"));
    let ada = lines.next().expect("first row");
    assert!(ada.contains(",4,"));
    let bo = lines.next().expect("second row");
    // Blank, not zero: two adjacent separators around the empty cell.
    assert!(bo.contains(",,"));
    assert!(!bo.contains(",0,"));
}
