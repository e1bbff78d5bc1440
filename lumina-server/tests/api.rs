//! Router-level integration tests over the embedded seed data
//!
//! The seed snapshot holds two November 2025 reservations:
//! - unit 70 (Bungalow 2 kamar Standard Twin), 11-26 to 11-28, Rp 2,900,000
//! - unit 85 (Bungalow 3 kamar Deluxe Twin), 11-28 to 12-01, Rp 55,000,000

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use lumina_server::{Config, InMemoryStore, SeedData, ServerState, api};

const DAILY_TARGET: f64 = 17_092_000.0;

fn test_app() -> Router {
    let mut config = Config::from_env();
    config.daily_target_revenue = DAILY_TARGET;
    config.narrative_api_url = None;

    let store = Arc::new(InMemoryStore::new(SeedData::load_embedded().unwrap()));
    api::router(ServerState::with_store(config, store))
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let body = get_json(&test_app(), "/health").await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_reference_data() {
    let app = test_app();
    let units = get_json(&app, "/api/units").await;
    assert_eq!(units.as_array().unwrap().len(), 94);

    let pics = get_json(&app, "/api/pics").await;
    assert_eq!(pics.as_array().unwrap().len(), 5);

    let types = get_json(&app, "/api/room-types").await;
    let types = types.as_array().unwrap();
    // Distinct and ascending
    assert!(types.len() < 94);
    let names: Vec<&str> = types.iter().map(|t| t.as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_dashboard_november_window() {
    let body = get_json(
        &test_app(),
        "/api/dashboard?startDate=2025-11-01&endDate=2025-11-30",
    )
    .await;

    // 2 nights of the bungalow stay + 3 November nights of the BRI stay
    assert_eq!(body["daily"].as_array().unwrap().len(), 5);
    assert_eq!(body["summary"]["totalBookings"], 5);

    // Revenue conservation: both stays fall fully inside November nights
    let total = body["summary"]["totalRevenue"].as_f64().unwrap();
    assert!((total - 57_900_000.0).abs() < 1.0);

    // Scenario: 30-day window target and variance
    let target = body["summary"]["totalTargetRevenue"].as_f64().unwrap();
    assert!((target - 30.0 * DAILY_TARGET).abs() < 1e-6);
    let variance = body["summary"]["revenueVariance"].as_f64().unwrap();
    assert!((variance - (total - target)).abs() < 1e-6);

    assert_eq!(
        body["summary"]["topPerformingRoomType"],
        "Bungalow 3 kamar Deluxe Twin"
    );

    // The per-night split of the unit-70 stay
    let daily = body["daily"].as_array().unwrap();
    let bungalow_nights: Vec<&Value> = daily
        .iter()
        .filter(|d| d["roomType"] == "Bungalow 2 kamar Standard Twin")
        .collect();
    assert_eq!(bungalow_nights.len(), 2);
    for night in &bungalow_nights {
        assert_eq!(night["revenue"].as_f64().unwrap(), 1_450_000.0);
        assert_eq!(night["occupancyRate"].as_f64().unwrap(), 100.0);
    }
    let dates: Vec<&str> = bungalow_nights
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert!(dates.contains(&"2025-11-26") && dates.contains(&"2025-11-27"));
    assert!(!dates.contains(&"2025-11-28"));
}

#[tokio::test]
async fn test_dashboard_trend_completeness() {
    let body = get_json(
        &test_app(),
        "/api/dashboard?startDate=2025-11-01&endDate=2025-11-30",
    )
    .await;

    let trend = body["salesTrend"].as_array().unwrap();
    assert_eq!(trend.len(), 30);
    let by_date = |d: &str| {
        trend
            .iter()
            .find(|p| p["date"] == d)
            .unwrap()["amount"]
            .as_f64()
            .unwrap()
    };
    assert_eq!(by_date("2025-11-26"), 2_900_000.0);
    assert_eq!(by_date("2025-11-28"), 55_000_000.0);
    assert_eq!(by_date("2025-11-02"), 0.0);

    // Occupancy trend shares the day axis
    assert_eq!(body["occupancyTrend"].as_array().unwrap().len(), 30);

    // Top groups ranked by reservation amount
    let groups = body["topGroups"].as_array().unwrap();
    assert_eq!(groups[0]["name"], "BRI");
    assert_eq!(groups[0]["value"].as_f64().unwrap(), 55_000_000.0);
}

#[tokio::test]
async fn test_dashboard_inverted_window_degrades() {
    let body = get_json(
        &test_app(),
        "/api/dashboard?startDate=2025-11-30&endDate=2025-11-01",
    )
    .await;
    // Trend filler returns empty for inverted windows; the summary clamps to
    // a 1-day window instead
    assert_eq!(body["salesTrend"].as_array().unwrap().len(), 0);
    assert!(body["daily"].as_array().unwrap().is_empty());
    let target = body["summary"]["totalTargetRevenue"].as_f64().unwrap();
    assert!((target - DAILY_TARGET).abs() < 1e-6);
}

#[tokio::test]
async fn test_dashboard_csv_export() {
    let response = test_app()
        .oneshot(
            Request::get("/api/dashboard/export.csv?startDate=2025-11-01&endDate=2025-11-30")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("lumina_sales_2025-11-01_to_2025-11-30.csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Room Type,Revenue ($),Occupancy Rate (%)"
    );
    assert_eq!(lines.count(), 5);
}

#[tokio::test]
async fn test_report_document_payload() {
    let body = get_json(
        &test_app(),
        "/api/dashboard/document?startDate=2025-11-01&endDate=2025-11-30",
    )
    .await;
    assert_eq!(body["period"], "2025-11-01 to 2025-11-30");
    assert_eq!(body["cards"].as_array().unwrap().len(), 5);
    // November is far below target; the status card reads Shortfall
    assert_eq!(body["cards"][3]["sub"], "Shortfall");
    assert_eq!(body["tableRows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_narrative_degrades_to_fallback() {
    let response = test_app()
        .oneshot(
            Request::post("/api/dashboard/narrative")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"startDate": "2025-11-01", "endDate": "2025-11-30"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(
        body["narrative"]
            .as_str()
            .unwrap()
            .contains("AI analyst")
    );
}

#[tokio::test]
async fn test_sales_report_filter_and_sort() {
    let app = test_app();
    let body = get_json(&app, "/api/sales-report").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    // Unfiltered seed data: span estimated from the stay dates
    // (11-26 check-in to 12-01 check-out = 5 days, no +1)
    assert_eq!(body["kpi"]["daysDiff"], 5);

    let body = get_json(
        &app,
        "/api/sales-report?roomTypes=Bungalow%203%20kamar%20Deluxe%20Twin",
    )
    .await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["group_name"], "BRI");
    assert_eq!(items[0]["pic_name"], "Raka");

    let body = get_json(&app, "/api/sales-report?sortBy=amount&sortDir=desc").await;
    let amounts: Vec<f64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["amount"].as_f64().unwrap())
        .collect();
    assert!(amounts.windows(2).all(|w| w[0] >= w[1]));

    // Explicit filter window uses the inclusive formula
    let body = get_json(
        &app,
        "/api/sales-report?startDate=2025-11-01&endDate=2025-11-30",
    )
    .await;
    assert_eq!(body["kpi"]["daysDiff"], 30);
    let target = body["kpi"]["totalTarget"].as_f64().unwrap();
    assert!((target - 30.0 * DAILY_TARGET).abs() < 1e-6);
}

#[tokio::test]
async fn test_booking_entry_round_trip() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/sales-report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "group_name": "Family Gathering",
                        "pic_id": 1,
                        "unit_ids": [1, 2],
                        "check_in": "2025-12-05",
                        "check_out": "2025-12-07",
                        "pax": 5,
                        "amount": 1_000_000.0,
                        "dp_amount": 400_000.0,
                        "status": "DP"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    let rows = created.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["sales_id"], rows[1]["sales_id"]);
    assert_eq!(rows[0]["amount"].as_f64().unwrap(), 500_000.0);
    assert_eq!(rows[0]["dp_amount"].as_f64().unwrap(), 200_000.0);
    assert_eq!(rows[0]["pax"], 3);
    assert_eq!(rows[0]["pic_name"], "Budi Suhaeli");
    assert_eq!(rows[0]["duration_nights"], 2);

    // The new rows are visible to subsequent reads
    let body = get_json(&app, "/api/sales-report?search=Family").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_booking_entry_validation_rejects_before_mutation() {
    let app = test_app();

    for payload in [
        // DP above amount
        json!({
            "group_name": "G", "unit_ids": [1], "check_in": "2025-12-05",
            "check_out": "2025-12-07", "amount": 100.0, "dp_amount": 200.0, "status": "DP"
        }),
        // Inverted dates
        json!({
            "group_name": "G", "unit_ids": [1], "check_in": "2025-12-07",
            "check_out": "2025-12-05", "amount": 100.0, "status": "DP"
        }),
        // No units
        json!({
            "group_name": "G", "unit_ids": [], "check_in": "2025-12-05",
            "check_out": "2025-12-07", "amount": 100.0, "status": "DP"
        }),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/sales-report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Store unchanged after the rejections
    let body = get_json(&app, "/api/sales-report").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}
