//! Analytics endpoint tests

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use crate::support::{get, row, router, router_with, UnavailableSource};

const GENERATE: &str = "/api/v1/analytics/generate?session=2023/2024&semester=1";

#[tokio::test]
async fn test_empty_period_returns_zero_snapshot() {
    let (status, body) = get(router(Vec::new()), GENERATE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slot_count"], 0);
    assert_eq!(body["lecturer_load"], json!({}));
    assert_eq!(body["venue_utilization"], json!({}));
    assert_eq!(
        body["clash_summary"],
        json!({ "total": 0, "venue_clashes": 0, "owner_clashes": 0 })
    );
}

#[tokio::test]
async fn test_generate_snapshot() {
    let app = router(vec![
        row(1, "Monday", "09:00", "11:00", "V1", "lecturer", "L1", "C1"),
        row(2, "Monday", "10:00", "12:00", "V1", "lecturer", "L2", "C2"),
        row(3, "Thursday", "13:00", "16:00", "V2", "lecturer", "L1", "C3"),
        row(4, "Thursday", "16:00", "17:00", "V2", "lecturer", "L1", "C3"),
    ]);

    let (status, body) = get(app, GENERATE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"], json!({ "session": "2023/2024", "semester": 1 }));
    assert_eq!(body["slot_count"], 4);
    assert_eq!(body["lecturer_load"]["L1"], 6.0);
    assert_eq!(body["lecturer_load"]["L2"], 2.0);
    assert_eq!(body["venue_utilization"]["V1"]["occupied_hours"], 4.0);
    assert_eq!(body["venue_utilization"]["V1"]["distinct_courses"], 2);
    assert_eq!(body["venue_utilization"]["V2"]["distinct_courses"], 1);
    assert_eq!(body["venue_utilization"]["V2"]["occupancy_rate"], 4.0 / 45.0);
    assert_eq!(
        body["clash_summary"],
        json!({ "total": 1, "venue_clashes": 1, "owner_clashes": 0 })
    );
}

#[tokio::test]
async fn test_generate_validation() {
    let (status, body) = get(router(Vec::new()), "/api/v1/analytics/generate?semester=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Academic session is required.");

    let (status, body) = get(router(Vec::new()), "/api/v1/analytics/generate?session=2023/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Semester is required.");

    let (status, body) = get(
        router(Vec::new()),
        "/api/v1/analytics/generate?session=2023-2024&semester=1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadPeriod");
}

#[tokio::test]
async fn test_invalid_period_does_not_touch_storage() {
    // The unavailable source would turn any fetch into a 500
    let (status, _) = get(
        router_with(Arc::new(UnavailableSource)),
        "/api/v1/analytics/generate?session=2023/2024&semester=9",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(router_with(Arc::new(UnavailableSource)), GENERATE).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
