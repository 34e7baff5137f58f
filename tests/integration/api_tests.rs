//! Timetable and clash endpoint tests

use std::sync::Arc;

use axum::http::StatusCode;

use crate::support::{get, row, router, router_with, UnavailableSource};

fn seeded_router() -> axum::Router {
    router(vec![
        // Lecturer 1001 is double-booked on Monday
        row(1, "Monday", "09:00", "11:00", "V1", "lecturer", "1001", "CSC101"),
        row(2, "Monday", "10:00", "12:00", "V2", "lecturer", "1001", "CSC102"),
        // Another lecturer shares V1 with 1001
        row(3, "Monday", "10:30", "11:30", "V1", "lecturer", "2002", "MTH201"),
        // Back-to-back with slot 1 in V1: not a clash
        row(4, "Monday", "11:30", "12:30", "V1", "lecturer", "3003", "PHY101"),
        row(5, "Tuesday", "08:00", "10:00", "V3", "lecturer", "1001", "CSC103"),
        // Student 190401 registered for overlapping courses
        row(6, "Wednesday", "09:00", "11:00", "V4", "student_group", "190401", "CSC101"),
        row(7, "Wednesday", "10:00", "11:00", "V5", "student_group", "190401", "MTH201"),
    ])
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(seeded_router(), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_storage_failure() {
    let (status, _) = get(seeded_router(), "/api/v1/ready").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(router_with(Arc::new(UnavailableSource)), "/api/v1/ready").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DbFailure");
}

#[tokio::test]
async fn test_lecturer_parameter_validation() {
    let cases = [
        ("semester=1&worker_no=1001", "Academic session is required."),
        ("session=2023/2024&worker_no=1001", "Semester is required."),
        ("session=2023/2024&semester=1", "Worker number is required."),
        ("session=2023/2024&semester=1&worker_no=abcde", "Invalid worker number format."),
        (
            "session=2023-2024&semester=1&worker_no=1001",
            "Invalid session format. Expected format: YYYY/YYYY.",
        ),
        (
            "session=2023/2024&semester=4&worker_no=1001",
            "Invalid semester format. Expected format: 1, 2, or 3.",
        ),
    ];

    for endpoint in ["timetable", "clashing-timetable", "venue-clash"] {
        for (query, message) in cases {
            let uri = format!("/api/v1/lecturer/{}?{}", endpoint, query);
            let (status, body) = get(seeded_router(), &uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["message"], message, "{}", uri);
        }
    }
}

#[tokio::test]
async fn test_lecturer_timetable() {
    let (status, body) = get(
        seeded_router(),
        "/api/v1/lecturer/timetable?session=2023/2024&semester=1&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let slots = body.as_array().expect("array body");
    let ids: Vec<i64> = slots.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 5]);
    assert_eq!(slots[0]["day"], "Monday");
    assert_eq!(slots[0]["start_time"], "09:00:00");
    assert_eq!(slots[0]["owner_type"], "lecturer");
    assert_eq!(slots[0]["period"]["session"], "2023/2024");
}

#[tokio::test]
async fn test_worker_number_matched_as_stored() {
    let app = router(vec![row(1, "Friday", "09:00", "10:00", "V1", "lecturer", "0042", "CSC101")]);
    let (status, body) = get(
        app.clone(),
        "/api/v1/lecturer/timetable?session=2023/2024&semester=1&worker_no=0042",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["owner_id"], "0042");

    let (status, body) = get(
        app,
        "/api/v1/lecturer/timetable?session=2023/2024&semester=1&worker_no=42",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_period_must_use_ascii_digits() {
    let cases = [
        // Fullwidth "２０２３/２０２４"
        (
            "session=%EF%BC%92%EF%BC%90%EF%BC%92%EF%BC%93/%EF%BC%92%EF%BC%90%EF%BC%92%EF%BC%94&semester=1",
            "Invalid session format. Expected format: YYYY/YYYY.",
        ),
        ("session=2023/2024&semester=%2B1", "Invalid semester format. Expected format: 1, 2, or 3."),
        ("session=2023/2024&semester=%201", "Invalid semester format. Expected format: 1, 2, or 3."),
    ];
    for (query, message) in cases {
        let uri = format!("/api/v1/analytics/generate?{}", query);
        let (status, body) = get(router(Vec::new()), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["message"], message, "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_lecturer_has_empty_timetable() {
    let (status, body) = get(
        seeded_router(),
        "/api/v1/lecturer/timetable?session=2023/2024&semester=2&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_lecturer_clashing_timetable() {
    let (status, body) = get(
        seeded_router(),
        "/api/v1/lecturer/clashing-timetable?session=2023/2024&semester=1&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let clashes = body.as_array().expect("array body");
    assert_eq!(clashes.len(), 1);
    assert_eq!(clashes[0]["slot_a"]["id"], 1);
    assert_eq!(clashes[0]["slot_b"]["id"], 2);
    assert_eq!(clashes[0]["detected_on"], serde_json::json!(["owner"]));
}

#[tokio::test]
async fn test_lecturer_venue_clash() {
    let (status, body) = get(
        seeded_router(),
        "/api/v1/lecturer/venue-clash?session=2023/2024&semester=1&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let clashes = body.as_array().expect("array body");
    assert_eq!(clashes.len(), 1);
    assert_eq!(clashes[0]["slot_a"]["venue"], "V1");
    assert_eq!(clashes[0]["slot_a"]["owner_id"], "1001");
    assert_eq!(clashes[0]["slot_b"]["owner_id"], "2002");
    assert_eq!(clashes[0]["detected_on"], serde_json::json!(["venue"]));
}

#[tokio::test]
async fn test_student_clashing_timetable() {
    let (status, body) = get(
        seeded_router(),
        "/api/v1/student/clashing-timetable?session=2023/2024&semester=1&matric_no=190401",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let clashes = body.as_array().expect("array body");
    assert_eq!(clashes.len(), 1);
    assert_eq!(clashes[0]["slot_a"]["course_code"], "CSC101");
    assert_eq!(clashes[0]["slot_b"]["course_code"], "MTH201");

    let (status, body) = get(
        seeded_router(),
        "/api/v1/student/timetable?session=2023/2024&semester=1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Matric number is required.");
}

#[tokio::test]
async fn test_corrupt_row_is_an_integrity_error() {
    let app = router(vec![row(1, "Funday", "09:00", "10:00", "V1", "lecturer", "1001", "CSC101")]);
    let (status, body) = get(
        app,
        "/api/v1/lecturer/timetable?session=2023/2024&semester=1&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DataIntegrity");
    assert_eq!(body["message"], "Timetable data integrity error");
}

#[tokio::test]
async fn test_storage_failure_is_a_server_error() {
    let (status, body) = get(
        router_with(Arc::new(UnavailableSource)),
        "/api/v1/lecturer/venue-clash?session=2023/2024&semester=1&worker_no=1001",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Database error");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get(seeded_router(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/analytics/generate"].is_object());
    assert!(body["paths"]["/lecturer/clashing-timetable"].is_object());
}
