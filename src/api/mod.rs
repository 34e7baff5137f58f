//! API handlers for TTMS REST endpoints

pub mod analytics;
pub mod health;
pub mod openapi;
pub mod timetable;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Lecturer timetable
        .route("/lecturer/timetable", get(timetable::lecturer_timetable))
        .route("/lecturer/clashing-timetable", get(timetable::lecturer_clashing_timetable))
        .route("/lecturer/venue-clash", get(timetable::lecturer_venue_clash))
        // Student timetable
        .route("/student/timetable", get(timetable::student_timetable))
        .route("/student/clashing-timetable", get(timetable::student_clashing_timetable))
        // Analytics
        .route("/analytics/generate", get(analytics::generate))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Present, non-empty query parameter or a validation error with `message`
pub(crate) fn required<'a>(value: &'a Option<String>, message: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Check that session and semester are both given, without checking their format
pub(crate) fn require_session_semester<'a>(
    session: &'a Option<String>,
    semester: &'a Option<String>,
) -> AppResult<(&'a str, &'a str)> {
    let session = required(session, "Academic session is required.")?;
    let semester = required(semester, "Semester is required.")?;
    Ok((session, semester))
}

/// Worker numbers are positive integers written in ASCII digits.
/// The value is returned as given, leading zeros included, since stored ids are text.
pub(crate) fn parse_worker_no(value: &Option<String>) -> AppResult<String> {
    let raw = required(value, "Worker number is required.")?;
    let numeric = raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<u64>() {
        Ok(n) if numeric && n > 0 => Ok(raw.to_string()),
        _ => Err(AppError::Validation("Invalid worker number format.".to_string())),
    }
}
