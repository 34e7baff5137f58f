//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, health, timetable};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TTMS API",
        version = "1.0.0",
        description = "University Timetable Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Lecturer
        timetable::lecturer_timetable,
        timetable::lecturer_clashing_timetable,
        timetable::lecturer_venue_clash,
        // Student
        timetable::student_timetable,
        timetable::student_clashing_timetable,
        // Analytics
        analytics::generate,
    ),
    components(
        schemas(
            // Timetable
            crate::models::timetable::TimeSlot,
            crate::models::timetable::Day,
            crate::models::timetable::OwnerType,
            crate::models::period::AcademicPeriod,
            crate::models::period::Session,
            // Clashes
            crate::models::clash::ClashEntry,
            crate::models::clash::GroupKey,
            // Analytics
            crate::models::analytics::AnalyticsSnapshot,
            crate::models::analytics::VenueUsage,
            crate::models::analytics::ClashSummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "lecturer", description = "Lecturer timetables and clashes"),
        (name = "student", description = "Student timetables and clashes"),
        (name = "analytics", description = "Session and semester analytics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
