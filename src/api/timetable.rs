//! Lecturer and student timetable endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{AcademicPeriod, ClashEntry, OwnerType, TimeSlot},
    AppState,
};

use super::{parse_worker_no, require_session_semester, required};

/// Query parameters for lecturer timetable endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LecturerTimetableQuery {
    /// Academic session (YYYY/YYYY)
    pub session: Option<String>,
    /// Semester (1, 2 or 3)
    pub semester: Option<String>,
    /// Lecturer worker number
    pub worker_no: Option<String>,
}

impl LecturerTimetableQuery {
    fn validate(&self) -> AppResult<(String, AcademicPeriod)> {
        let (session, semester) = require_session_semester(&self.session, &self.semester)?;
        let worker_no = parse_worker_no(&self.worker_no)?;
        let period = AcademicPeriod::parse(session, semester)?;
        Ok((worker_no, period))
    }
}

/// Query parameters for student timetable endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentTimetableQuery {
    /// Academic session (YYYY/YYYY)
    pub session: Option<String>,
    /// Semester (1, 2 or 3)
    pub semester: Option<String>,
    /// Student matric number
    pub matric_no: Option<String>,
}

impl StudentTimetableQuery {
    fn validate(&self) -> AppResult<(String, AcademicPeriod)> {
        let (session, semester) = require_session_semester(&self.session, &self.semester)?;
        let matric_no = required(&self.matric_no, "Matric number is required.")?;
        let period = AcademicPeriod::parse(session, semester)?;
        Ok((matric_no.to_string(), period))
    }
}

// ---- Lecturer ----

/// Get a lecturer's timetable
#[utoipa::path(
    get,
    path = "/lecturer/timetable",
    tag = "lecturer",
    params(LecturerTimetableQuery),
    responses(
        (status = 200, description = "Lecturer timetable", body = Vec<TimeSlot>),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn lecturer_timetable(
    State(state): State<AppState>,
    Query(query): Query<LecturerTimetableQuery>,
) -> AppResult<Json<Vec<TimeSlot>>> {
    let (worker_no, period) = query.validate()?;
    let slots = state
        .services
        .timetable
        .owner_timetable(OwnerType::Lecturer, &worker_no, &period)
        .await?;
    Ok(Json(slots))
}

/// Get the slots of a lecturer's timetable that clash with each other
#[utoipa::path(
    get,
    path = "/lecturer/clashing-timetable",
    tag = "lecturer",
    params(LecturerTimetableQuery),
    responses(
        (status = 200, description = "Clashing slots", body = Vec<ClashEntry>),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn lecturer_clashing_timetable(
    State(state): State<AppState>,
    Query(query): Query<LecturerTimetableQuery>,
) -> AppResult<Json<Vec<ClashEntry>>> {
    let (worker_no, period) = query.validate()?;
    let report = state
        .services
        .timetable
        .clashing_timetable(OwnerType::Lecturer, &worker_no, &period)
        .await?;
    Ok(Json(report.entries))
}

/// Get venue clashes involving a lecturer's slots
#[utoipa::path(
    get,
    path = "/lecturer/venue-clash",
    tag = "lecturer",
    params(LecturerTimetableQuery),
    responses(
        (status = 200, description = "Venue clashes", body = Vec<ClashEntry>),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn lecturer_venue_clash(
    State(state): State<AppState>,
    Query(query): Query<LecturerTimetableQuery>,
) -> AppResult<Json<Vec<ClashEntry>>> {
    let (worker_no, period) = query.validate()?;
    let report = state
        .services
        .timetable
        .venue_clashes(OwnerType::Lecturer, &worker_no, &period)
        .await?;
    Ok(Json(report.entries))
}

// ---- Student ----

/// Get a student's timetable
#[utoipa::path(
    get,
    path = "/student/timetable",
    tag = "student",
    params(StudentTimetableQuery),
    responses(
        (status = 200, description = "Student timetable", body = Vec<TimeSlot>),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn student_timetable(
    State(state): State<AppState>,
    Query(query): Query<StudentTimetableQuery>,
) -> AppResult<Json<Vec<TimeSlot>>> {
    let (matric_no, period) = query.validate()?;
    let slots = state
        .services
        .timetable
        .owner_timetable(OwnerType::StudentGroup, &matric_no, &period)
        .await?;
    Ok(Json(slots))
}

/// Get the courses in a student's timetable that clash with each other
#[utoipa::path(
    get,
    path = "/student/clashing-timetable",
    tag = "student",
    params(StudentTimetableQuery),
    responses(
        (status = 200, description = "Clashing slots", body = Vec<ClashEntry>),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn student_clashing_timetable(
    State(state): State<AppState>,
    Query(query): Query<StudentTimetableQuery>,
) -> AppResult<Json<Vec<ClashEntry>>> {
    let (matric_no, period) = query.validate()?;
    let report = state
        .services
        .timetable
        .clashing_timetable(OwnerType::StudentGroup, &matric_no, &period)
        .await?;
    Ok(Json(report.entries))
}
