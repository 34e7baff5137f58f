//! Analytics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::AnalyticsSnapshot, AppState};

use super::require_session_semester;

/// Query parameters for analytics generation
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    /// Academic session (YYYY/YYYY)
    pub session: Option<String>,
    /// Semester (1, 2 or 3)
    pub semester: Option<String>,
}

/// Generate analytics for an academic session and semester
#[utoipa::path(
    get,
    path = "/analytics/generate",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics snapshot", body = AnalyticsSnapshot),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsSnapshot>> {
    let (session, semester) = require_session_semester(&query.session, &query.semester)?;
    let snapshot = state.services.analytics.generate(session, semester).await?;
    Ok(Json(snapshot))
}
