//! Business logic services

pub mod analytics;
pub mod timetable;

use std::sync::Arc;

use crate::{
    config::AnalyticsConfig,
    error::{AppError, AppResult},
    models::{timetable::slots_from_rows, AcademicPeriod, RawTimetableRow, TimeSlot},
    repository::TimetableSource,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub timetable: timetable::TimetableService,
    pub analytics: analytics::AnalyticsService,
}

impl Services {
    /// Create all services over the given timetable source
    pub fn new(source: Arc<dyn TimetableSource>, analytics_config: AnalyticsConfig) -> Self {
        Self {
            timetable: timetable::TimetableService::new(source.clone()),
            analytics: analytics::AnalyticsService::new(source, analytics_config),
        }
    }
}

/// Validate raw rows and check they all belong to `period`
pub(crate) fn load_slots(rows: Vec<RawTimetableRow>, period: &AcademicPeriod) -> AppResult<Vec<TimeSlot>> {
    let slots = slots_from_rows(rows)?;
    if let Some(stray) = slots.iter().find(|s| &s.period != period) {
        return Err(AppError::InvalidSlot(format!(
            "Slot {} belongs to {} but was returned for {}",
            stray.id, stray.period, period
        )));
    }
    Ok(slots)
}
