//! Timetable service (owner timetables, clash queries)

use std::sync::Arc;

use crate::{
    clash,
    error::AppResult,
    models::{AcademicPeriod, ClashReport, GroupKey, OwnerType, TimeSlot},
    repository::TimetableSource,
};

use super::load_slots;

#[derive(Clone)]
pub struct TimetableService {
    source: Arc<dyn TimetableSource>,
}

impl TimetableService {
    pub fn new(source: Arc<dyn TimetableSource>) -> Self {
        Self { source }
    }

    /// Check that the timetable source is reachable
    pub async fn check_source(&self) -> AppResult<()> {
        self.source.ping().await
    }

    /// Validated slots of one owner, ordered by day then start time
    pub async fn owner_timetable(
        &self,
        owner_type: OwnerType,
        owner_id: &str,
        period: &AcademicPeriod,
    ) -> AppResult<Vec<TimeSlot>> {
        let rows = self.source.get_timetable(owner_type, owner_id, period).await?;
        let mut slots = load_slots(rows, period)?;
        slots.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.cmp(b)));
        Ok(slots)
    }

    /// Slots of one owner that overlap each other
    pub async fn clashing_timetable(
        &self,
        owner_type: OwnerType,
        owner_id: &str,
        period: &AcademicPeriod,
    ) -> AppResult<ClashReport> {
        let slots = self.owner_timetable(owner_type, owner_id, period).await?;
        let report = clash::detect(&slots, &[GroupKey::Owner]);
        tracing::debug!(
            "{} {}: {} own clashes over {} slots in {}",
            owner_type,
            owner_id,
            report.len(),
            slots.len(),
            period
        );
        Ok(report)
    }

    /// Venue clashes across the whole period that involve one of the owner's slots
    pub async fn venue_clashes(
        &self,
        owner_type: OwnerType,
        owner_id: &str,
        period: &AcademicPeriod,
    ) -> AppResult<ClashReport> {
        let rows = self.source.get_period_timetable(period).await?;
        let slots = load_slots(rows, period)?;
        let report = clash::detect(&slots, &[GroupKey::Venue]).involving_owner(owner_type, owner_id);
        tracing::debug!(
            "{} {}: {} venue clashes over {} slots in {}",
            owner_type,
            owner_id,
            report.len(),
            slots.len(),
            period
        );
        Ok(report)
    }
}
