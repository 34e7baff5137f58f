//! Analytics service (snapshot generation)

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::{
    clash,
    config::AnalyticsConfig,
    error::AppResult,
    models::{
        AcademicPeriod, AnalyticsSnapshot, ClashSummary, GroupKey, OwnerType, TimeSlot, VenueUsage,
    },
    repository::TimetableSource,
};

use super::load_slots;

#[derive(Clone)]
pub struct AnalyticsService {
    source: Arc<dyn TimetableSource>,
    config: AnalyticsConfig,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn TimetableSource>, config: AnalyticsConfig) -> Self {
        Self { source, config }
    }

    /// Generate analytics for a session and semester.
    ///
    /// The period is validated before any data is requested. A period
    /// without slots yields an all-zero snapshot.
    pub async fn generate(&self, session: &str, semester: &str) -> AppResult<AnalyticsSnapshot> {
        let period = AcademicPeriod::parse(session, semester)?;

        let rows = self.source.get_period_timetable(&period).await?;
        let slots = load_slots(rows, &period)?;

        let snapshot = compute_snapshot(period, &slots, self.config.weekly_teaching_hours);
        tracing::info!(
            "Generated analytics for {}: {} slots, {} clashes",
            snapshot.period,
            snapshot.slot_count,
            snapshot.clash_summary.total
        );
        Ok(snapshot)
    }
}

#[derive(Default)]
struct VenueAccumulator<'a> {
    seconds: i64,
    courses: BTreeSet<&'a str>,
}

/// Aggregate load, venue usage and clashes over a validated slot set
pub fn compute_snapshot(
    period: AcademicPeriod,
    slots: &[TimeSlot],
    weekly_teaching_hours: f64,
) -> AnalyticsSnapshot {
    let mut lecturer_seconds: BTreeMap<&str, i64> = BTreeMap::new();
    let mut venues: BTreeMap<&str, VenueAccumulator<'_>> = BTreeMap::new();

    for slot in slots {
        if slot.owner_type == OwnerType::Lecturer {
            *lecturer_seconds.entry(slot.owner_id.as_str()).or_default() += slot.duration_seconds();
        }
        let venue = venues.entry(slot.venue.as_str()).or_default();
        venue.seconds += slot.duration_seconds();
        venue.courses.insert(slot.course_code.as_str());
    }

    let lecturer_load = lecturer_seconds
        .into_iter()
        .map(|(id, seconds)| (id.to_string(), to_hours(seconds)))
        .collect();

    let venue_utilization = venues
        .into_iter()
        .map(|(venue, acc)| {
            let occupied_hours = to_hours(acc.seconds);
            let occupancy_rate = if weekly_teaching_hours > 0.0 {
                occupied_hours / weekly_teaching_hours
            } else {
                0.0
            };
            let usage = VenueUsage {
                occupied_hours,
                distinct_courses: acc.courses.len(),
                occupancy_rate,
            };
            (venue.to_string(), usage)
        })
        .collect();

    let report = clash::detect(slots, &[GroupKey::Venue, GroupKey::Owner]);
    let clash_summary = ClashSummary {
        total: report.len(),
        venue_clashes: report.count_detected_on(GroupKey::Venue),
        owner_clashes: report.count_detected_on(GroupKey::Owner),
    };

    AnalyticsSnapshot {
        period,
        slot_count: slots.len(),
        lecturer_load,
        venue_utilization,
        clash_summary,
    }
}

fn to_hours(seconds: i64) -> f64 {
    seconds as f64 / 3600.0
}
