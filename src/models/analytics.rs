//! Analytics snapshot models

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::period::AcademicPeriod;

/// Usage of a single venue over a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct VenueUsage {
    /// Total scheduled hours per week
    pub occupied_hours: f64,
    /// Number of distinct courses hosted
    pub distinct_courses: usize,
    /// occupied_hours / configured weekly teaching hours
    pub occupancy_rate: f64,
}

/// Clash totals for a period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClashSummary {
    /// Distinct clashing pairs
    pub total: usize,
    /// Pairs detected at the same venue
    pub venue_clashes: usize,
    /// Pairs detected for the same lecturer or student group
    pub owner_clashes: usize,
}

/// Statistics for one (session, semester)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalyticsSnapshot {
    pub period: AcademicPeriod,
    /// Number of slots analysed
    pub slot_count: usize,
    /// Lecturer worker number -> scheduled hours per week
    pub lecturer_load: BTreeMap<String, f64>,
    /// Venue -> usage
    pub venue_utilization: BTreeMap<String, VenueUsage>,
    pub clash_summary: ClashSummary,
}

impl AnalyticsSnapshot {
    pub fn empty(period: AcademicPeriod) -> Self {
        Self {
            period,
            slot_count: 0,
            lecturer_load: BTreeMap::new(),
            venue_utilization: BTreeMap::new(),
            clash_summary: ClashSummary::default(),
        }
    }
}
