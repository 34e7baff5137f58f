//! Timetable clash detection
//!
//! Pure, synchronous computation over validated time slots: the sweep-line
//! overlap detector and the aggregator that turns raw pairs into a report.

pub mod aggregator;
pub mod detector;

pub use aggregator::aggregate;
pub use detector::find_overlaps;

use crate::models::{ClashReport, GroupKey, TimeSlot};

/// Detect clashes on the given keys and merge them into one report
pub fn detect(slots: &[TimeSlot], keys: &[GroupKey]) -> ClashReport {
    let pairs = keys
        .iter()
        .flat_map(|key| find_overlaps(slots, *key))
        .collect();
    aggregate(pairs)
}
