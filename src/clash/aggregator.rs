//! Clash aggregation into a deduplicated, sorted report

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ClashEntry, ClashPair, ClashReport, GroupKey, TimeSlot};

/// Merge overlap pairs found under any number of grouping keys.
///
/// A pair of slots reported by several keys appears once, tagged with every
/// key that found it. Entries are ordered by day, venue and start time of the
/// earlier slot, with the slots' canonical order as the final tie-break.
pub fn aggregate(pairs: Vec<ClashPair>) -> ClashReport {
    let mut merged: BTreeMap<(TimeSlot, TimeSlot), BTreeSet<GroupKey>> = BTreeMap::new();
    for pair in pairs {
        let ClashPair { slot_a, slot_b, group_key } = pair;
        let (a, b) = if slot_a <= slot_b { (slot_a, slot_b) } else { (slot_b, slot_a) };
        merged.entry((a, b)).or_default().insert(group_key);
    }

    let mut entries: Vec<ClashEntry> = merged
        .into_iter()
        .map(|((slot_a, slot_b), keys)| ClashEntry {
            slot_a,
            slot_b,
            detected_on: keys.into_iter().collect(),
        })
        .collect();

    entries.sort_by(|x, y| {
        x.slot_a
            .day
            .cmp(&y.slot_a.day)
            .then_with(|| x.slot_a.venue.cmp(&y.slot_a.venue))
            .then_with(|| x.slot_a.start_time.cmp(&y.slot_a.start_time))
            .then_with(|| x.slot_a.cmp(&y.slot_a))
            .then_with(|| x.slot_b.cmp(&y.slot_b))
    });

    ClashReport { entries }
}
