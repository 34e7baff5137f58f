//! Sweep-line overlap detection
//!
//! Slots are partitioned by `(day, group key value)`. Each partition is sorted
//! by start time and swept once while an ordered set of open intervals, keyed
//! by end time, is maintained.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;

use crate::models::{ClashPair, Day, GroupKey, OwnerType, TimeSlot};

/// Value of the grouping key for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PartitionKey<'a> {
    Venue(&'a str),
    Owner(OwnerType, &'a str),
}

impl<'a> PartitionKey<'a> {
    fn of(slot: &'a TimeSlot, group_by: GroupKey) -> Self {
        match group_by {
            GroupKey::Venue => PartitionKey::Venue(&slot.venue),
            GroupKey::Owner => PartitionKey::Owner(slot.owner_type, &slot.owner_id),
        }
    }
}

/// Find every pair of distinct slots sharing a day and a `group_by` value whose
/// `[start, end)` intervals intersect.
///
/// Back-to-back slots (`a.end == b.start`) do not clash. The same slot value
/// appearing twice in `slots` is treated as one slot.
pub fn find_overlaps(slots: &[TimeSlot], group_by: GroupKey) -> Vec<ClashPair> {
    let mut partitions: BTreeMap<(Day, PartitionKey<'_>), Vec<&TimeSlot>> = BTreeMap::new();
    for slot in slots {
        partitions
            .entry((slot.day, PartitionKey::of(slot, group_by)))
            .or_default()
            .push(slot);
    }

    let mut pairs = Vec::new();
    for (_, mut members) in partitions {
        if members.len() < 2 {
            continue;
        }
        members.sort();
        members.dedup();
        sweep(&members, group_by, &mut pairs);
    }
    pairs
}

/// `members` must be sorted in canonical order (start time first)
fn sweep(members: &[&TimeSlot], group_by: GroupKey, out: &mut Vec<ClashPair>) {
    let mut open: BTreeSet<(NaiveTime, usize)> = BTreeSet::new();

    for (pos, current) in members.iter().enumerate() {
        while let Some(&(end, _)) = open.first() {
            if end > current.start_time {
                break;
            }
            open.pop_first();
        }

        for &(_, earlier) in &open {
            let pair = ClashPair::new(members[earlier].clone(), (*current).clone(), group_by);
            out.extend(pair);
        }

        open.insert((current.end_time, pos));
    }
}
