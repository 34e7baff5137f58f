//! Clash models (overlap pairs, aggregated reports)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::timetable::{OwnerType, TimeSlot};

/// Dimension a clash was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// Same venue at the same time
    Venue,
    /// Same lecturer or student group at the same time
    Owner,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Venue => write!(f, "venue"),
            GroupKey::Owner => write!(f, "owner"),
        }
    }
}

/// Two distinct slots overlapping on the same day under a shared group key.
/// `slot_a` always precedes `slot_b` in canonical slot order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClashPair {
    pub slot_a: TimeSlot,
    pub slot_b: TimeSlot,
    pub group_key: GroupKey,
}

impl ClashPair {
    /// Build a pair in canonical order. Returns `None` for a slot paired with itself.
    pub fn new(first: TimeSlot, second: TimeSlot, group_key: GroupKey) -> Option<Self> {
        match first.canonical_cmp(&second) {
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Less => Some(Self { slot_a: first, slot_b: second, group_key }),
            std::cmp::Ordering::Greater => Some(Self { slot_a: second, slot_b: first, group_key }),
        }
    }
}

/// One reported clash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClashEntry {
    pub slot_a: TimeSlot,
    pub slot_b: TimeSlot,
    /// Every key the clash was detected on (sorted, never empty)
    pub detected_on: Vec<GroupKey>,
}

impl ClashEntry {
    pub fn involves_owner(&self, owner_type: OwnerType, owner_id: &str) -> bool {
        self.slot_a.is_owned_by(owner_type, owner_id) || self.slot_b.is_owned_by(owner_type, owner_id)
    }
}

/// Deduplicated clashes sorted by day, venue, then start time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClashReport {
    pub entries: Vec<ClashEntry>,
}

impl ClashReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClashEntry> {
        self.entries.iter()
    }

    /// Number of clashes detected on `key` (a clash found on both keys counts for each)
    pub fn count_detected_on(&self, key: GroupKey) -> usize {
        self.entries.iter().filter(|e| e.detected_on.contains(&key)).count()
    }

    /// Keep only clashes where one side belongs to the given owner
    pub fn involving_owner(self, owner_type: OwnerType, owner_id: &str) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|e| e.involves_owner(owner_type, owner_id))
                .collect(),
        }
    }
}

impl IntoIterator for ClashReport {
    type Item = ClashEntry;
    type IntoIter = std::vec::IntoIter<ClashEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
