//! Data models for TTMS

pub mod analytics;
pub mod clash;
pub mod period;
pub mod timetable;

// Re-export commonly used types
pub use analytics::{AnalyticsSnapshot, ClashSummary, VenueUsage};
pub use clash::{ClashEntry, ClashPair, ClashReport, GroupKey};
pub use period::{AcademicPeriod, Semester, Session};
pub use timetable::{Day, OwnerType, RawTimetableRow, TimeSlot};
