//! Timetable models (raw storage rows, validated time slots)

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::period::{AcademicPeriod, Semester, Session};
use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

/// Day of the week a class is held on (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl FromStr for Day {
    type Err = AppError;

    /// Accepts full names and three-letter abbreviations, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            _ => Err(AppError::InvalidSlot(format!("Unrecognized weekday '{}'", s))),
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// OwnerType
// ---------------------------------------------------------------------------

/// Who a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    Lecturer,
    StudentGroup,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerType::Lecturer => "lecturer",
            OwnerType::StudentGroup => "student_group",
        }
    }
}

impl FromStr for OwnerType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lecturer" => Ok(OwnerType::Lecturer),
            "student_group" => Ok(OwnerType::StudentGroup),
            _ => Err(AppError::InvalidSlot(format!("Unknown owner type '{}'", s))),
        }
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RawTimetableRow
// ---------------------------------------------------------------------------

/// A timetable row as returned by storage, before validation
#[derive(Debug, Clone, FromRow)]
pub struct RawTimetableRow {
    pub id: i64,
    pub session: String,
    pub semester: i16,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub venue: String,
    pub course_code: String,
    pub owner_type: String,
    pub owner_id: String,
}

// ---------------------------------------------------------------------------
// TimeSlot
// ---------------------------------------------------------------------------

/// One validated class occurrence.
///
/// Built only through `TryFrom<RawTimetableRow>` (or [`TimeSlot::new`]), so
/// every slot satisfies `start_time < end_time` and carries a recognized day
/// and a well-formed academic period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct TimeSlot {
    /// Storage identity of the row
    pub id: i64,
    pub day: Day,
    /// Start time (inclusive)
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    /// End time (exclusive)
    #[schema(value_type = String, example = "11:00:00")]
    pub end_time: NaiveTime,
    /// Room or building code
    pub venue: String,
    pub period: AcademicPeriod,
    pub owner_type: OwnerType,
    /// Worker number or course-group identifier
    pub owner_id: String,
    pub course_code: String,
}

impl TimeSlot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        day: Day,
        start_time: NaiveTime,
        end_time: NaiveTime,
        venue: impl Into<String>,
        period: AcademicPeriod,
        owner_type: OwnerType,
        owner_id: impl Into<String>,
        course_code: impl Into<String>,
    ) -> AppResult<Self> {
        if start_time >= end_time {
            return Err(AppError::InvalidSlot(format!(
                "Slot {} starts at {} but ends at {}",
                id, start_time, end_time
            )));
        }
        Ok(Self {
            id,
            day,
            start_time,
            end_time,
            venue: venue.into(),
            period,
            owner_type,
            owner_id: owner_id.into(),
            course_code: course_code.into(),
        })
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    pub fn hours(&self) -> f64 {
        self.duration_seconds() as f64 / 3600.0
    }

    /// Half-open interval intersection on the same day
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    pub fn is_owned_by(&self, owner_type: OwnerType, owner_id: &str) -> bool {
        self.owner_type == owner_type && self.owner_id == owner_id
    }

    /// Order used to break ties deterministically: start, end, course, owner, id
    pub fn canonical_cmp(&self, other: &TimeSlot) -> Ordering {
        self.start_time
            .cmp(&other.start_time)
            .then_with(|| self.end_time.cmp(&other.end_time))
            .then_with(|| self.course_code.cmp(&other.course_code))
            .then_with(|| self.owner_id.cmp(&other.owner_id))
            .then_with(|| self.owner_type.cmp(&other.owner_type))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.venue.cmp(&other.venue))
            .then_with(|| self.day.cmp(&other.day))
            .then_with(|| self.period.cmp(&other.period))
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_cmp(other)
    }
}

impl TryFrom<RawTimetableRow> for TimeSlot {
    type Error = AppError;

    fn try_from(row: RawTimetableRow) -> Result<Self, Self::Error> {
        let invalid = |e: AppError| match e {
            AppError::InvalidPeriod(msg) => {
                AppError::InvalidSlot(format!("Slot {} has an invalid period: {}", row.id, msg))
            }
            other => other,
        };

        let day = row.day.parse::<Day>()?;
        let owner_type = row.owner_type.parse::<OwnerType>()?;
        let session = Session::parse(&row.session).map_err(invalid)?;
        let semester = Semester::try_from(row.semester).map_err(invalid)?;

        TimeSlot::new(
            row.id,
            day,
            row.start_time,
            row.end_time,
            row.venue,
            AcademicPeriod::new(session, semester),
            owner_type,
            row.owner_id,
            row.course_code,
        )
    }
}

/// Convert a batch of raw rows, failing on the first invalid one
pub fn slots_from_rows(rows: Vec<RawTimetableRow>) -> AppResult<Vec<TimeSlot>> {
    rows.into_iter().map(TimeSlot::try_from).collect()
}
