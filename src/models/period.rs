//! Academic period models (session, semester)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const INVALID_SESSION_MESSAGE: &str = "Invalid session format. Expected format: YYYY/YYYY.";
pub const INVALID_SEMESTER_MESSAGE: &str = "Invalid semester format. Expected format: 1, 2, or 3.";

static SESSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}/[0-9]{4}$").expect("valid session regex"));

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Academic session, formatted `YYYY/YYYY` (e.g. "2023/2024")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "2023/2024")]
pub struct Session(String);

impl Session {
    pub fn parse(value: &str) -> AppResult<Self> {
        if SESSION_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::InvalidPeriod(INVALID_SESSION_MESSAGE.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Session {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Session> for String {
    fn from(s: Session) -> Self {
        s.0
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Semester
// ---------------------------------------------------------------------------

/// Semester within an academic session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Semester {
    First = 1,
    Second = 2,
    Third = 3,
}

impl Semester {
    /// Parse a semester from its textual form ("1", "2" or "3")
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "1" => Ok(Semester::First),
            "2" => Ok(Semester::Second),
            "3" => Ok(Semester::Third),
            _ => Err(AppError::InvalidPeriod(INVALID_SEMESTER_MESSAGE.to_string())),
        }
    }
}

impl TryFrom<i16> for Semester {
    type Error = AppError;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Semester::First),
            2 => Ok(Semester::Second),
            3 => Ok(Semester::Third),
            _ => Err(AppError::InvalidPeriod(INVALID_SEMESTER_MESSAGE.to_string())),
        }
    }
}

impl From<Semester> for i16 {
    fn from(s: Semester) -> Self {
        s as i16
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i16)
    }
}

// ---------------------------------------------------------------------------
// AcademicPeriod
// ---------------------------------------------------------------------------

/// A (session, semester) pair scoping all timetable data
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct AcademicPeriod {
    pub session: Session,
    /// Semester number (1, 2 or 3)
    #[schema(value_type = i16, example = 1)]
    pub semester: Semester,
}

impl AcademicPeriod {
    pub fn new(session: Session, semester: Semester) -> Self {
        Self { session, semester }
    }

    /// Validate raw session/semester strings, session first
    pub fn parse(session: &str, semester: &str) -> AppResult<Self> {
        let session = Session::parse(session)?;
        let semester = Semester::parse(semester)?;
        Ok(Self { session, semester })
    }
}

impl std::fmt::Display for AcademicPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} semester {}", self.session, self.semester)
    }
}
