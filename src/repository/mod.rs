//! Repository layer for database operations

pub mod timetables;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{AcademicPeriod, OwnerType, RawTimetableRow},
};

/// Data-fetch contract the timetable engine depends on.
///
/// Failures are returned unchanged to the caller; implementations own any retry policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimetableSource: Send + Sync {
    /// Raw rows of one lecturer (by worker number) or student (by matric number)
    async fn get_timetable(
        &self,
        owner_type: OwnerType,
        owner_id: &str,
        period: &AcademicPeriod,
    ) -> AppResult<Vec<RawTimetableRow>>;

    /// Every raw row scheduled in the period
    async fn get_period_timetable(&self, period: &AcademicPeriod) -> AppResult<Vec<RawTimetableRow>>;

    /// Connectivity probe used by the readiness endpoint
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimetableSource for Repository {
    async fn get_timetable(
        &self,
        owner_type: OwnerType,
        owner_id: &str,
        period: &AcademicPeriod,
    ) -> AppResult<Vec<RawTimetableRow>> {
        match owner_type {
            OwnerType::Lecturer => self.timetables_for_lecturer(owner_id, period).await,
            OwnerType::StudentGroup => self.timetables_for_student(owner_id, period).await,
        }
    }

    async fn get_period_timetable(&self, period: &AcademicPeriod) -> AppResult<Vec<RawTimetableRow>> {
        self.timetables_for_period(period).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
