//! Timetable queries on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::{AcademicPeriod, RawTimetableRow},
};

const SLOT_COLUMNS: &str = r#"
    t.id, t.session, t.semester, t.day, t.start_time, t.end_time,
    t.venue, t.course_code, t.owner_type, t.owner_id
"#;

impl Repository {
    /// Slots taught by a lecturer in a period
    pub async fn timetables_for_lecturer(
        &self,
        worker_no: &str,
        period: &AcademicPeriod,
    ) -> AppResult<Vec<RawTimetableRow>> {
        let query = format!(
            r#"
            SELECT {}
            FROM timetable_slots t
            WHERE t.owner_type = 'lecturer' AND t.owner_id = $1
              AND t.session = $2 AND t.semester = $3
            ORDER BY t.day, t.start_time, t.id
            "#,
            SLOT_COLUMNS
        );

        let rows = sqlx::query_as::<_, RawTimetableRow>(&query)
            .bind(worker_no)
            .bind(period.session.as_str())
            .bind(i16::from(period.semester))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Slots of every course a student registered for in a period.
    ///
    /// Rows are reported as owned by the student (`student_group`, matric number)
    /// so that overlapping registrations group together.
    pub async fn timetables_for_student(
        &self,
        matric_no: &str,
        period: &AcademicPeriod,
    ) -> AppResult<Vec<RawTimetableRow>> {
        let rows = sqlx::query_as::<_, RawTimetableRow>(
            r#"
            SELECT DISTINCT ON (t.day, t.start_time, t.end_time, t.venue, t.course_code)
                t.id, t.session, t.semester, t.day, t.start_time, t.end_time,
                t.venue, t.course_code,
                'student_group'::VARCHAR AS owner_type,
                r.matric_no AS owner_id
            FROM timetable_slots t
            JOIN course_registrations r
              ON r.course_code = t.course_code
             AND r.session = t.session
             AND r.semester = t.semester
            WHERE r.matric_no = $1 AND t.session = $2 AND t.semester = $3
            ORDER BY t.day, t.start_time, t.end_time, t.venue, t.course_code, t.id
            "#,
        )
        .bind(matric_no)
        .bind(period.session.as_str())
        .bind(i16::from(period.semester))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All slots in a period
    pub async fn timetables_for_period(&self, period: &AcademicPeriod) -> AppResult<Vec<RawTimetableRow>> {
        let query = format!(
            r#"
            SELECT {}
            FROM timetable_slots t
            WHERE t.session = $1 AND t.semester = $2
            ORDER BY t.day, t.venue, t.start_time, t.id
            "#,
            SLOT_COLUMNS
        );

        let rows = sqlx::query_as::<_, RawTimetableRow>(&query)
            .bind(period.session.as_str())
            .bind(i16::from(period.semester))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
