//! Repository for the `enrollments` table.

use std::collections::HashMap;

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{CreateEnrollment, Enrollment, EnrollmentDetail, UpdateEnrollment};
use crate::repositories::{CourseRepo, StudentRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, enrollment_date, created_at, updated_at";

/// Provides CRUD operations for enrollments.
///
/// Foreign keys are enforced by the database; callers that want a friendly
/// error for an unknown student or course check existence first.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    ///
    /// If `enrollment_date` is `None` in the input, defaults to today.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, enrollment_date)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(input.enrollment_date)
            .fetch_one(pool)
            .await
    }

    /// Find an enrollment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all enrollments in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments ORDER BY id");
        sqlx::query_as::<_, Enrollment>(&query).fetch_all(pool).await
    }

    /// List enrollments for a given student.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 ORDER BY id");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List enrollments for a given course.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE course_id = $1 ORDER BY id");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Count enrollments referencing a student.
    pub async fn count_by_student(pool: &PgPool, student_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enrollments WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Count enrollments referencing a course.
    pub async fn count_by_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enrollments WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Replace the student, course and (if given) date of an enrollment.
    ///
    /// A `None` enrollment date keeps the stored date. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                student_id = $2,
                course_id = $3,
                enrollment_date = COALESCE($4, enrollment_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(input.enrollment_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enrollment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an enrollment by ID with its student and course embedded.
    pub async fn find_detailed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EnrollmentDetail>, sqlx::Error> {
        let Some(enrollment) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let mut details = Self::attach_details(pool, vec![enrollment]).await?;
        Ok(details.pop())
    }

    /// List all enrollments with their students and courses embedded.
    pub async fn list_detailed(pool: &PgPool) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let enrollments = Self::list(pool).await?;
        Self::attach_details(pool, enrollments).await
    }

    /// Load the referenced students and courses in two batched queries and
    /// pair them with their enrollments, preserving input order.
    async fn attach_details(
        pool: &PgPool,
        enrollments: Vec<Enrollment>,
    ) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let student_ids: Vec<DbId> = enrollments.iter().map(|e| e.student_id).collect();
        let course_ids: Vec<DbId> = enrollments.iter().map(|e| e.course_id).collect();

        let students: HashMap<DbId, _> = StudentRepo::find_many(pool, &student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let courses: HashMap<DbId, _> = CourseRepo::find_many(pool, &course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(enrollments
            .into_iter()
            .map(|enrollment| EnrollmentDetail {
                student: students.get(&enrollment.student_id).cloned(),
                course: courses.get(&enrollment.course_id).cloned(),
                enrollment,
            })
            .collect())
    }
}
