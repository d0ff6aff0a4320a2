//! Enrollment entity model and DTOs.
//!
//! An enrollment joins one student to one course. Read endpoints can embed
//! the referenced rows via [`EnrollmentDetail`]; writes only ever carry ids.

use portal_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::course::Course;
use crate::models::student::Student;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "enrollmentId")]
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrollment_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An enrollment with its student and course embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub student: Option<Student>,
    pub course: Option<Course>,
}

/// DTO for creating a new enrollment.
///
/// Embedded `student` / `course` objects in the request body are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollment {
    #[validate(range(min = 1, message = "Student is required"))]
    pub student_id: DbId,
    #[validate(range(min = 1, message = "Course is required"))]
    pub course_id: DbId,
    /// Defaults to the current date on insert; left unchanged on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<Date>,
}

/// DTO for replacing an enrollment's mutable fields.
pub type UpdateEnrollment = CreateEnrollment;
