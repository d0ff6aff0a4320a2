//! Course entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::validation::non_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course row from the `courses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "courseId")]
    pub id: DbId,
    pub course_name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[validate(custom(function = "non_blank", message = "Course name is required"))]
    pub course_name: String,
    /// Defaults to an empty string if omitted.
    #[serde(default)]
    pub description: String,
}

/// DTO for replacing a course's mutable fields.
pub type UpdateCourse = CreateCourse;
