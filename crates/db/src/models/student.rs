//! Student entity model and DTOs.

use portal_core::types::{Date, DbId, Timestamp};
use portal_core::validation::{blank_as_none, non_blank};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A student row from the `students` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "studentId")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub date_of_birth: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Student {
    /// `"First Last"`, as shown in enrollment listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a new student.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(custom(function = "non_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "non_blank", message = "Last name is required"))]
    pub last_name: String,
    /// Blank strings are treated as absent.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub date_of_birth: Date,
}

/// DTO for replacing a student's mutable fields.
pub type UpdateStudent = CreateStudent;
