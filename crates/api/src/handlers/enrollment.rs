//! Handlers for the `/enrollments` resource.
//!
//! Student and course references are checked before every write so an
//! unknown id is reported as a field-level validation error rather than a
//! raw foreign-key violation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_core::types::DbId;
use portal_db::models::enrollment::{CreateEnrollment, Enrollment, UpdateEnrollment};
use portal_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult, FieldErrors};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::ExpandParams;
use crate::state::AppState;

/// POST /api/enrollments
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    ensure_references_exist(&state.pool, &input).await?;
    let enrollment = EnrollmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        enrollment_id = enrollment.id,
        student_id = enrollment.student_id,
        course_id = enrollment.course_id,
        "Enrollment created"
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/enrollments[?expand=true]
///
/// With `expand=true` each enrollment embeds its `student` and `course`.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ExpandParams>,
) -> AppResult<Response> {
    if params.expand {
        let details = EnrollmentRepo::list_detailed(&state.pool).await?;
        Ok(Json(details).into_response())
    } else {
        let enrollments = EnrollmentRepo::list(&state.pool).await?;
        Ok(Json(enrollments).into_response())
    }
}

/// GET /api/enrollments/{id}[?expand=true]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    QueryParams(params): QueryParams<ExpandParams>,
) -> AppResult<Response> {
    let not_found = || AppError::not_found("Enrollment", id);
    if params.expand {
        let detail = EnrollmentRepo::find_detailed(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(detail).into_response())
    } else {
        let enrollment = EnrollmentRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(not_found)?;
        Ok(Json(enrollment).into_response())
    }
}

/// PUT /api/enrollments/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateEnrollment>,
) -> AppResult<Json<Enrollment>> {
    if EnrollmentRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Enrollment", id));
    }
    ensure_references_exist(&state.pool, &input).await?;

    let enrollment = EnrollmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Enrollment", id))?;
    tracing::info!(enrollment_id = id, "Enrollment updated");
    Ok(Json(enrollment))
}

/// DELETE /api/enrollments/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if EnrollmentRepo::delete(&state.pool, id).await? {
        tracing::info!(enrollment_id = id, "Enrollment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Enrollment", id))
    }
}

/// Reject the write unless both the student and the course exist, naming
/// every unresolved reference.
async fn ensure_references_exist(pool: &PgPool, input: &CreateEnrollment) -> AppResult<()> {
    let mut fields = FieldErrors::new();
    if !StudentRepo::exists(pool, input.student_id).await? {
        fields.insert(
            "studentId".to_string(),
            vec![format!("Student {} does not exist", input.student_id)],
        );
    }
    if !CourseRepo::exists(pool, input.course_id).await? {
        fields.insert(
            "courseId".to_string(),
            vec![format!("Course {} does not exist", input.course_id)],
        );
    }

    if fields.is_empty() {
        return Ok(());
    }
    let message = fields
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::InvalidInput { message, fields })
}
