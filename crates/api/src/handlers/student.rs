//! Handlers for the `/students` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::enrollment::Enrollment;
use portal_db::models::student::{CreateStudent, Student, UpdateStudent};
use portal_db::repositories::{EnrollmentRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::state::AppState;

/// POST /api/students
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(student_id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Student", id))?;
    Ok(Json(student))
}

/// PUT /api/students/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Student", id))?;
    tracing::info!(student_id = id, "Student updated");
    Ok(Json(student))
}

/// DELETE /api/students/{id}
///
/// Rejected with 409 while enrollments still reference the student.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let enrollments = EnrollmentRepo::count_by_student(&state.pool, id).await?;
    if enrollments > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Student {id} still has {enrollments} enrollment(s); delete them first"
        ))));
    }

    if StudentRepo::delete(&state.pool, id).await? {
        tracing::info!(student_id = id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Student", id))
    }
}

/// GET /api/students/{id}/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    if !StudentRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Student", id));
    }
    let enrollments = EnrollmentRepo::list_by_student(&state.pool, id).await?;
    Ok(Json(enrollments))
}
