//! Handlers for the `/courses` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::course::{Course, CreateCourse, UpdateCourse};
use portal_db::models::enrollment::Enrollment;
use portal_db::repositories::{CourseRepo, EnrollmentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::state::AppState;

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(course_id = course.id, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Course", id))?;
    Ok(Json(course))
}

/// PUT /api/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Course", id))?;
    tracing::info!(course_id = id, "Course updated");
    Ok(Json(course))
}

/// DELETE /api/courses/{id}
///
/// Rejected with 409 while enrollments still reference the course.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let enrollments = EnrollmentRepo::count_by_course(&state.pool, id).await?;
    if enrollments > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Course {id} still has {enrollments} enrollment(s); delete them first"
        ))));
    }

    if CourseRepo::delete(&state.pool, id).await? {
        tracing::info!(course_id = id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Course", id))
    }
}

/// GET /api/courses/{id}/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    if !CourseRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Course", id));
    }
    let enrollments = EnrollmentRepo::list_by_course(&state.pool, id).await?;
    Ok(Json(enrollments))
}
