pub mod course;
pub mod enrollment;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                        list, create
/// /students/{id}                   get, update, delete
/// /students/{id}/enrollments       enrollments of a student
///
/// /courses                         list, create
/// /courses/{id}                    get, update, delete
/// /courses/{id}/enrollments        enrollments of a course
///
/// /enrollments                     list (?expand=true), create
/// /enrollments/{id}                get (?expand=true), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", student::router())
        .nest("/courses", course::router())
        .nest("/enrollments", enrollment::router())
}
