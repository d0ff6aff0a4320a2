//! Route definitions for the `/enrollments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /      -> list       (?expand=true embeds student and course)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id  (?expand=true)
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list).post(enrollment::create))
        .route(
            "/{id}",
            get(enrollment::get_by_id)
                .put(enrollment::update)
                .delete(enrollment::delete),
        )
}
