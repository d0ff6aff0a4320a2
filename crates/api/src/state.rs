use portal_db::DbPool;

/// State handed to every handler through `State<AppState>`.
///
/// Clones share the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
