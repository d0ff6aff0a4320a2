use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The row is still referenced and cannot be removed.
    #[error("Conflict: {0}")]
    Conflict(String),
}
