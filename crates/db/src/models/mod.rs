//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO; PUT replaces every mutable field, so it has the same
//!   shape as the create DTO

pub mod course;
pub mod enrollment;
pub mod student;
