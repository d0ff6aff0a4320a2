//! Shared types, error taxonomy and field validation for the student portal.
//!
//! This crate has no database or HTTP dependencies so it can be used by the
//! repository layer, the API server and the client alike.

pub mod error;
pub mod types;
pub mod validation;
