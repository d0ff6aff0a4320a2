//! Typed client for the student portal API.
//!
//! [`api::PortalApi`] wraps the REST endpoints. [`resource_view::ResourceView`]
//! keeps a fetched list per resource together with its search / sort / page
//! state, re-reads the list after every successful write, and derives the
//! visible page with the pure functions in [`view`].

pub mod api;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod notification;
pub mod resource;
pub mod resource_view;
pub mod view;

pub use api::PortalApi;
pub use error::ClientError;
pub use resource::{Courses, Enrollments, Resource, Students};
pub use resource_view::ResourceView;
