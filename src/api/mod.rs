//! Extension API Clients
//!
//! Thin clients for the host's extension REST resources, organized by
//! resource.

pub mod checklist;
mod http;
pub mod items;
mod resource;
pub mod templates;

pub use http::{ApiError, ApiRoot};
pub use items::ChecklistItemCollection;
pub use resource::RestResource;
