//! Page Context
//!
//! Configuration the host page hands to the app, provided to components
//! via the Leptos Context API instead of a global namespace.

use leptos::prelude::*;

use crate::api::ApiRoot;

/// Per-page configuration.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    /// Extension API root.
    pub api_root: ApiRoot,
    /// The review request this page is about. Absent on the account
    /// page, which only manages templates.
    pub review_request_id: Option<u32>,
}

impl PageContext {
    pub fn new(api_root: ApiRoot, review_request_id: Option<u32>) -> Self {
        Self {
            api_root,
            review_request_id,
        }
    }
}

/// Get the page context from context
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
