//! Application Root
//!
//! Builds the shared context and store, then renders the surface the
//! host mount point asked for.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ChecklistPanel, TemplatePage};
use crate::context::PageContext;
use crate::store::ChecklistState;

/// Which extension surface the host page embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The checklist panel on a review request page.
    Review,
    /// The template manager on the account page.
    Account,
}

#[component]
pub fn App(context: PageContext, page: Page) -> impl IntoView {
    provide_context(context);
    provide_context(Store::new(ChecklistState::default()));

    match page {
        Page::Review => view! { <ChecklistPanel /> }.into_any(),
        Page::Account => view! { <TemplatePage /> }.into_any(),
    }
}
