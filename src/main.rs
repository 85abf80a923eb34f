//! Checklist Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod policy;
mod store;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use api::ApiRoot;
use app::{App, Page};
use context::PageContext;

/// Default extension API root, relative to the site root.
const DEFAULT_API_ROOT: &str = "/api/extensions/rbchecklist.extension.Checklist/";

fn main() {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document should exist");
    let mount = document
        .get_element_by_id("rbchecklist")
        .expect("host page must provide the #rbchecklist mount point")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("mount point should be an HTML element");

    let api_root = ApiRoot::new(
        mount
            .get_attribute("data-api-root")
            .unwrap_or_else(|| DEFAULT_API_ROOT.to_string()),
    );
    let review_request_id = mount
        .get_attribute("data-review-request-id")
        .and_then(|value| value.parse().ok());
    let page = match mount.get_attribute("data-page").as_deref() {
        Some("account") => Page::Account,
        _ => Page::Review,
    };

    let context = PageContext::new(api_root, review_request_id);
    mount_to(mount, move || view! { <App context=context page=page /> }).forget();
}
