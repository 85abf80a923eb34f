//! Checklist Panel Component
//!
//! The checklist chrome on a review request page: header with collapse
//! toggle, the item list, and the "Add a new item" field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ChecklistItemCollection};
use crate::components::ChecklistItemRow;
use crate::context::use_page_context;
use crate::store::{store_add_item, use_checklist_store, ChecklistStateStoreFields};

/// The main checklist view.
///
/// On mount it resolves the checklist for the current review request
/// (get-or-create), binds the item collection to the resolved id, and
/// loads the existing items. The body renders only once the checklist
/// has resolved, so no item operation can run against an unbound
/// collection.
#[component]
pub fn ChecklistPanel() -> impl IntoView {
    let ctx = use_page_context();
    let store = use_checklist_store();

    let collection = StoredValue::new(ChecklistItemCollection::new());
    let (collapsed, set_collapsed) = signal(false);
    let (new_description, set_new_description) = signal(String::new());

    // Resolve the checklist, then load its items.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let api_root = ctx.api_root.clone();
            let review_request_id = ctx
                .review_request_id
                .expect("review request id must be provided on the review page");
            spawn_local(async move {
                let checklist =
                    match api::checklist::get_or_create(&api_root, review_request_id).await {
                        Ok(checklist) => checklist,
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("checklist: could not resolve checklist: {}", err)
                                    .into(),
                            );
                            return;
                        }
                    };

                collection.update_value(|collection| collection.bind(checklist.id));
                store.checklist_id().set(Some(checklist.id));

                match collection.get_value().fetch(&api_root).await {
                    Ok(items) => {
                        for item in items {
                            store_add_item(&store, item);
                        }
                    }
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: fetching items failed: {}", err).into(),
                    ),
                }
            });
        });
    }

    let on_add_keydown = {
        let api_root = ctx.api_root.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            ev.prevent_default();

            let description = new_description.get_untracked().trim().to_string();
            if description.is_empty() {
                // Rejected client-side; no request goes out.
                return;
            }
            set_new_description.set(String::new());

            let api_root = api_root.clone();
            spawn_local(async move {
                match collection.get_value().create(&api_root, &description).await {
                    // Only a confirmed item enters the collection.
                    Ok(item) => store_add_item(&store, item),
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: creating item failed: {}", err).into(),
                    ),
                }
            });
        }
    };

    view! {
        <div class="checklist">
            <div class="checklist-header">
                <span class="checklist-title">"✔ Checklist"</span>
                <button
                    class="checklist-toggle-size"
                    on:click=move |_| set_collapsed.update(|collapsed| *collapsed = !*collapsed)
                >
                    {move || if collapsed.get() { "▸" } else { "▾" }}
                </button>
            </div>
            <Show when=move || store.checklist_id().get().is_some()>
                <div class=move || {
                    if collapsed.get() {
                        "checklist-body hidden"
                    } else {
                        "checklist-body"
                    }
                }>
                    <ul class="checklist-items">
                        <For
                            each=move || store.items().get()
                            key=|item| (item.id, item.description.clone(), item.checked)
                            children=move |item| view! {
                                <ChecklistItemRow item=item collection=collection.get_value() />
                            }
                        />
                    </ul>
                    <div class="checklist-field">
                        <input
                            type="text"
                            name="checklist-add-item"
                            placeholder="Add a new item"
                            prop:value=move || new_description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_new_description.set(input.value());
                            }
                            on:keydown=on_add_keydown.clone()
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
