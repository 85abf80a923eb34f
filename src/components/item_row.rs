//! Checklist Item Row Component
//!
//! One entry on the checklist: checkbox, description, edit and delete
//! actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ChecklistItemCollection;
use crate::context::use_page_context;
use crate::models::ChecklistItem;
use crate::policy::{WritePolicy, CHECKBOX_TOGGLE, DESCRIPTION_EDIT, ITEM_DELETE};
use crate::store::{store_remove_item, store_update_item, use_checklist_store};

/// A single item row.
///
/// The row has two states. Display shows the description with edit and
/// delete actions; Editing swaps the description for a text field
/// pre-filled with the current text. Enter or the accept action commits,
/// Escape or the cancel action reverts. A confirmed model change
/// re-renders the row from the store, which abandons any open edit.
///
/// Each field renders according to its write policy: the checkbox runs
/// ahead of the server, the description and the row itself wait for
/// confirmation.
#[component]
pub fn ChecklistItemRow(
    item: ChecklistItem,
    collection: ChecklistItemCollection,
) -> impl IntoView {
    let ctx = use_page_context();
    let store = use_checklist_store();

    let (editing, set_editing) = signal(false);
    // Unconfirmed values, rendered only where the policy is optimistic.
    let (pending_checked, set_pending_checked) = signal(item.checked);
    let (pending_description, set_pending_description) = signal::<Option<String>>(None);

    let edit_input: NodeRef<html::Input> = NodeRef::new();

    let item_id = item.id;
    let description = item.description.clone();

    // Focus and select the text field when the row enters edit mode.
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let shown_description = {
        let description = description.clone();
        move || match DESCRIPTION_EDIT {
            WritePolicy::Optimistic => {
                pending_description.get().unwrap_or_else(|| description.clone())
            }
            WritePolicy::AfterConfirm => description.clone(),
        }
    };

    let on_toggle = {
        let item = item.clone();
        let api_root = ctx.api_root.clone();
        move |ev: web_sys::MouseEvent| {
            let next = !pending_checked.get_untracked();
            match CHECKBOX_TOGGLE {
                WritePolicy::Optimistic => set_pending_checked.set(next),
                // Hold the box until the server answers.
                WritePolicy::AfterConfirm => ev.prevent_default(),
            }

            let item = item.clone();
            let api_root = api_root.clone();
            spawn_local(async move {
                match collection.set_checked(&api_root, &item, next).await {
                    Ok(confirmed) => {
                        set_pending_checked.set(confirmed.checked);
                        store_update_item(&store, confirmed);
                    }
                    Err(err) => {
                        if CHECKBOX_TOGGLE == WritePolicy::Optimistic {
                            set_pending_checked.set(!next);
                        }
                        web_sys::console::warn_1(
                            &format!("checklist: toggling item {} failed: {}", item.id, err)
                                .into(),
                        );
                    }
                }
            });
        }
    };

    let commit_edit = {
        let item = item.clone();
        let api_root = ctx.api_root.clone();
        move || {
            let Some(input) = edit_input.get_untracked() else {
                return;
            };
            let description = input.value().trim().to_string();
            if description.is_empty() {
                // Nothing to commit; stay in edit mode.
                return;
            }

            set_editing.set(false);
            if DESCRIPTION_EDIT == WritePolicy::Optimistic {
                set_pending_description.set(Some(description.clone()));
            }

            let item = item.clone();
            let api_root = api_root.clone();
            spawn_local(async move {
                match collection
                    .update_description(&api_root, &item, &description)
                    .await
                {
                    Ok(confirmed) => store_update_item(&store, confirmed),
                    Err(err) => {
                        if DESCRIPTION_EDIT == WritePolicy::Optimistic {
                            set_pending_description.set(None);
                        }
                        web_sys::console::warn_1(
                            &format!("checklist: editing item {} failed: {}", item.id, err)
                                .into(),
                        );
                    }
                }
            });
        }
    };

    let on_edit_keydown = {
        let commit_edit = commit_edit.clone();
        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                commit_edit();
            }
            "Escape" => {
                ev.prevent_default();
                set_editing.set(false);
            }
            _ => {}
        }
    };

    let on_delete = {
        let item = item.clone();
        let api_root = ctx.api_root.clone();
        move |_| {
            if ITEM_DELETE == WritePolicy::Optimistic {
                // The row vanishes now; a failure leaves it gone until
                // the next full fetch.
                store_remove_item(&store, item_id);
            }

            let item = item.clone();
            let api_root = api_root.clone();
            spawn_local(async move {
                match collection.remove(&api_root, &item).await {
                    Ok(()) => {
                        if ITEM_DELETE == WritePolicy::AfterConfirm {
                            store_remove_item(&store, item_id);
                        }
                    }
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: deleting item {} failed: {}", item.id, err).into(),
                    ),
                }
            });
        }
    };

    view! {
        <li class=move || {
            let mut class = String::from("checklist-item");
            if pending_checked.get() {
                class.push_str(" checked");
            }
            if editing.get() {
                class.push_str(" editing");
            }
            class
        }>
            <div class="checklist-checkbox-container">
                <input
                    type="checkbox"
                    name="checklist-checkbox"
                    prop:checked=move || pending_checked.get()
                    on:click=on_toggle
                />
            </div>
            {move || if editing.get() {
                let commit = commit_edit.clone();
                view! {
                    <div class="checklist-description-container">
                        <input
                            type="text"
                            class="checklist-item-edit-field"
                            node_ref=edit_input
                            value=description.clone()
                            on:keydown=on_edit_keydown.clone()
                        />
                        <span class="checklist-item-actions">
                            <button
                                class="checklist-item-edit-accept"
                                on:click=move |_| commit()
                            >
                                "✓"
                            </button>
                            <button
                                class="checklist-item-edit-cancel"
                                on:click=move |_| set_editing.set(false)
                            >
                                "✗"
                            </button>
                        </span>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="checklist-description-container">
                        <span
                            class="checklist-item-description"
                            on:click=move |_| set_editing.set(true)
                        >
                            {shown_description.clone()}
                        </span>
                        <span class="checklist-item-actions">
                            <button
                                class="checklist-item-edit"
                                on:click=move |_| set_editing.set(true)
                            >
                                "✎"
                            </button>
                            <button
                                class="checklist-item-delete"
                                on:click=on_delete.clone()
                            >
                                "×"
                            </button>
                        </span>
                    </div>
                }.into_any()
            }}
        </li>
    }
}
