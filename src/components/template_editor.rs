//! Template Editor Component
//!
//! Form for creating or editing a checklist template: a title plus a
//! growing list of item fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_page_context;
use crate::models::ChecklistTemplate;

/// Edit form for one template.
///
/// A trailing blank item field is always present; filling it grows the
/// list by one. Blank fields are dropped on save. The saved template is
/// reported through `on_saved` only after the server confirms it.
#[component]
pub fn TemplateEditor(
    template: ChecklistTemplate,
    #[prop(into)] on_saved: Callback<ChecklistTemplate>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_page_context();

    let template_id = template.id;
    let (title, set_title) = signal(template.title.clone());
    let (fields, set_fields) = signal({
        let mut fields = template.items.clone();
        fields.push(String::new());
        fields
    });

    let on_save = {
        let api_root = ctx.api_root.clone();
        move |_| {
            // Blank fields are editor scaffolding, not items.
            let items: Vec<String> = fields
                .get_untracked()
                .iter()
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty())
                .collect();
            let template = ChecklistTemplate {
                id: template_id,
                title: title.get_untracked().trim().to_string(),
                items,
            };

            let api_root = api_root.clone();
            spawn_local(async move {
                match api::templates::save(&api_root, &template).await {
                    Ok(saved) => on_saved.run(saved),
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: saving template failed: {}", err).into(),
                    ),
                }
            });
        }
    };

    // Hoisted out of the `view!` macro: the turbofish's `<Vec<_>>` angle
    // brackets would otherwise be parsed as HTML tags.
    let field_indices = move || (0..fields.get().len()).collect::<Vec<usize>>();

    view! {
        <div class="checklist-template-edit">
            <div class="checklist-template-list">
                <input
                    type="text"
                    name="title"
                    placeholder="Title"
                    class="checklist-template-edit-title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <For
                    each=field_indices
                    key=|index| *index
                    children=move |index| view! {
                        <input
                            type="text"
                            name="item"
                            class="checklist-template-edit-item"
                            prop:value=move || {
                                fields.with(|fields| {
                                    fields.get(index).cloned().unwrap_or_default()
                                })
                            }
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_fields.update(|fields| {
                                    if let Some(slot) = fields.get_mut(index) {
                                        *slot = value;
                                    }
                                    // Grow once the last field has text.
                                    let needs_blank = fields
                                        .last()
                                        .is_some_and(|last| !last.trim().is_empty());
                                    if needs_blank {
                                        fields.push(String::new());
                                    }
                                });
                            }
                        />
                    }
                />
            </div>
            <div class="checklist-template-actions">
                <button
                    class="checklist-template-action-save"
                    on:click=on_save
                >
                    "Save"
                </button>
                <button
                    class="checklist-template-action-cancel"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
