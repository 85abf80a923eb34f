//! Template Account Page Component
//!
//! The account-page manager for checklist templates: list, create, edit
//! and remove.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TemplateEditor;
use crate::context::use_page_context;
use crate::models::ChecklistTemplate;

/// The view instantiated by the account page.
#[component]
pub fn TemplatePage() -> impl IntoView {
    let ctx = use_page_context();

    let (templates, set_templates) = signal(Vec::<ChecklistTemplate>::new());
    let (adding, set_adding) = signal(false);

    // Load the user's templates on mount.
    {
        let api_root = ctx.api_root.clone();
        Effect::new(move |_| {
            let api_root = api_root.clone();
            spawn_local(async move {
                match api::templates::fetch_all(&api_root).await {
                    Ok(loaded) => set_templates.set(loaded),
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: fetching templates failed: {}", err).into(),
                    ),
                }
            });
        });
    }

    // A confirmed save replaces the edited template or appends a new one.
    let on_saved = Callback::new(move |saved: ChecklistTemplate| {
        set_adding.set(false);
        set_templates.update(|templates| {
            let existing = templates
                .iter()
                .position(|template| template.id == saved.id);
            match existing {
                Some(index) => templates[index] = saved,
                None => templates.push(saved),
            }
        });
    });

    let on_removed = Callback::new(move |template_id: u32| {
        set_templates.update(|templates| {
            templates.retain(|template| template.id != Some(template_id));
        });
    });

    view! {
        <div class="checklist-accountpage">
            <div class="checklist-accountpage-actions">
                <button
                    class="checklist-template-add-new"
                    on:click=move |_| set_adding.set(true)
                >
                    "New template"
                </button>
            </div>
            <Show when=move || adding.get()>
                <TemplateEditor
                    template=ChecklistTemplate::default()
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| set_adding.set(false))
                />
            </Show>
            <div class="checklist-templates">
                <For
                    each=move || templates.get()
                    key=|template| (template.id, template.title.clone(), template.items.clone())
                    children=move |template| view! {
                        <TemplateCard
                            template=template
                            on_saved=on_saved
                            on_removed=on_removed
                        />
                    }
                />
            </div>
        </div>
    }
}

/// One template in the list, with an inline edit mode.
#[component]
fn TemplateCard(
    template: ChecklistTemplate,
    on_saved: Callback<ChecklistTemplate>,
    on_removed: Callback<u32>,
) -> impl IntoView {
    let ctx = use_page_context();
    let (editing, set_editing) = signal(false);

    let on_card_saved = Callback::new(move |saved: ChecklistTemplate| {
        set_editing.set(false);
        on_saved.run(saved);
    });

    let on_remove = {
        let template = template.clone();
        let api_root = ctx.api_root.clone();
        move |_| {
            let template = template.clone();
            let api_root = api_root.clone();
            spawn_local(async move {
                match api::templates::remove(&api_root, &template).await {
                    // Dropped from the list only after the server
                    // confirms.
                    Ok(()) => {
                        if let Some(id) = template.id {
                            on_removed.run(id);
                        }
                    }
                    Err(err) => web_sys::console::warn_1(
                        &format!("checklist: removing template failed: {}", err).into(),
                    ),
                }
            });
        }
    };

    let title = template.title.clone();
    let items = template.items.clone();
    let editor_template = template.clone();

    view! {
        <div class="checklist-template">
            <Show
                when=move || !editing.get()
                fallback=move || view! {
                    <TemplateEditor
                        template=editor_template.clone()
                        on_saved=on_card_saved
                        on_cancel=Callback::new(move |_| set_editing.set(false))
                    />
                }
            >
                <ul class="checklist-template-items">
                    <li class="checklist-template-title">{title.clone()}</li>
                    {items
                        .iter()
                        .map(|item| view! {
                            <li class="checklist-template-item">{item.clone()}</li>
                        })
                        .collect_view()}
                </ul>
                <div class="checklist-template-actions">
                    <button
                        class="checklist-template-action-edit"
                        on:click=move |_| set_editing.set(true)
                    >
                        "Edit"
                    </button>
                    <button
                        class="checklist-template-action-remove"
                        on:click=on_remove.clone()
                    >
                        "Remove"
                    </button>
                </div>
            </Show>
        </div>
    }
}
