//! Transaction category management screen.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{Category, CategoryDraft, MoneyKind};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;

/// Select-option value to money kind; unknown values fall back to income.
fn parse_kind(value: &str) -> MoneyKind {
    if value == "expense" { MoneyKind::Expense } else { MoneyKind::Income }
}

/// Validate editor inputs into a draft payload.
fn build_category_draft(name: &str, kind: &str) -> Result<CategoryDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Category name is required.");
    }
    Ok(CategoryDraft { name: name.to_owned(), kind: parse_kind(kind) })
}

/// Categories screen — table, create/edit dialog, delete confirmation,
/// export.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let rows = super::entity_resource::<Category>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new("income".to_owned());

    let delete_target = RwSignal::new(None::<Category>);

    let on_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        kind.set("income".to_owned());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |category: Category| {
        editing_id.set(Some(category.id));
        name.set(category.name);
        kind.set(category.kind.label().to_lowercase());
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |category: Category| delete_target.set(Some(category)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page categories-page">
            <header class="page__header">
                <h1>"Categories"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search categories..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<Category> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Category"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let q = query.get();
                            let visible = list
                                .into_iter()
                                .filter(|c| row_matches(&[&c.name, c.kind.label()], &q))
                                .collect::<Vec<_>>();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Kind"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|c| {
                                                let edit_category = c.clone();
                                                let delete_category = c.clone();
                                                view! {
                                                    <tr>
                                                        <td>{c.name.clone()}</td>
                                                        <td>{c.kind.label()}</td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_category.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_category.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_editor.get()>
                <CategoryDialog editing_id name kind on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!(
                            "This will permanently delete the category {}. Transactions keep their records but lose the category.",
                            target.name
                        );
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<Category>(&id, token.as_deref()).await {
                                    Ok(()) => {
                                        error.set(None);
                                        rows.refetch();
                                    }
                                    Err(e) => error.set(Some(format!("Delete failed: {e}"))),
                                }
                            });
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = id;
                            }
                        });
                        view! {
                            <ConfirmDialog
                                title="Delete Category"
                                body=body
                                action_label="Delete"
                                on_cancel=on_delete_cancel
                                on_confirm=on_confirm
                            />
                        }
                    })
                }}
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a category.
#[component]
fn CategoryDialog(
    editing_id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    kind: RwSignal<String>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<Category>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = match build_category_draft(&name.get_untracked(), &kind.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = monitor.with_value(SessionMonitor::token);
            let outcome = match editing_id.get_untracked() {
                Some(id) => crate::net::api::update::<Category>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<Category>(&draft, token.as_deref()).await,
            };
            match outcome {
                Ok(_) => {
                    error.set(None);
                    rows.refetch();
                    on_cancel.run(());
                }
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            saving.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing_id.get().is_some() { "Edit Category" } else { "Create Category" }}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Kind"
                    <select
                        class="dialog__input"
                        prop:value=move || kind.get()
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        <option value="income">"Income"</option>
                        <option value="expense">"Expense"</option>
                    </select>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
