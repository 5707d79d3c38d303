//! Project management screen.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{Project, ProjectDraft};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;

const STATUS_OPTIONS: [&str; 3] = ["active", "paused", "finished"];

/// Validate editor inputs into a draft payload. An empty start date means
/// the project is not scheduled yet.
fn build_project_draft(
    name: &str,
    description: &str,
    status: &str,
    start_date: &str,
) -> Result<ProjectDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Project name is required.");
    }
    let start_date = start_date.trim();
    Ok(ProjectDraft {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        status: status.to_owned(),
        start_date: (!start_date.is_empty()).then(|| start_date.to_owned()),
    })
}

/// Projects screen — table, create/edit dialog, delete confirmation,
/// export.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let rows = super::entity_resource::<Project>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new("active".to_owned());
    let start_date = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<Project>);

    let on_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        description.set(String::new());
        status.set("active".to_owned());
        start_date.set(String::new());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |project: Project| {
        editing_id.set(Some(project.id));
        name.set(project.name);
        description.set(project.description);
        status.set(project.status);
        start_date.set(project.start_date.unwrap_or_default());
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |project: Project| delete_target.set(Some(project)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page projects-page">
            <header class="page__header">
                <h1>"Projects"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search projects..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<Project> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Project"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let q = query.get();
                            let visible = list
                                .into_iter()
                                .filter(|p| row_matches(&[&p.name, &p.description, &p.status], &q))
                                .collect::<Vec<_>>();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Description"</th>
                                            <th>"Status"</th>
                                            <th>"Start"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|p| {
                                                let edit_project = p.clone();
                                                let delete_project = p.clone();
                                                view! {
                                                    <tr>
                                                        <td>{p.name.clone()}</td>
                                                        <td>{p.description.clone()}</td>
                                                        <td>{p.status.clone()}</td>
                                                        <td>{p.start_date.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_project.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_project.clone())
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
                <ProjectDialog editing_id name description status start_date on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!("This will permanently delete the project {}.", target.name);
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<Project>(&id, token.as_deref()).await {
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
                                title="Delete Project"
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

/// Modal dialog for creating or editing a project.
#[component]
fn ProjectDialog(
    editing_id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    status: RwSignal<String>,
    start_date: RwSignal<String>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<Project>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = match build_project_draft(
            &name.get_untracked(),
            &description.get_untracked(),
            &status.get_untracked(),
            &start_date.get_untracked(),
        ) {
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
                Some(id) => crate::net::api::update::<Project>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<Project>(&draft, token.as_deref()).await,
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
                <h2>{move || if editing_id.get().is_some() { "Edit Project" } else { "Create Project" }}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {STATUS_OPTIONS
                            .into_iter()
                            .map(|option| view! { <option value=option>{option}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Start date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
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
