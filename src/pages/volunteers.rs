//! Volunteer registry screen with project assignment.

#[cfg(test)]
#[path = "volunteers_test.rs"]
mod volunteers_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{Project, Volunteer, VolunteerDraft};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;

/// Validate editor inputs into a draft payload. The empty select option
/// means "not assigned".
fn build_volunteer_draft(name: &str, email: &str, phone: &str, project_id: &str) -> Result<VolunteerDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Volunteer name is required.");
    }
    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };
    Ok(VolunteerDraft {
        name: name.to_owned(),
        email: optional(email),
        phone: optional(phone),
        project_id: optional(project_id),
    })
}

/// Display name of the assigned project, or a dash when unassigned or the
/// project is no longer listed.
fn project_name(projects: &[Project], project_id: Option<&str>) -> String {
    project_id
        .and_then(|id| projects.iter().find(|p| p.id == id))
        .map_or_else(|| "—".to_owned(), |p| p.name.clone())
}

/// Volunteers screen — table with project assignment, create/edit dialog,
/// delete confirmation, export.
#[component]
pub fn VolunteersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let rows = super::entity_resource::<Volunteer>(monitor);
    let projects = super::entity_resource::<Project>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let project_id = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<Volunteer>);

    let on_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        project_id.set(String::new());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |volunteer: Volunteer| {
        editing_id.set(Some(volunteer.id));
        name.set(volunteer.name);
        email.set(volunteer.email.unwrap_or_default());
        phone.set(volunteer.phone.unwrap_or_default());
        project_id.set(volunteer.project_id.unwrap_or_default());
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |volunteer: Volunteer| delete_target.set(Some(volunteer)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page volunteers-page">
            <header class="page__header">
                <h1>"Volunteers"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search volunteers..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<Volunteer> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Volunteer"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading volunteers..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let q = query.get();
                            let project_list = projects.get().and_then(Result::ok).unwrap_or_default();
                            let visible = list
                                .into_iter()
                                .filter(|v| {
                                    row_matches(
                                        &[&v.name, v.email.as_deref().unwrap_or(""), v.phone.as_deref().unwrap_or("")],
                                        &q,
                                    )
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Phone"</th>
                                            <th>"Project"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|v| {
                                                let edit_volunteer = v.clone();
                                                let delete_volunteer = v.clone();
                                                let assigned = project_name(&project_list, v.project_id.as_deref());
                                                view! {
                                                    <tr>
                                                        <td>{v.name.clone()}</td>
                                                        <td>{v.email.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td>{v.phone.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td>{assigned}</td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_volunteer.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_volunteer.clone())
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
                <VolunteerDialog editing_id name email phone project_id projects on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!("This will permanently delete the volunteer {}.", target.name);
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<Volunteer>(&id, token.as_deref()).await {
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
                                title="Delete Volunteer"
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

/// Modal dialog for creating or editing a volunteer.
#[component]
fn VolunteerDialog(
    editing_id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    project_id: RwSignal<String>,
    projects: LocalResource<Result<Vec<Project>, String>>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<Volunteer>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = match build_volunteer_draft(
            &name.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
            &project_id.get_untracked(),
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
                Some(id) => crate::net::api::update::<Volunteer>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<Volunteer>(&draft, token.as_deref()).await,
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
                <h2>{move || if editing_id.get().is_some() { "Edit Volunteer" } else { "Create Volunteer" }}</h2>
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
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Project"
                    <select
                        class="dialog__input"
                        prop:value=move || project_id.get()
                        on:change=move |ev| project_id.set(event_target_value(&ev))
                    >
                        <option value="">"Not assigned"</option>
                        {move || {
                            projects
                                .get()
                                .and_then(Result::ok)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|p| view! { <option value=p.id.clone()>{p.name.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
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
