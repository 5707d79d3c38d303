//! User account management screen (admin only).
//!
//! SYSTEM CONTEXT
//! ==============
//! The only role-gated route: non-admins are sent back to the overview.
//! Password handling is create-only-required; an empty password on edit
//! keeps the existing one.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{User, UserDraft};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;

/// Validate editor inputs into a draft payload.
fn build_user_draft(name: &str, email: &str, role: &str, password: &str, is_new: bool) -> Result<UserDraft, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Name and email are required.");
    }
    let password = password.trim();
    if password.is_empty() && is_new {
        return Err("Password is required for new accounts.");
    }
    Ok(UserDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        password: (!password.is_empty()).then(|| password.to_owned()),
    })
}

/// Users screen — table, create/edit dialog, delete confirmation, export.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());
    crate::util::auth::install_admin_redirect(session, navigate);

    let rows = super::entity_resource::<User>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Editor dialog state; `editing_id` of None means create.
    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new("user".to_owned());
    let password = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<User>);

    let on_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        email.set(String::new());
        role.set("user".to_owned());
        password.set(String::new());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |user: User| {
        editing_id.set(Some(user.id));
        name.set(user.name);
        email.set(user.email);
        role.set(user.role);
        password.set(String::new());
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |user: User| delete_target.set(Some(user)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page users-page">
            <header class="page__header">
                <h1>"Users"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<User> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New User"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let q = query.get();
                            let visible = list
                                .into_iter()
                                .filter(|u| row_matches(&[&u.name, &u.email, &u.role], &q))
                                .collect::<Vec<_>>();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|u| {
                                                let edit_user = u.clone();
                                                let delete_user = u.clone();
                                                view! {
                                                    <tr>
                                                        <td>{u.name.clone()}</td>
                                                        <td>{u.email.clone()}</td>
                                                        <td>{u.role.clone()}</td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_user.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_user.clone())
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
                <UserDialog editing_id name email role password on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!("This will permanently delete the account for {}.", target.name);
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<User>(&id, token.as_deref()).await {
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
                                title="Delete User"
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

/// Modal dialog for creating or editing a user account.
#[component]
fn UserDialog(
    editing_id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    role: RwSignal<String>,
    password: RwSignal<String>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<User>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let is_new = editing_id.get_untracked().is_none();
        let draft = match build_user_draft(
            &name.get_untracked(),
            &email.get_untracked(),
            &role.get_untracked(),
            &password.get_untracked(),
            is_new,
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
                Some(id) => crate::net::api::update::<User>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<User>(&draft, token.as_deref()).await,
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
                <h2>{move || if editing_id.get().is_some() { "Edit User" } else { "Create User" }}</h2>
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
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="user">"user"</option>
                        <option value="admin">"admin"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    {move || if editing_id.get().is_some() { "Password (leave empty to keep)" } else { "Password" }}
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
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
