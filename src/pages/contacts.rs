//! Contact directory screen (donors, partners, suppliers).

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{Contact, ContactDraft};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;

/// Validate editor inputs into a draft payload. Only the name is required;
/// blank optional fields are stored as absent, not as empty strings.
fn build_contact_draft(name: &str, email: &str, phone: &str, organization: &str) -> Result<ContactDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Contact name is required.");
    }
    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };
    Ok(ContactDraft {
        name: name.to_owned(),
        email: optional(email),
        phone: optional(phone),
        organization: optional(organization),
    })
}

/// Contacts screen — table, create/edit dialog, delete confirmation,
/// export.
#[component]
pub fn ContactsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let rows = super::entity_resource::<Contact>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<Contact>);

    let on_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        organization.set(String::new());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |contact: Contact| {
        editing_id.set(Some(contact.id));
        name.set(contact.name);
        email.set(contact.email.unwrap_or_default());
        phone.set(contact.phone.unwrap_or_default());
        organization.set(contact.organization.unwrap_or_default());
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |contact: Contact| delete_target.set(Some(contact)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page contacts-page">
            <header class="page__header">
                <h1>"Contacts"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search contacts..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<Contact> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Contact"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading contacts..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let q = query.get();
                            let visible = list
                                .into_iter()
                                .filter(|c| {
                                    row_matches(
                                        &[
                                            &c.name,
                                            c.email.as_deref().unwrap_or(""),
                                            c.phone.as_deref().unwrap_or(""),
                                            c.organization.as_deref().unwrap_or(""),
                                        ],
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
                                            <th>"Organization"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|c| {
                                                let edit_contact = c.clone();
                                                let delete_contact = c.clone();
                                                view! {
                                                    <tr>
                                                        <td>{c.name.clone()}</td>
                                                        <td>{c.email.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td>{c.phone.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td>{c.organization.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_contact.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_contact.clone())
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
                <ContactDialog editing_id name email phone organization on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!("This will permanently delete the contact {}.", target.name);
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<Contact>(&id, token.as_deref()).await {
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
                                title="Delete Contact"
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

/// Modal dialog for creating or editing a contact.
#[component]
fn ContactDialog(
    editing_id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    organization: RwSignal<String>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<Contact>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = match build_contact_draft(
            &name.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
            &organization.get_untracked(),
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
                Some(id) => crate::net::api::update::<Contact>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<Contact>(&draft, token.as_deref()).await,
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
                <h2>{move || if editing_id.get().is_some() { "Edit Contact" } else { "Create Contact" }}</h2>
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
                    "Organization"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || organization.get()
                        on:input=move |ev| organization.set(event_target_value(&ev))
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
