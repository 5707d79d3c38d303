//! Modal confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog — backdrop click cancels, the action button runs
/// the confirmed callback.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    body: String,
    action_label: &'static str,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{body}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
