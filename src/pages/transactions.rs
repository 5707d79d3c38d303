//! Financial transactions screen with income/expense totals.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::export_buttons::ExportButtons;
use crate::net::types::{Category, MoneyKind, Transaction, TransactionDraft};
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::util::filter::row_matches;
use crate::util::finance;

/// Parse a user-typed amount. Accepts a comma decimal separator; the
/// stored amount is unsigned with the kind carrying the direction.
fn parse_amount(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    let amount: f64 = normalized.parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Validate editor inputs into a draft payload.
fn build_transaction_draft(
    concept: &str,
    amount: &str,
    kind: MoneyKind,
    category_id: &str,
    date: &str,
) -> Result<TransactionDraft, &'static str> {
    let concept = concept.trim();
    if concept.is_empty() {
        return Err("Concept is required.");
    }
    let Some(amount) = parse_amount(amount) else {
        return Err("Amount must be a positive number.");
    };
    let date = date.trim();
    if date.is_empty() {
        return Err("Date is required.");
    }
    let category_id = category_id.trim();
    Ok(TransactionDraft {
        concept: concept.to_owned(),
        amount,
        kind,
        category_id: (!category_id.is_empty()).then(|| category_id.to_owned()),
        date: date.to_owned(),
    })
}

/// Display name of the assigned category, or a dash.
fn category_name(categories: &[Category], category_id: Option<&str>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map_or_else(|| "—".to_owned(), |c| c.name.clone())
}

/// Transactions screen — table with totals footer, create/edit dialog,
/// delete confirmation, export.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let rows = super::entity_resource::<Transaction>(monitor);
    let categories = super::entity_resource::<Category>(monitor);

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let concept = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let kind = RwSignal::new("income".to_owned());
    let category_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<Transaction>);

    let on_create = move |_| {
        editing_id.set(None);
        concept.set(String::new());
        amount.set(String::new());
        kind.set("income".to_owned());
        category_id.set(String::new());
        date.set(String::new());
        show_editor.set(true);
    };
    let open_editor = Callback::new(move |tx: Transaction| {
        editing_id.set(Some(tx.id));
        concept.set(tx.concept);
        amount.set(finance::money(tx.amount));
        kind.set(tx.kind.label().to_lowercase());
        category_id.set(tx.category_id.unwrap_or_default());
        date.set(tx.date);
        show_editor.set(true);
    });
    let on_cancel = Callback::new(move |_| show_editor.set(false));
    let request_delete = Callback::new(move |tx: Transaction| delete_target.set(Some(tx)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    view! {
        <div class="page transactions-page">
            <header class="page__header">
                <h1>"Transactions"</h1>
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search transactions..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="page__spacer"></span>
                <ExportButtons<Transaction> error=error/>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Transaction"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading transactions..."</p> }>
                {move || {
                    rows.get().map(|result| match result {
                        Err(e) => view! { <p class="page__error">{e}</p> }.into_any(),
                        Ok(list) => {
                            let totals = finance::summarize(&list);
                            let q = query.get();
                            let category_list = categories.get().and_then(Result::ok).unwrap_or_default();
                            let visible = list
                                .into_iter()
                                .filter(|t| row_matches(&[&t.concept, &t.date, t.kind.label()], &q))
                                .collect::<Vec<_>>();
                            view! {
                                <div class="transactions-page__totals">
                                    <span class="stat stat--income">
                                        "Income: " {finance::money(totals.income)}
                                    </span>
                                    <span class="stat stat--expense">
                                        "Expense: " {finance::money(totals.expense)}
                                    </span>
                                    <span class="stat stat--balance">
                                        "Balance: " {finance::money(totals.balance())}
                                    </span>
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Date"</th>
                                            <th>"Concept"</th>
                                            <th>"Category"</th>
                                            <th>"Kind"</th>
                                            <th class="data-table__amount">"Amount"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|t| {
                                                let edit_tx = t.clone();
                                                let delete_tx = t.clone();
                                                let assigned = category_name(&category_list, t.category_id.as_deref());
                                                view! {
                                                    <tr>
                                                        <td>{t.date.clone()}</td>
                                                        <td>{t.concept.clone()}</td>
                                                        <td>{assigned}</td>
                                                        <td>{t.kind.label()}</td>
                                                        <td class="data-table__amount">
                                                            {finance::signed_money(t.kind, t.amount)}
                                                        </td>
                                                        <td class="data-table__actions">
                                                            <button class="btn" on:click=move |_| open_editor.run(edit_tx.clone())>
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| request_delete.run(delete_tx.clone())
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
                <TransactionDialog editing_id concept amount kind category_id date categories on_cancel rows error/>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target.get().map(|target| {
                        let body = format!("This will permanently delete the transaction \"{}\".", target.concept);
                        let on_confirm = Callback::new(move |_| {
                            let id = target.id.clone();
                            delete_target.set(None);
                            #[cfg(feature = "hydrate")]
                            leptos::task::spawn_local(async move {
                                let token = monitor.with_value(SessionMonitor::token);
                                match crate::net::api::remove::<Transaction>(&id, token.as_deref()).await {
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
                                title="Delete Transaction"
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

/// Modal dialog for creating or editing a transaction.
#[component]
fn TransactionDialog(
    editing_id: RwSignal<Option<String>>,
    concept: RwSignal<String>,
    amount: RwSignal<String>,
    kind: RwSignal<String>,
    category_id: RwSignal<String>,
    date: RwSignal<String>,
    categories: LocalResource<Result<Vec<Category>, String>>,
    on_cancel: Callback<()>,
    rows: LocalResource<Result<Vec<Transaction>, String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let monitor = expect_context::<SessionContext>();
    let saving = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        if saving.get_untracked() {
            return;
        }
        let selected_kind =
            if kind.get_untracked() == "expense" { MoneyKind::Expense } else { MoneyKind::Income };
        let draft = match build_transaction_draft(
            &concept.get_untracked(),
            &amount.get_untracked(),
            selected_kind,
            &category_id.get_untracked(),
            &date.get_untracked(),
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
                Some(id) => crate::net::api::update::<Transaction>(&id, &draft, token.as_deref()).await,
                None => crate::net::api::create::<Transaction>(&draft, token.as_deref()).await,
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
                <h2>{move || if editing_id.get().is_some() { "Edit Transaction" } else { "Create Transaction" }}</h2>
                <label class="dialog__label">
                    "Concept"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || concept.get()
                        on:input=move |ev| concept.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
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
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=move || category_id.get()
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                    >
                        <option value="">"No category"</option>
                        {move || {
                            categories
                                .get()
                                .and_then(Result::ok)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
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
