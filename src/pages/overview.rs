//! Overview screen — entity counts and financial totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It only reads: counts come
//! from the same list endpoints the entity screens use, totals from the
//! transaction list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Contact, Project, Transaction, Volunteer};
use crate::session::SessionContext;
use crate::state::session::SessionState;
use crate::util::finance;

/// Overview page — shows per-entity counts and income/expense/balance.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let monitor = expect_context::<SessionContext>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let projects = super::entity_resource::<Project>(monitor);
    let contacts = super::entity_resource::<Contact>(monitor);
    let volunteers = super::entity_resource::<Volunteer>(monitor);
    let transactions = super::entity_resource::<Transaction>(monitor);

    let greeting = move || {
        session
            .get()
            .profile
            .map_or_else(|| "Overview".to_owned(), |p| format!("Welcome back, {}", p.name))
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().profile.is_some()
            fallback=move || {
                view! {
                    <div class="page overview-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="page overview-page">
                <header class="page__header">
                    <h1>{greeting}</h1>
                </header>

                <div class="overview-page__cards">
                    <a class="stat-card" href="/projects">
                        <span class="stat-card__label">"Projects"</span>
                        <span class="stat-card__value">
                            {move || projects.get().and_then(Result::ok).map_or_else(|| "–".to_owned(), |l| l.len().to_string())}
                        </span>
                    </a>
                    <a class="stat-card" href="/contacts">
                        <span class="stat-card__label">"Contacts"</span>
                        <span class="stat-card__value">
                            {move || contacts.get().and_then(Result::ok).map_or_else(|| "–".to_owned(), |l| l.len().to_string())}
                        </span>
                    </a>
                    <a class="stat-card" href="/volunteers">
                        <span class="stat-card__label">"Volunteers"</span>
                        <span class="stat-card__value">
                            {move || volunteers.get().and_then(Result::ok).map_or_else(|| "–".to_owned(), |l| l.len().to_string())}
                        </span>
                    </a>
                    <a class="stat-card" href="/transactions">
                        <span class="stat-card__label">"Transactions"</span>
                        <span class="stat-card__value">
                            {move || transactions.get().and_then(Result::ok).map_or_else(|| "–".to_owned(), |l| l.len().to_string())}
                        </span>
                    </a>
                </div>

                <div class="overview-page__totals">
                    {move || {
                        transactions
                            .get()
                            .and_then(Result::ok)
                            .map(|list| {
                                let totals = finance::summarize(&list);
                                view! {
                                    <span class="stat stat--income">"Income: " {finance::money(totals.income)}</span>
                                    <span class="stat stat--expense">"Expense: " {finance::money(totals.expense)}</span>
                                    <span class="stat stat--balance">"Balance: " {finance::money(totals.balance())}</span>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
