//! Login page with email + password authentication.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::SessionState;

/// User-facing failure line for a rejected or failed login call.
fn login_failure_message(err: &ApiError) -> String {
    if err.is_auth() {
        "Invalid email or password.".to_owned()
    } else {
        format!("Login failed: {err}")
    }
}

/// Login page — exchanges credentials for a bearer token, persists it
/// through the session monitor, and loads the profile before navigating to
/// the overview.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: the login page is not for you.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.profile.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let monitor = expect_context::<crate::session::SessionContext>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = LoginRequest { email: email_value, password: password_value };
            match crate::net::api::login(&request).await {
                Ok(resp) => {
                    let handle = monitor.get_value();
                    handle.save_credential(&resp.token, &resp.role);
                    crate::session::browser::refresh_profile(handle).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(login_failure_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Backoffice"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
