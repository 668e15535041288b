//! Login page.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and server rejections both land in a single inline
//! error signal above the form; the page never navigates on failure.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::state::auth::SessionState;

/// Check a credential pair before it is sent anywhere. The username is
/// trimmed; the password is passed through untouched.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_owned());
    }
    if password.is_empty() {
        return Err("Password is required".to_owned());
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login form page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::session::login(session, &user, &pass).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log In"</h1>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form on:submit=submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <p>
                "Need an account? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
