//! Signup page. Account creation does not log the user in; on success the
//! page redirects to the login form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Check signup inputs before they are sent. The username is trimmed and
/// both password entries must match exactly.
pub fn validate_signup(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_owned());
    }
    if password.is_empty() {
        return Err("Password is required".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match".to_owned());
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Signup form page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = match validate_signup(
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
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
            match crate::net::session::signup(&user, &pass).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign Up"</h1>
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
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p>
                "Already registered? "
                <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
