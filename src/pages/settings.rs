//! Settings page: broadcast credentials, profile, and the banned roster.
//!
//! Requires an authenticated session; unauthenticated visitors are
//! redirected to login. Only this page exposes unban controls, so the
//! roster cache is loaded here.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionState;
use crate::state::roster::RosterState;
use crate::util::auth::install_unauth_redirect;

/// Check password-change inputs before they are sent.
pub fn validate_password_change(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(String, String), String> {
    if old_password.is_empty() {
        return Err("Current password is required".to_owned());
    }
    if new_password.is_empty() {
        return Err("New password is required".to_owned());
    }
    if new_password != confirm {
        return Err("New passwords do not match".to_owned());
    }
    Ok((old_password.to_owned(), new_password.to_owned()))
}

/// Account settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let roster = expect_context::<RwSignal<RosterState>>();
    install_unauth_redirect(session, use_navigate());

    // Broadcast credentials for the owner's own channel.
    let stream_info = LocalResource::new(move || {
        let username = session.get().username().map(str::to_owned);
        async move {
            match username {
                Some(username) => crate::net::api::fetch_stream_info(&username).await.ok(),
                None => None,
            }
        }
    });

    // Roster load is owner-gated; it runs once the session is established.
    Effect::new(move || {
        let state = session.get();
        let (Some(user), token) = (state.user.clone(), state.token.clone()) else {
            return;
        };
        let channel_id = user.username.clone();
        roster.update(|r| r.loading = true);
        leptos::task::spawn_local(async move {
            if let Err(e) =
                crate::net::moderation::load_roster(Some(user), token, &channel_id, roster).await
            {
                roster.update(|r| {
                    r.loading = false;
                    r.error = Some(e.to_string());
                });
            }
        });
    });

    let nickname = RwSignal::new(String::new());
    let nickname_notice = RwSignal::new(Option::<Result<String, String>>::None);

    // Seed the nickname field once the session arrives.
    Effect::new(move || {
        if let Some(user) = session.get().user {
            nickname.set(user.nickname.unwrap_or_default());
        }
    });

    let save_nickname = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = nickname.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::session::update_nickname(session, &value)
                .await
                .map(|()| "Nickname updated".to_owned());
            nickname_notice.set(Some(outcome));
        });
    };

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_notice = RwSignal::new(Option::<Result<String, String>>::None);

    let save_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (old, new) = match validate_password_change(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(pair) => pair,
            Err(e) => {
                password_notice.set(Some(Err(e)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::session::change_password(session, &old, &new)
                .await
                .map(|()| "Password changed".to_owned());
            if outcome.is_ok() {
                old_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            password_notice.set(Some(outcome));
        });
    };

    let unban = move |target: String| {
        let state = session.get_untracked();
        let Some(user) = state.user else {
            return;
        };
        let channel_id = user.username.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::moderation::unban_user(
                Some(user),
                state.token,
                &channel_id,
                &target,
                roster,
            )
            .await
            {
                roster.update(|r| r.error = Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>

            <section class="stream-settings">
                <h2>"Broadcast"</h2>
                <Suspense fallback=move || view! { <p>"Loading stream details..."</p> }>
                    {move || {
                        stream_info
                            .get()
                            .map(|info| match info {
                                Some(info) => {
                                    view! {
                                        <dl>
                                            <dt>"Stream URL"</dt>
                                            <dd>
                                                <code>{info.stream_url.unwrap_or_default()}</code>
                                            </dd>
                                            <dt>"Stream key"</dt>
                                            <dd>
                                                <code>{info.stream_key.unwrap_or_default()}</code>
                                            </dd>
                                        </dl>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! { <p>"Stream details are unavailable right now."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="profile-settings">
                <h2>"Profile"</h2>
                {move || {
                    nickname_notice
                        .get()
                        .map(|outcome| match outcome {
                            Ok(msg) => view! { <p class="form-ok">{msg}</p> }.into_any(),
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                        })
                }}
                <form on:submit=save_nickname>
                    <label>
                        "Nickname"
                        <input
                            type="text"
                            prop:value=move || nickname.get()
                            on:input=move |ev| nickname.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Save"</button>
                </form>
            </section>

            <section class="password-settings">
                <h2>"Password"</h2>
                {move || {
                    password_notice
                        .get()
                        .map(|outcome| match outcome {
                            Ok(msg) => view! { <p class="form-ok">{msg}</p> }.into_any(),
                            Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                        })
                }}
                <form on:submit=save_password>
                    <label>
                        "Current password"
                        <input
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "New password"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm new password"
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Change password"</button>
                </form>
            </section>

            <section class="banned-settings">
                <h2>"Banned users"</h2>
                {move || {
                    roster.get().error.map(|e| view! { <p class="form-error">{e}</p> })
                }}
                <Show
                    when=move || !roster.get().banned.is_empty()
                    fallback=move || view! { <p>"Nobody is banned from your chat."</p> }
                >
                    <ul class="banned-list">
                        <For
                            each=move || roster.get().banned
                            key=|entry| entry.banned_username.clone()
                            children=move |entry| {
                                let target = entry.banned_username.clone();
                                view! {
                                    <li>
                                        <span>{entry.banned_username.clone()}</span>
                                        <button on:click=move |_| unban(target.clone())>
                                            "Unban"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}
