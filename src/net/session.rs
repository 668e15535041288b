//! Session service: bootstrap, login, signup, logout, and profile updates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rest of the client never performs authentication I/O itself; it
//! reads the `RwSignal<SessionState>` this module mutates. Token and
//! identity always move together so no observer ever sees a half-updated
//! session.

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api;
use crate::state::auth::{Identity, SessionState};
use crate::util::storage;

/// Resolve the persisted token (if any) against the server at app start.
///
/// A reachable server refreshes the identity from `/profile/`; when the
/// profile fetch fails the persisted identity is reused so a transient
/// outage does not log the user out. Always ends with `loading = false`.
pub async fn bootstrap(session: RwSignal<SessionState>) {
    let Some(token) = storage::load_token() else {
        session.update(SessionState::clear);
        return;
    };

    match api::fetch_profile(&token).await {
        Some(profile) => {
            let username = profile.username.or_else(storage::load_username);
            if let Some(username) = username {
                let identity = Identity {
                    username,
                    nickname: profile.nickname,
                };
                storage::save_session(&token, &identity);
                session.update(|s| s.establish(token, identity));
            } else {
                storage::clear_session();
                session.update(SessionState::clear);
            }
        }
        None => {
            if let Some(identity) = storage::load_identity() {
                leptos::logging::warn!("profile refresh failed, reusing persisted identity");
                session.update(|s| s.establish(token, identity));
            } else {
                session.update(SessionState::clear);
            }
        }
    }
}

/// Exchange credentials for a session and persist it.
///
/// # Errors
///
/// Returns the server-provided reason on rejection; the session is left
/// untouched.
pub async fn login(
    session: RwSignal<SessionState>,
    username: &str,
    password: &str,
) -> Result<(), String> {
    let resp = api::login(username, password).await?;
    let identity = Identity {
        username: resp.username,
        nickname: resp.nickname,
    };
    storage::save_session(&resp.token, &identity);
    session.update(|s| s.establish(resp.token, identity));
    Ok(())
}

/// Create an account. The caller decides what to do next (the signup page
/// redirects to login).
///
/// # Errors
///
/// Returns the server-provided reason (e.g. username taken).
pub async fn signup(username: &str, password: &str) -> Result<(), String> {
    api::signup(username, password).await
}

/// Invalidate the session server-side (best-effort) and clear all local
/// session state atomically.
pub async fn logout(session: RwSignal<SessionState>) {
    if let Some(token) = session.get_untracked().token {
        api::logout(&token).await;
    }
    storage::clear_session();
    session.update(SessionState::clear);
}

/// Update the display nickname and propagate it into the session.
///
/// # Errors
///
/// Returns the server-provided reason; the session is left untouched.
pub async fn update_nickname(session: RwSignal<SessionState>, nickname: &str) -> Result<(), String> {
    let state = session.get_untracked();
    let token = state.token.ok_or_else(|| "not logged in".to_owned())?;

    let profile = api::update_nickname(&token, nickname).await?;
    session.update(|s| {
        if let Some(user) = s.user.as_mut() {
            user.nickname = profile.nickname;
        }
    });
    if let Some(identity) = session.get_untracked().user {
        storage::save_session(&token, &identity);
    }
    Ok(())
}

/// Change the account password. Does not rotate the token.
///
/// # Errors
///
/// Returns the server-provided reason (field-level messages included).
pub async fn change_password(
    session: RwSignal<SessionState>,
    old_password: &str,
    new_password: &str,
) -> Result<(), String> {
    let token = session
        .get_untracked()
        .token
        .ok_or_else(|| "not logged in".to_owned())?;
    api::change_password(&token, old_password, new_password).await
}
