//! Browser localStorage persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session service treats this module as its `getToken`/`setToken`/
//! `clearToken` collaborator. Token, username, and nickname are written and
//! cleared together so a reload never resurrects a partial session.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "tidecast_token";
#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "tidecast_username";
#[cfg(feature = "hydrate")]
const NICKNAME_KEY: &str = "tidecast_nickname";

use crate::state::auth::Identity;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn load_item(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Read the persisted session token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        load_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted login handle, if any.
pub fn load_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        load_item(USERNAME_KEY).filter(|u| !u.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Rebuild the persisted identity, used when the profile refresh fails.
pub fn load_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let username = load_username()?;
        Some(Identity {
            username,
            nickname: load_item(NICKNAME_KEY).filter(|n| !n.is_empty()),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the full session. Fields are written together.
pub fn save_session(token: &str, identity: &Identity) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USERNAME_KEY, &identity.username);
        match identity.nickname.as_deref() {
            Some(nickname) => {
                let _ = storage.set_item(NICKNAME_KEY, nickname);
            }
            None => {
                let _ = storage.remove_item(NICKNAME_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, identity);
    }
}

/// Remove every persisted session field.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
        let _ = storage.remove_item(NICKNAME_KEY);
    }
}
