//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the nav bar, the chat send box, and the moderation
//! controller to coordinate login redirects and identity-dependent behavior.
//! The `RwSignal<SessionState>` provided from `App` is the change-notification
//! mechanism: dependents subscribe by reading the signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// The authenticated user's identity: login handle plus display nickname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub nickname: Option<String>,
}

impl Identity {
    /// Name shown in the UI; falls back to the login handle when no
    /// nickname is set.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.username,
        }
    }
}

/// Session state tracking the auth token, resolved identity, and bootstrap
/// progress.
///
/// Token and identity always change together: a session is either fully
/// authenticated (both present) or anonymous (both absent). An absent token
/// means read-only channel participation.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state while the persisted token is being resolved.
    pub fn bootstrapping() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Install a fully authenticated session. Token and identity are set in
    /// one step so observers never see a half-updated session.
    pub fn establish(&mut self, token: String, user: Identity) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session back to anonymous. Clears token and identity
    /// together.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Username of the current user, if authenticated.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
