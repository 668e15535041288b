//! Banned-user roster cache for the channel owner's settings view.
//!
//! The authoritative set lives server-side; this cache is refreshed on
//! settings load and mutated optimistically when a ban/unban command
//! succeeds. A concurrent ban from another session is only reconciled on
//! the next reload.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::BannedEntry;

/// Cached set of a channel's currently banned users.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub banned: Vec<BannedEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RosterState {
    /// Replace the cache with a fresh server snapshot.
    pub fn reload(&mut self, entries: Vec<BannedEntry>) {
        self.banned = entries;
        self.loading = false;
        self.error = None;
    }

    /// Record a successful ban. Duplicates are collapsed.
    pub fn insert(&mut self, username: &str) {
        if !self.contains(username) {
            self.banned.push(BannedEntry {
                banned_username: username.to_owned(),
            });
        }
    }

    /// Record a successful unban.
    pub fn remove(&mut self, username: &str) {
        self.banned.retain(|e| e.banned_username != username);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.banned.iter().any(|e| e.banned_username == username)
    }
}
