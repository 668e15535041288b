//! Chat transcript for the currently open channel.
//!
//! DESIGN
//! ======
//! The transcript is an ordered, append-only log keyed by arrival order; no
//! timestamps are compared. It shrinks in exactly two cases: switching to a
//! different channel (`ensure_channel`) and a successful ban
//! (`purge_by_author`). The purge is a one-shot cleanup of currently visible
//! history, not an ongoing filter; suppressing future messages from a
//! banned user is the server's job.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author's login handle.
    pub username: String,
    /// Author's nickname, when the server supplied one.
    pub display_name: Option<String>,
    /// Message body, rendered verbatim.
    pub text: String,
}

impl ChatMessage {
    /// Name shown next to the message; falls back to the login handle.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.username,
        }
    }
}

/// Append-only client-visible chat log for one channel viewing session.
#[derive(Clone, Debug, Default)]
pub struct ChatTranscript {
    /// Channel the current log belongs to.
    pub channel_id: Option<String>,
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Append a message at the end. Arrival order is the sole ordering key.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Bind the transcript to `channel_id`, clearing the log only when the
    /// channel actually changed. A token-only reconnect on the same channel
    /// keeps the existing context.
    pub fn ensure_channel(&mut self, channel_id: &str) {
        if self.channel_id.as_deref() != Some(channel_id) {
            self.channel_id = Some(channel_id.to_owned());
            self.messages.clear();
        }
    }

    /// Remove every message authored by `username`, preserving the relative
    /// order of the remainder. Point-in-time only: messages from the same
    /// author arriving afterwards are appended normally.
    pub fn purge_by_author(&mut self, username: &str) {
        self.messages.retain(|m| m.username != username);
    }
}
