//! Wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so serde
//! round-trips stay lossless and dispatch code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response body of `POST /login/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque session credential.
    pub token: String,
    /// Login handle as canonicalized by the server.
    pub username: String,
    /// Display nickname, if the account has one.
    pub nickname: Option<String>,
}

/// Response body of `GET /profile/` and `PUT /profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// One channel row from `GET /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Streamer's login handle; identifies the channel.
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Whether the channel is currently broadcasting.
    #[serde(default)]
    pub is_live: bool,
    /// Stream preview image URL for live channels.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ChannelSummary {
    /// Name shown on the channel card; falls back to the login handle.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.username,
        }
    }
}

/// Response body of `GET /stream/{channelId}/`: read-only stream metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StreamInfo {
    #[serde(default)]
    pub nickname: Option<String>,
    /// Third-party player identifier; `placeholder-*` until the streamer
    /// finishes setup.
    #[serde(default)]
    pub stream_uid: Option<String>,
    /// RTMP ingest URL shown in the owner's OBS instructions.
    #[serde(default)]
    pub stream_url: Option<String>,
    /// Secret ingest key shown in the owner's OBS instructions.
    #[serde(default)]
    pub stream_key: Option<String>,
    #[serde(default)]
    pub is_live: bool,
}

impl StreamInfo {
    /// Whether the channel has a playable stream configured.
    pub fn has_real_stream(&self) -> bool {
        self.stream_uid
            .as_deref()
            .is_some_and(|uid| !uid.is_empty() && !uid.starts_with("placeholder-"))
    }
}

/// One row from `GET /stream/{channelId}/banned/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedEntry {
    pub banned_username: String,
}

/// Raw inbound chat frame. Exactly one of two shapes is valid: an
/// application-level rejection (`error` set) or a chat message (`username`
/// and `message` set). Classification happens in `net::channel`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatFrame {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
