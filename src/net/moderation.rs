//! Moderation controller: owner-gated ban/unban commands and the banned
//! roster cache.
//!
//! AUTHORIZATION
//! =============
//! The UI only offers ban/unban controls to the channel owner, but the
//! controller re-asserts ownership before every network call; a UI-level
//! gate alone is never trusted. Violations are rejected locally and typed,
//! never sent to the server.
//!
//! CONSISTENCY
//! ===========
//! On ban success the transcript purge runs synchronously in the response
//! task, before any later-scheduled transcript mutation, then the roster
//! cache is updated. On any failure nothing local changes and the
//! server-provided reason is returned. The cache may drift from server
//! truth under concurrent sessions; it reconciles on the next roster load.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use leptos::prelude::{RwSignal, Update};
use thiserror::Error;

use crate::state::auth::Identity;
use crate::state::chat::ChatTranscript;
use crate::state::roster::RosterState;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModerationError {
    #[error("only the channel owner can moderate this chat")]
    NotChannelOwner,
    #[error("you cannot ban yourself")]
    SelfBan,
    /// The server rejected the command; carries its reason.
    #[error("{0}")]
    Server(String),
    #[error("moderation is not available here")]
    Unavailable,
}

/// Owner gate: the authenticated identity must be the channel itself.
pub fn authorize(identity: Option<&Identity>, channel_id: &str) -> Result<(), ModerationError> {
    match identity {
        Some(id) if id.username == channel_id => Ok(()),
        _ => Err(ModerationError::NotChannelOwner),
    }
}

/// Full ban precondition: owner gate plus self-ban rejection.
pub fn validate_ban(
    identity: Option<&Identity>,
    channel_id: &str,
    target: &str,
) -> Result<(), ModerationError> {
    authorize(identity, channel_id)?;
    // authorize guarantees identity is present here.
    if identity.is_some_and(|id| id.username == target) {
        return Err(ModerationError::SelfBan);
    }
    Ok(())
}

/// Ban `target` from the identity's own channel.
///
/// On success, purges the target's messages from the currently visible
/// transcript (one-shot, not an ongoing filter) and adds the target to the
/// roster cache.
///
/// # Errors
///
/// Rejected locally for non-owners and self-bans; otherwise carries the
/// server's reason. No local state changes on failure.
pub async fn ban_user(
    identity: Option<Identity>,
    token: Option<String>,
    channel_id: &str,
    target: &str,
    transcript: RwSignal<ChatTranscript>,
    roster: RwSignal<RosterState>,
) -> Result<(), ModerationError> {
    validate_ban(identity.as_ref(), channel_id, target)?;
    // Identity without a token cannot occur (they change together), but the
    // command is impossible without one.
    let token = token.ok_or(ModerationError::NotChannelOwner)?;
    post_command("/ban/", &token, target).await?;

    transcript.update(|t| t.purge_by_author(target));
    roster.update(|r| r.insert(target));
    Ok(())
}

/// Unban `target` on the identity's own channel. Removes the target from
/// the roster cache on success; never touches the transcript (purged
/// messages are not restored).
///
/// # Errors
///
/// Rejected locally for non-owners; otherwise carries the server's reason.
pub async fn unban_user(
    identity: Option<Identity>,
    token: Option<String>,
    channel_id: &str,
    target: &str,
    roster: RwSignal<RosterState>,
) -> Result<(), ModerationError> {
    authorize(identity.as_ref(), channel_id)?;
    let token = token.ok_or(ModerationError::NotChannelOwner)?;
    post_command("/unban/", &token, target).await?;

    roster.update(|r| r.remove(target));
    Ok(())
}

/// Reload the roster cache from `GET /stream/{channelId}/banned/`.
///
/// # Errors
///
/// Rejected locally for non-owners; otherwise carries the server's reason.
pub async fn load_roster(
    identity: Option<Identity>,
    token: Option<String>,
    channel_id: &str,
    roster: RwSignal<RosterState>,
) -> Result<(), ModerationError> {
    authorize(identity.as_ref(), channel_id)?;
    let token = token.ok_or(ModerationError::NotChannelOwner)?;

    #[cfg(feature = "hydrate")]
    {
        let url = format!("/stream/{channel_id}/banned/");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &super::api::auth_header(&token))
            .send()
            .await
            .map_err(|e| ModerationError::Server(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ModerationError::Server(super::api::failure_reason(&body, &[])));
        }
        let entries = resp
            .json::<Vec<crate::net::types::BannedEntry>>()
            .await
            .map_err(|e| ModerationError::Server(e.to_string()))?;
        roster.update(|r| r.reload(entries));
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, roster);
        Err(ModerationError::Unavailable)
    }
}

/// Issue one administrative command carrying `{banned_user}`.
async fn post_command(path: &str, token: &str, target: &str) -> Result<(), ModerationError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "banned_user": target });
        let resp = gloo_net::http::Request::post(path)
            .header("Authorization", &super::api::auth_header(token))
            .json(&payload)
            .map_err(|e| ModerationError::Server(e.to_string()))?
            .send()
            .await
            .map_err(|e| ModerationError::Server(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ModerationError::Server(super::api::failure_reason(
                &body,
                &["banned_user"],
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, target);
        Err(ModerationError::Unavailable)
    }
}
