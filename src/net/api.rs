//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Failure bodies
//! carry a human-readable reason under `error` or under a field named after
//! the offending input (sometimes as an array of strings); `failure_reason`
//! extracts it with a generic fallback so no server message is lost.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{ChannelSummary, LoginResponse, Profile, StreamInfo};

/// Generic reason shown when a failure body carries no usable message.
pub const GENERIC_FAILURE: &str = "Server error";

/// Extract the human-readable reason from a failure response body.
///
/// Checks the `error` key first, then each named field, accepting either a
/// plain string or the first element of an array of strings.
pub fn failure_reason(body: &str, fields: &[&str]) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_FAILURE.to_owned();
    };

    let mut keys = vec!["error"];
    keys.extend_from_slice(fields);
    for key in keys {
        let Some(entry) = value.get(key) else {
            continue;
        };
        if let Some(reason) = entry.as_str() {
            return reason.to_owned();
        }
        if let Some(reason) = entry
            .as_array()
            .and_then(|items| items.first())
            .and_then(|item| item.as_str())
        {
            return reason.to_owned();
        }
    }
    GENERIC_FAILURE.to_owned()
}

/// Authorization header value for token-authenticated endpoints.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

/// Exchange credentials for a session token via `POST /login/`.
///
/// # Errors
///
/// Returns the server-provided reason when the credentials are rejected, or
/// a transport error string.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/login/")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_reason(&body, &["username", "password"]));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /signup/`. Does not log the user in.
///
/// # Errors
///
/// Returns the server-provided reason (e.g. username taken).
pub async fn signup(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/signup/")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_reason(&body, &["username", "password"]));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the session server-side via `POST /logout/`. Best-effort:
/// the local session is cleared regardless of the outcome.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/logout/")
            .header("Authorization", &auth_header(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch the authenticated user's profile from `GET /profile/`.
/// Returns `None` when the token is rejected or on the server.
pub async fn fetch_profile(token: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/profile/")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Update the display nickname via `PUT /profile/`.
///
/// # Errors
///
/// Returns the server-provided reason (field-level validation included).
pub async fn update_nickname(token: &str, nickname: &str) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "nickname": nickname });
        let resp = gloo_net::http::Request::put("/profile/")
            .header("Authorization", &auth_header(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_reason(&body, &["nickname"]));
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, nickname);
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `POST /password/change/`.
///
/// # Errors
///
/// Returns the server-provided reason, checking the password fields for
/// field-level validation messages.
pub async fn change_password(token: &str, old_password: &str, new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "old_password": old_password, "new_password": new_password });
        let resp = gloo_net::http::Request::post("/password/change/")
            .header("Authorization", &auth_header(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_reason(&body, &["old_password", "new_password"]));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, old_password, new_password);
        Err("not available on server".to_owned())
    }
}

/// Fetch all channels from `GET /users/`.
///
/// # Errors
///
/// Returns a transport or status error string.
pub async fn fetch_channels() -> Result<Vec<ChannelSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/users/")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("channel list failed: {}", resp.status()));
        }
        resp.json::<Vec<ChannelSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch read-only stream metadata from `GET /stream/{channelId}/`.
///
/// # Errors
///
/// Returns an error string when the channel does not exist or the request
/// fails.
pub async fn fetch_stream_info(channel_id: &str) -> Result<StreamInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/stream/{channel_id}/");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("stream info failed: {}", resp.status()));
        }
        resp.json::<StreamInfo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = channel_id;
        Err("not available on server".to_owned())
    }
}
