//! WebSocket channel connection for a single stream's live chat.
//!
//! One `ChannelHandle` represents one duplex connection bound to a
//! `(channel, token)` pair. The stream page owns the handle exclusively:
//! it opens a connection when the pair becomes known, replaces it when
//! either value changes, and closes it on teardown. There is no automatic
//! reconnect; re-establishing is always a fresh `open_channel` call.
//!
//! All socket I/O is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. Frame classification and the send
//! preconditions are pure functions so the protocol rules are testable on
//! the host.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures close the connection (`Closed` state, terminal).
//! `{error}` frames are application-level rejections: they surface through
//! the `chat_error` signal and never enter the transcript. Frames matching
//! neither wire shape are logged and ignored.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{GetUntracked, RwSignal, Set};
use thiserror::Error;

use crate::net::types::ChatFrame;
use crate::state::chat::{ChatMessage, ChatTranscript};

/// Connection lifecycle: `Connecting → Open → Closed`. Protocol-level
/// rejections are not a state; the connection stays `Open` through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelState {
    #[default]
    Closed,
    Connecting,
    Open,
}

/// Identity of one logical connection. Two handles with equal keys refer to
/// the same `(channel, token)` pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelKey {
    channel_id: String,
    token: Option<String>,
}

impl ChannelKey {
    /// Build a key for `channel_id` with an optional credential. An empty
    /// token string means the same thing as no token: a read-only
    /// connection.
    pub fn new(channel_id: impl Into<String>, token: Option<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Typed inbound event decoded from one wire frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelEvent {
    /// A chat message to append to the transcript.
    Message(ChatMessage),
    /// An application-level rejection (e.g. sending while banned). The
    /// connection stays open.
    Error(String),
}

/// Why a `send` was refused locally, before any frame was transmitted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChatSendError {
    #[error("chat connection is not open")]
    NotOpen,
    #[error("message is empty")]
    EmptyMessage,
    #[error("log in to send chat messages")]
    ReadOnly,
}

/// What to do when the stream view observes a `(channel, token)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectPlan {
    /// A live connection with the same key already exists; never open a
    /// second one.
    KeepExisting,
    /// Close the previous connection (if any) and open a fresh one.
    Replace,
}

/// Decide whether a new connection is needed for `next`.
///
/// Construction is idempotent per identity: an unchanged key with a live
/// connection keeps it. A changed channel or token, or a connection that
/// has already closed, requires a replacement.
pub fn plan_connection(current: Option<(&ChannelKey, ChannelState)>, next: &ChannelKey) -> ConnectPlan {
    match current {
        Some((key, state)) if key == next && state != ChannelState::Closed => {
            ConnectPlan::KeepExisting
        }
        _ => ConnectPlan::Replace,
    }
}

/// Build the chat socket URL. The `token` query parameter is always
/// present, empty when unauthenticated (the connection still opens, in
/// read-only capability).
pub fn chat_socket_url(secure: bool, host: &str, key: &ChannelKey) -> String {
    let proto = if secure { "wss" } else { "ws" };
    let channel = key.channel_id();
    let token = key.token().unwrap_or("");
    format!("{proto}://{host}/ws/chat/{channel}/?token={token}")
}

/// Decode one inbound frame into a typed event.
///
/// Returns `None` for a frame matching neither wire shape: a protocol
/// violation the caller logs and ignores without closing the connection.
pub fn classify_frame(text: &str) -> Option<ChannelEvent> {
    let frame: ChatFrame = serde_json::from_str(text).ok()?;
    if let Some(reason) = frame.error {
        return Some(ChannelEvent::Error(reason));
    }
    match (frame.username, frame.message) {
        (Some(username), Some(message)) => Some(ChannelEvent::Message(ChatMessage {
            username,
            display_name: frame.display_name,
            text: message,
        })),
        _ => None,
    }
}

/// Check the send preconditions and serialize the outbound frame.
///
/// Requires an open connection, a non-blank body, and a token: read-only
/// connections refuse to send locally even if a caller forgets to gate the
/// send control on identity.
pub fn outbound_payload(
    state: ChannelState,
    token: Option<&str>,
    text: &str,
) -> Result<String, ChatSendError> {
    if state != ChannelState::Open {
        return Err(ChatSendError::NotOpen);
    }
    if text.trim().is_empty() {
        return Err(ChatSendError::EmptyMessage);
    }
    if token.is_none_or(str::is_empty) {
        return Err(ChatSendError::ReadOnly);
    }
    Ok(serde_json::json!({ "message": text }).to_string())
}

/// Owned handle to one live channel connection.
///
/// Cloning shares the same underlying connection; `close` is idempotent and
/// invalidates every clone at once, so frames still in flight when the view
/// tears down are dropped instead of reaching a transcript that may already
/// belong to a different channel.
#[derive(Clone)]
pub struct ChannelHandle {
    key: ChannelKey,
    status: RwSignal<ChannelState>,
    cancelled: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

impl ChannelHandle {
    pub fn key(&self) -> &ChannelKey {
        &self.key
    }

    pub fn state(&self) -> ChannelState {
        self.status.get_untracked()
    }

    /// Transmit `{"message": text}` fire-and-forget. Acceptance or
    /// rejection arrives later as an inbound event; there is no delivery
    /// guarantee.
    ///
    /// # Errors
    ///
    /// Refuses locally when the connection is not open, the body is blank,
    /// or the connection is read-only.
    pub fn send(&self, text: &str) -> Result<(), ChatSendError> {
        let payload = outbound_payload(self.state(), self.key.token(), text)?;
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .unbounded_send(payload)
                .map_err(|_| ChatSendError::NotOpen)?;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
        Ok(())
    }

    /// Release the connection. Idempotent and always safe to call. Inbound
    /// frames arriving after this point are discarded.
    pub fn close(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        self.status.set(ChannelState::Closed);
        #[cfg(feature = "hydrate")]
        self.tx.close_channel();
    }
}

/// Open a connection for `key`, feeding decoded events into `transcript`
/// and `chat_error` and reflecting the lifecycle in `status`.
///
/// Without a browser (no `hydrate`) the handle is created already closed.
pub fn open_channel(
    key: ChannelKey,
    transcript: RwSignal<ChatTranscript>,
    status: RwSignal<ChannelState>,
    chat_error: RwSignal<Option<String>>,
) -> ChannelHandle {
    let cancelled = Arc::new(AtomicBool::new(false));

    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
        status.set(ChannelState::Connecting);
        let url = browser_socket_url(&key);
        leptos::task::spawn_local(run_channel(
            url,
            rx,
            transcript,
            status,
            chat_error,
            Arc::clone(&cancelled),
        ));
        ChannelHandle { key, status, cancelled, tx }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (transcript, chat_error);
        status.set(ChannelState::Closed);
        ChannelHandle { key, status, cancelled }
    }
}

/// Derive the socket URL from the page location (https → wss).
#[cfg(feature = "hydrate")]
fn browser_socket_url(key: &ChannelKey) -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8000".to_owned());
    chat_socket_url(location.starts_with("https"), &host, key)
}

/// Run the duplex loop until the transport ends or the handle is closed.
#[cfg(feature = "hydrate")]
async fn run_channel(
    url: String,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
    transcript: RwSignal<ChatTranscript>,
    status: RwSignal<ChannelState>,
    chat_error: RwSignal<Option<String>>,
    cancelled: Arc<AtomicBool>,
) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("chat socket open failed: {e}");
            if !cancelled.load(Ordering::SeqCst) {
                status.set(ChannelState::Closed);
            }
            return;
        }
    };

    if cancelled.load(Ordering::SeqCst) {
        return;
    }
    status.set(ChannelState::Open);

    let (mut ws_write, mut ws_read) = ws.split();
    let mut rx = rx;

    // Forward queued outbound payloads to the socket.
    let send_task = async {
        while let Some(payload) = rx.next().await {
            if ws_write.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    };

    // Decode inbound frames, dropping anything that arrives after close.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            if cancelled.load(Ordering::SeqCst) {
                break;
            }
            match msg {
                Ok(Message::Text(text)) => dispatch_inbound(&text, transcript, chat_error),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    if !cancelled.load(Ordering::SeqCst) {
        status.set(ChannelState::Closed);
    }
}

#[cfg(feature = "hydrate")]
fn dispatch_inbound(
    text: &str,
    transcript: RwSignal<ChatTranscript>,
    chat_error: RwSignal<Option<String>>,
) {
    use leptos::prelude::Update;

    match classify_frame(text) {
        Some(ChannelEvent::Message(msg)) => transcript.update(|t| t.append(msg)),
        Some(ChannelEvent::Error(reason)) => chat_error.set(Some(reason)),
        None => leptos::logging::warn!("ignoring malformed chat frame: {text}"),
    }
}
