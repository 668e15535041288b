//! Stream page: video embed plus the live chat channel.
//!
//! CONNECTION LIFECYCLE
//! ====================
//! This page exclusively owns the channel connection. One effect observes
//! the `(channel, token)` pair and applies `plan_connection`: an unchanged
//! pair with a live connection is kept, anything else closes the old handle
//! and opens a fresh one. Teardown closes the handle so late frames are
//! dropped rather than appended to another channel's transcript.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_panel::ChatPanel;
use crate::net::channel::{ChannelHandle, ChannelKey, ChannelState, ConnectPlan, open_channel, plan_connection};
use crate::net::types::StreamInfo;
use crate::state::auth::SessionState;
use crate::state::chat::ChatTranscript;

/// Embed URL for a real provisioned stream.
pub fn stream_embed_url(stream_uid: &str) -> String {
    format!("https://iframe.cloudflarestream.com/{stream_uid}")
}

/// Player embed source for a channel. Any real (non-placeholder) stream uid
/// gets the player, live or not; the player renders its own offline state.
pub fn player_embed(info: &StreamInfo) -> Option<String> {
    info.stream_uid
        .as_deref()
        .filter(|_| info.has_real_stream())
        .map(stream_embed_url)
}

/// Whether `viewer` may ban `author` from the `owner`'s chat: only the
/// channel owner bans, and never themself.
pub fn can_ban_author(owner: &str, viewer: Option<&str>, author: &str) -> bool {
    viewer == Some(owner) && author != owner
}

/// One stream's watch page.
#[component]
pub fn StreamPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let transcript = expect_context::<RwSignal<ChatTranscript>>();
    let params = use_params_map();
    let channel_id = Signal::derive(move || params.read().get("username").unwrap_or_default());

    let info = LocalResource::new(move || {
        let channel = channel_id.get();
        async move { crate::net::api::fetch_stream_info(&channel).await }
    });

    let handle = RwSignal::new(Option::<ChannelHandle>::None);
    let status = RwSignal::new(ChannelState::default());
    let chat_error = RwSignal::new(Option::<String>::None);

    Effect::new(move || {
        let channel = channel_id.get();
        let state = session.get();
        // Wait for session bootstrap so an authenticated visit never opens a
        // throwaway read-only connection first.
        if channel.is_empty() || state.loading {
            return;
        }
        let key = ChannelKey::new(channel.clone(), state.token);

        let current = handle.get_untracked();
        let plan = plan_connection(current.as_ref().map(|h| (h.key(), h.state())), &key);
        if plan == ConnectPlan::KeepExisting {
            return;
        }
        if let Some(old) = current {
            old.close();
        }
        transcript.update(|t| t.ensure_channel(&channel));
        chat_error.set(None);
        handle.set(Some(open_channel(key, transcript, status, chat_error)));
    });

    on_cleanup(move || {
        if let Some(h) = handle.get_untracked() {
            h.close();
        }
    });

    view! {
        <div class="stream-page">
            <div class="stream-video">
                <Suspense fallback=move || view! { <p>"Loading stream..."</p> }>
                    {move || {
                        info.get()
                            .map(|result| match result {
                                Ok(info) => {
                                    let title = info
                                        .nickname
                                        .clone()
                                        .filter(|n| !n.is_empty())
                                        .unwrap_or_else(|| channel_id.get());
                                    let embed = player_embed(&info);
                                    view! {
                                        <h1>{title}</h1>
                                        {match embed {
                                            Some(url) => {
                                                view! {
                                                    <iframe
                                                        src=url
                                                        allow="autoplay; fullscreen"
                                                        allowfullscreen=true
                                                    ></iframe>
                                                }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <div class="stream-offline">
                                                        <p>"This channel has not set up a stream yet."</p>
                                                    </div>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! { <p class="page-error">{format!("Error: {e}")}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
            <ChatPanel channel_id=channel_id handle=handle status=status chat_error=chat_error/>
        </div>
    }
}
