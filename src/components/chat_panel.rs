//! Live chat panel: transcript view, send box, and owner ban controls.
//!
//! The panel renders whatever the shared transcript holds; connection
//! ownership stays with the stream page. Send is only offered to
//! authenticated viewers, and the handle re-checks the preconditions
//! locally on every send anyway.

use leptos::prelude::*;

use crate::net::channel::{ChannelHandle, ChannelState, ChatSendError};
use crate::pages::stream::can_ban_author;
use crate::state::auth::SessionState;
use crate::state::chat::ChatTranscript;
use crate::state::roster::RosterState;

#[component]
pub fn ChatPanel(
    channel_id: Signal<String>,
    handle: RwSignal<Option<ChannelHandle>>,
    status: RwSignal<ChannelState>,
    chat_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let transcript = expect_context::<RwSignal<ChatTranscript>>();
    let roster = expect_context::<RwSignal<RosterState>>();

    let draft = RwSignal::new(String::new());

    let send = move || {
        let Some(h) = handle.get_untracked() else {
            // No connection has been constructed yet; same failure as a
            // closed one.
            chat_error.set(Some(ChatSendError::NotOpen.to_string()));
            return;
        };
        match h.send(&draft.get_untracked()) {
            Ok(()) => {
                draft.set(String::new());
                chat_error.set(None);
            }
            Err(e) => chat_error.set(Some(e.to_string())),
        }
    };

    let ban = move |target: String| {
        let state = session.get_untracked();
        let channel = channel_id.get_untracked();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::moderation::ban_user(
                state.user,
                state.token,
                &channel,
                &target,
                transcript,
                roster,
            )
            .await
            {
                chat_error.set(Some(e.to_string()));
            }
        });
    };

    let status_label = move || match status.get() {
        ChannelState::Connecting => "Connecting...",
        ChannelState::Open => "Live",
        ChannelState::Closed => "Disconnected",
    };

    view! {
        <div class="chat-panel">
            <div class="chat-header">
                <span>"Chat"</span>
                <span class="chat-status">{status_label}</span>
            </div>
            <ul class="chat-messages">
                <For
                    each=move || transcript.get().messages.into_iter().enumerate()
                    // Keyed on content as well as position so a purge that
                    // shifts rows re-renders them instead of reusing views.
                    key=|(i, msg)| (*i, msg.username.clone(), msg.text.clone())
                    children=move |(_, msg)| {
                        let author = msg.username.clone();
                        let label = msg.display_name().to_owned();
                        let bannable = move || {
                            can_ban_author(&channel_id.get(), session.get().username(), &author)
                        };
                        let target = msg.username.clone();
                        view! {
                            <li class="chat-message">
                                <Show
                                    when=bannable
                                    fallback={
                                        let label = label.clone();
                                        move || view! { <span class="chat-author">{label.clone()}</span> }
                                    }
                                >
                                    {
                                        let label = label.clone();
                                        let target = target.clone();
                                        view! {
                                            <button
                                                class="chat-author chat-author-bannable"
                                                title="Ban this user"
                                                on:click=move |_| ban(target.clone())
                                            >
                                                {label.clone()}
                                            </button>
                                        }
                                    }
                                </Show>
                                <span class="chat-text">{msg.text.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || chat_error.get().is_some()>
                <p class="chat-error">{move || chat_error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <p class="chat-login-hint">
                            <a href="/login">"Log in"</a>
                            " to join the conversation."
                        </p>
                    }
                }
            >
                <form
                    class="chat-send"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <input
                        type="text"
                        placeholder="Say something..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || status.get() != ChannelState::Open>
                        "Send"
                    </button>
                </form>
            </Show>
        </div>
    }
}
