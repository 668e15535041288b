//! One channel tile on the home directory grid.

use leptos::prelude::*;

use crate::net::types::ChannelSummary;

/// Card linking to a channel's stream page, with a live badge and optional
/// thumbnail.
#[component]
pub fn ChannelCard(channel: ChannelSummary) -> impl IntoView {
    let href = format!("/stream/{}", channel.username);
    let name = channel.display_name().to_owned();
    let thumbnail = channel.thumbnail.clone().filter(|t| !t.is_empty());

    view! {
        <a class="channel-card" href=href>
            <div class="channel-thumb">
                {match thumbnail {
                    Some(url) => view! { <img src=url alt=name.clone()/> }.into_any(),
                    None => view! { <div class="channel-thumb-placeholder"></div> }.into_any(),
                }}
                <Show when=move || channel.is_live>
                    <span class="live-badge">"LIVE"</span>
                </Show>
            </div>
            <span class="channel-name">{name}</span>
        </a>
    }
}
