//! Home page listing all channels, live streams first.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::channel_card::ChannelCard;
use crate::net::types::ChannelSummary;

/// Order channels so live streams appear before offline ones, keeping the
/// server's relative order within each group.
pub fn sort_live_first(channels: &mut [ChannelSummary]) {
    channels.sort_by_key(|c| !c.is_live);
}

/// Home page: the channel directory.
#[component]
pub fn HomePage() -> impl IntoView {
    let channels = LocalResource::new(|| async {
        crate::net::api::fetch_channels().await.map(|mut list| {
            sort_live_first(&mut list);
            list
        })
    });

    view! {
        <div class="home-page">
            <h1>"Channels"</h1>
            <Suspense fallback=move || view! { <p>"Loading channels..."</p> }>
                {move || {
                    channels
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No users have signed up yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="channel-grid">
                                        {list
                                            .into_iter()
                                            .map(|channel| view! { <ChannelCard channel=channel/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{format!("Error: {e}")}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
