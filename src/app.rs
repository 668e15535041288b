//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
    NavigateOptions,
};

use crate::pages::{
    home::HomePage, login::LoginPage, settings::SettingsPage, signup::SignupPage,
    stream::StreamPage,
};
use crate::state::{auth::SessionState, chat::ChatTranscript, roster::RosterState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, kicks off the session bootstrap, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. The session
    // starts in its loading phase until the bootstrap resolves the persisted
    // token.
    let session = RwSignal::new(SessionState::bootstrapping());
    let transcript = RwSignal::new(ChatTranscript::default());
    let roster = RwSignal::new(RosterState::default());

    provide_context(session);
    provide_context(transcript);
    provide_context(roster);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::session::bootstrap(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/tidecast.css"/>
        <Title text="Tidecast"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route
                        path=(StaticSegment("stream"), ParamSegment("username"))
                        view=StreamPage
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Top navigation: directory link plus session-dependent entries.
#[component]
fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::session::logout(session).await;
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href="/">
                "Tidecast"
            </a>
            <div class="nav-links">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <a href="/login">"Log In"</a>
                            <a href="/signup">"Sign Up"</a>
                        }
                    }
                >
                    <span class="nav-welcome">
                        {move || {
                            session
                                .get()
                                .user
                                .map(|u| format!("Welcome, {}", u.display_name()))
                                .unwrap_or_default()
                        }}
                    </span>
                    <a href=move || {
                        format!("/stream/{}", session.get().username().unwrap_or_default())
                    }>"My Stream"</a>
                    <a href="/settings">"Settings"</a>
                    <button class="nav-logout" on:click=logout.clone()>
                        "Log Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
