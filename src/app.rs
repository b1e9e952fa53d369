//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{associations::AssociationsPage, draw::DrawPage, player_rankings::PlayerRankingsPage};

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/draw-dashboard.css"/>
        <Title text="Draw Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/associations"/> }/>
                <Route path=StaticSegment("associations") view=AssociationsPage/>
                <Route path=StaticSegment("player-rankings") view=PlayerRankingsPage/>
                <Route
                    path=(StaticSegment("draws"), ParamSegment("tournament_id"), ParamSegment("event_id"))
                    view=DrawPage
                />
            </Routes>
        </Router>
    }
}
