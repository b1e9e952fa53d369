//! `/player-rankings`: static rankings landing page.

#[cfg(test)]
#[path = "player_rankings_test.rs"]
mod player_rankings_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::dashboard_layout::DashboardLayout;

#[component]
pub fn PlayerRankingsPage() -> impl IntoView {
    view! {
        <Title text="Player Rankings"/>
        <DashboardLayout title="Player Rankings">
            <section class="page">
                <h1 class="page__title">"Player Rankings"</h1>
                <p class="page__lead">"Rankings are calculated from published draw results."</p>
            </section>
        </DashboardLayout>
    }
}
