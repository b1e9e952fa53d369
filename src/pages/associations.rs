//! `/associations`: association list, currently always empty.

#[cfg(test)]
#[path = "associations_test.rs"]
mod associations_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::empty_state::EmptyState;

#[component]
pub fn AssociationsPage() -> impl IntoView {
    view! {
        <Title text="Associations"/>
        <DashboardLayout title="Associations">
            <section class="page">
                <h1 class="page__title">"Associations"</h1>
                <EmptyState
                    title="No associations yet"
                    description="Associations you create or join will appear here."
                />
            </section>
        </DashboardLayout>
    }
}
