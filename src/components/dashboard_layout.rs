//! Page shell: sidebar on the left, header over a scrollable main region.
//!
//! Pure composition. Children are rendered verbatim inside `<main>`.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::site_header::SiteHeader;

/// Full-height, full-width dashboard frame.
#[component]
pub fn DashboardLayout(
    /// Title shown in the header bar.
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <div class="dashboard-layout__inset">
                <SiteHeader title=title.unwrap_or_else(|| "Dashboard".to_owned())/>
                <main class="dashboard-layout__main">{children()}</main>
            </div>
        </div>
    }
}
