//! Navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sidebar entries, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Associations", href: "/associations" },
    NavItem { label: "Player Rankings", href: "/player-rankings" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="dashboard-sidebar">
            <div class="dashboard-sidebar__brand">"Draw Desk"</div>
            <nav class="dashboard-sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a class="dashboard-sidebar__link" href=item.href>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
