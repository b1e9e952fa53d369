//! Top bar of the dashboard inset.

use leptos::prelude::*;

#[component]
pub fn SiteHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <span class="site-header__title">{title}</span>
        </header>
    }
}
