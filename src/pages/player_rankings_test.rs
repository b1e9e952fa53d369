#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;
use leptos_meta::provide_meta_context;

use super::*;

fn render_page() -> String {
    Owner::new().with(|| {
        provide_meta_context();
        view! { <PlayerRankingsPage/> }.to_html()
    })
}

#[test]
fn renders_heading_and_lead() {
    let html = render_page();

    assert!(html.contains("page__title"));
    assert!(html.contains("Player Rankings</h1>"));
    assert!(html.contains("Rankings are calculated from published draw results."));
}
