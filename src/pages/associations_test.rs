#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;
use leptos_meta::provide_meta_context;

use super::*;

fn render_page() -> String {
    Owner::new().with(|| {
        provide_meta_context();
        view! { <AssociationsPage/> }.to_html()
    })
}

#[test]
fn renders_empty_state_with_title_and_description() {
    let html = render_page();

    assert!(html.contains("empty-state__title"));
    assert!(html.contains("No associations yet"));
    assert!(html.contains("empty-state__description"));
    assert!(html.contains("Associations you create or join will appear here."));
}

#[test]
fn renders_inside_dashboard_layout() {
    let html = render_page();

    let main_open = html.find("<main").unwrap();
    let empty = html.find("empty-state").unwrap();
    assert!(main_open < empty);
    assert!(html.contains("dashboard-sidebar"));
}
