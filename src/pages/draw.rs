//! `/draws/:tournament_id/:event_id`: view and publish one draw.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the draw through `DrawService` whenever the route params change and
//! hands its structure to `DrawStage`. Requests are not cancelled; results
//! that arrive after unmount or after a newer load are discarded.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::draw_stage::DrawStage;
use crate::net::types::{DrawStatus, Identifier};
use crate::state::draw::{DrawPageState, parse_draw_route};

#[component]
pub fn DrawPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(DrawPageState::default());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let alive_load = Arc::clone(&alive);
    Effect::new(move || {
        let (tournament_id, event_id) = params.with(|p| (p.get("tournament_id"), p.get("event_id")));
        match parse_draw_route(tournament_id.as_deref(), event_id.as_deref()) {
            Ok((tournament_id, event_id)) => {
                let mut seq = 0;
                state.update(|s| seq = s.begin_load());
                load_draw(state, seq, tournament_id, event_id, Arc::clone(&alive_load));
            }
            Err(message) => state.update(|s| s.fail_load(message)),
        }
    });

    let alive_publish = Arc::clone(&alive);
    let on_publish = move |_| {
        let mut ticket = None;
        state.update(|s| ticket = s.begin_publish());
        if let Some((seq, draw_id)) = ticket {
            publish_draw(state, seq, draw_id, Arc::clone(&alive_publish));
        }
    };

    let status = Memo::new(move |_| state.with(|s| s.draw.as_ref().map(|d| d.status)));
    let structure = Memo::new(move |_| state.with(|s| s.draw.as_ref().map(|d| d.structure.clone())));
    let load_error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <Title text="Draw"/>
        <DashboardLayout title="Draw">
            <section class="page draw-page">
                <header class="draw-page__header">
                    <h1 class="page__title">"Draw"</h1>
                    {move || {
                        status
                            .get()
                            .map(|status| {
                                view! { <span class=status_badge_class(status)>{status.label()}</span> }
                            })
                    }}
                    <span class="draw-page__spacer"></span>
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(DrawPageState::can_publish)
                        on:click=on_publish
                    >
                        {move || publish_button_label(state.with(|s| s.publish_pending))}
                    </button>
                </header>
                <Show when=move || state.with(|s| s.publish_error.is_some())>
                    <p class="draw-page__error">
                        {move || state.with(|s| s.publish_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                {move || {
                    if let Some(message) = load_error.get() {
                        return view! { <p class="draw-page__error">{message}</p> }.into_any();
                    }
                    match structure.get() {
                        Some(structure) => view! { <DrawStage structure=structure/> }.into_any(),
                        None => view! { <p class="draw-page__loading">"Loading draw..."</p> }.into_any(),
                    }
                }}
            </section>
        </DashboardLayout>
    }
}

fn status_badge_class(status: DrawStatus) -> &'static str {
    match status {
        DrawStatus::Published => "badge badge--published",
        DrawStatus::Draft => "badge badge--draft",
        DrawStatus::Unknown => "badge",
    }
}

fn publish_button_label(pending: bool) -> &'static str {
    if pending { "Publishing..." } else { "Publish" }
}

fn load_draw(
    state: RwSignal<DrawPageState>,
    seq: u64,
    tournament_id: Identifier,
    event_id: Identifier,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let service = crate::services::draws::DrawService::http();
        let result = service.fetch_draw_by_tournament_and_event(&tournament_id, &event_id).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        state.update(|s| {
            if !s.finish_load(seq, result) {
                log::debug!("dropped stale draw response #{seq}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, seq, tournament_id, event_id, alive);
    }
}

fn publish_draw(state: RwSignal<DrawPageState>, seq: u64, draw_id: Identifier, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let service = crate::services::draws::DrawService::http();
        let result = service.publish_draw(&draw_id, None).await;
        if let Err(err) = &result {
            log::warn!("publish of draw {draw_id} failed: {err}");
        }
        if alive.load(Ordering::Relaxed) {
            state.update(|s| {
                if !s.finish_publish(seq, result) {
                    log::debug!("dropped publish response for draw {draw_id}");
                }
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, seq, draw_id, alive);
    }
}
