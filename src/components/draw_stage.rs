//! Pannable stage that displays a draw.
//!
//! ARCHITECTURE
//! ============
//! The stage owns the pan offset. `use_stage_size` tracks the container box
//! and `use_stage_controls` handles cursor feedback and commits the offset
//! when a drag ends. While dragging, a separate live offset drives the
//! transform so the committed position only changes once per gesture.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::draw_bracket::DrawBracket;
use crate::stage::pan::centered_position;
#[cfg(feature = "hydrate")]
use crate::stage::dom::DomDragTarget;
use crate::stage::{PanGesture, StagePosition, use_stage_controls, use_stage_size};
use crate::util::bracket_layout::{decode_bracket, layout_bracket};

/// Drag-to-pan surface for a draw structure.
///
/// Bracket-shaped structures are laid out as rounds; anything else is shown
/// as pretty-printed JSON.
#[component]
pub fn DrawStage(structure: serde_json::Value) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let size = use_stage_size(container);
    let (position, set_position) = signal(StagePosition::default());
    let live = RwSignal::new(None::<StagePosition>);
    let gesture = StoredValue::new(None::<PanGesture>);
    let controls = use_stage_controls(move |next: StagePosition| set_position.set(next));

    let bracket = decode_bracket(&structure);
    let content_size = bracket.as_ref().map(|b| {
        let layout = layout_bracket(b);
        (layout.width, layout.height)
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if ev.button() != 0 {
                return;
            }
            let Some(stage) = container.get_untracked() else {
                return;
            };
            if let Err(err) = stage.set_pointer_capture(ev.pointer_id()) {
                log::debug!("stage pointer capture not set: {err:?}");
            }
            let origin = position.get_untracked();
            gesture.set_value(Some(PanGesture::begin(
                ev.pointer_id(),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                origin,
            )));
            live.set(Some(origin));
            controls.on_drag_start(&DomDragTarget::new(&stage, origin));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(active) = gesture.get_value() else {
                return;
            };
            if active.tracks(ev.pointer_id()) {
                live.set(Some(active.offset_at(f64::from(ev.client_x()), f64::from(ev.client_y()))));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let end_drag = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(active) = gesture.get_value() else {
                return;
            };
            if !active.tracks(ev.pointer_id()) {
                return;
            }
            gesture.set_value(None);
            let reached = active.offset_at(f64::from(ev.client_x()), f64::from(ev.client_y()));
            live.set(None);
            match container.get_untracked() {
                Some(stage) => {
                    if let Err(err) = stage.release_pointer_capture(ev.pointer_id()) {
                        log::debug!("stage pointer capture not released: {err:?}");
                    }
                    controls.on_drag_end(&DomDragTarget::new(&stage, reached));
                }
                None => set_position.set(reached),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        controls.on_touch_move(&ev);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    #[cfg(not(feature = "hydrate"))]
    let _ = (controls, gesture);

    let on_reset = move |_| {
        let next = content_size.map_or_else(StagePosition::default, |(width, height)| {
            centered_position(size.get_untracked(), width, height)
        });
        set_position.set(next);
    };

    let layer_style = move || format!("transform: {};", live.get().unwrap_or_else(|| position.get()).css_translate());
    let readout = move || {
        let s = size.get();
        let p = position.get();
        format!("{:.0} × {:.0} · {:.0}, {:.0}", s.width, s.height, p.x, p.y)
    };

    let content = match bracket {
        Some(bracket) => view! { <DrawBracket bracket=bracket/> }.into_any(),
        None => {
            let raw = serde_json::to_string_pretty(&structure).unwrap_or_else(|_| structure.to_string());
            view! { <pre class="draw-stage__raw">{raw}</pre> }.into_any()
        }
    };

    view! {
        <div
            class="draw-stage"
            node_ref=container
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_drag
            on:pointercancel=end_drag
            on:touchmove=on_touch_move
        >
            <div class="draw-stage__layer" style=layer_style>
                {content}
            </div>
            <div class="draw-stage__hud" on:pointerdown=|ev: leptos::ev::PointerEvent| ev.stop_propagation()>
                <span class="draw-stage__readout">{readout}</span>
                <button class="btn" on:click=on_reset>
                    "Reset view"
                </button>
            </div>
        </div>
    }
}
