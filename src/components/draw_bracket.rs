//! Positioned bracket rendering for the draw stage.

use leptos::prelude::*;

use crate::util::bracket_layout::{Bracket, BracketMatch, MATCH_HEIGHT, MATCH_WIDTH, layout_bracket, round_label};

/// Absolutely positioned match boxes with a round heading over each column.
#[component]
pub fn DrawBracket(bracket: Bracket) -> impl IntoView {
    let layout = layout_bracket(&bracket);
    let total = bracket.rounds.len();

    let headings = bracket
        .rounds
        .iter()
        .enumerate()
        .filter_map(|(index, round)| {
            let x = layout.slots.iter().find(|slot| slot.round == index)?.x;
            let style = format!("left: {x:.0}px; width: {MATCH_WIDTH:.0}px;");
            let label = round_label(round, index, total);
            Some(view! { <div class="draw-bracket__round" style=style>{label}</div> })
        })
        .collect_view();

    let matches = layout
        .slots
        .iter()
        .map(|slot| {
            let entry = &bracket.rounds[slot.round].matches[slot.index];
            let style =
                format!("left: {:.0}px; top: {:.0}px; width: {MATCH_WIDTH:.0}px; height: {MATCH_HEIGHT:.0}px;", slot.x, slot.y);
            view! {
                <div class="draw-bracket__match" style=style>
                    {side_row(entry, entry.home.as_deref(), entry.home_label())}
                    {side_row(entry, entry.away.as_deref(), entry.away_label())}
                </div>
            }
        })
        .collect_view();

    let frame_style = format!("width: {:.0}px; height: {:.0}px;", layout.width, layout.height);

    view! {
        <div class="draw-bracket" style=frame_style>
            {headings}
            {matches}
        </div>
    }
}

fn side_row(entry: &BracketMatch, side: Option<&str>, label: &str) -> impl IntoView + use<> {
    let class = if entry.is_winner(side) {
        "draw-bracket__side draw-bracket__side--winner"
    } else {
        "draw-bracket__side"
    };
    let label = label.to_owned();
    view! { <div class=class>{label}</div> }
}
