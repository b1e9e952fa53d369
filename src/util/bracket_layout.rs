//! Bracket view of an opaque draw structure.
//!
//! The draws API treats the structure as opaque; this module reads it on a
//! best-effort basis. A structure shaped like
//! `{"rounds": [{"name": "...", "matches": [{"home": "...", "away": "..."}]}]}`
//! becomes a column layout for the stage. Anything else yields `None` and the
//! stage falls back to showing raw JSON.
//!
//! LAYOUT
//! ======
//! Round `r` is column `r`. First-round matches stack at a fixed pitch; a
//! later match sits midway between its two feeders (`2i`, `2i + 1`) in the
//! previous round, or at the first-round pitch scaled by `2^r` when a feeder
//! is missing.

#[cfg(test)]
#[path = "bracket_layout_test.rs"]
mod bracket_layout_test;

use serde::Deserialize;

pub const MATCH_WIDTH: f64 = 180.0;
pub const MATCH_HEIGHT: f64 = 56.0;
pub const COLUMN_GAP: f64 = 48.0;
pub const ROW_GAP: f64 = 16.0;
/// Vertical space reserved above each column for the round name.
pub const HEADER_HEIGHT: f64 = 28.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Bracket {
    pub rounds: Vec<Round>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub matches: Vec<BracketMatch>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BracketMatch {
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub away: Option<String>,
    #[serde(default)]
    pub winner: Option<String>,
}

impl BracketMatch {
    pub fn home_label(&self) -> &str {
        self.home.as_deref().unwrap_or("TBD")
    }

    pub fn away_label(&self) -> &str {
        self.away.as_deref().unwrap_or("TBD")
    }

    pub fn is_winner(&self, side: Option<&str>) -> bool {
        match (self.winner.as_deref(), side) {
            (Some(winner), Some(side)) => winner == side,
            _ => false,
        }
    }
}

/// Decode a bracket from a draw structure. Empty or unrecognised structures
/// return `None`.
pub fn decode_bracket(structure: &serde_json::Value) -> Option<Bracket> {
    let bracket = Bracket::deserialize(structure).ok()?;
    if bracket.rounds.iter().all(|round| round.matches.is_empty()) {
        return None;
    }
    Some(bracket)
}

/// Display name for round `index` out of `total`.
pub fn round_label(round: &Round, index: usize, total: usize) -> String {
    if let Some(name) = round.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_owned();
    }
    match total - index {
        1 => "Final".to_owned(),
        2 => "Semifinals".to_owned(),
        3 => "Quarterfinals".to_owned(),
        _ => format!("Round {}", index + 1),
    }
}

/// Placed match box in stage coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchSlot {
    pub round: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Positioned bracket plus its overall extent.
#[derive(Clone, Debug, PartialEq)]
pub struct BracketLayout {
    pub slots: Vec<MatchSlot>,
    pub width: f64,
    pub height: f64,
}

/// Compute match positions for every round.
pub fn layout_bracket(bracket: &Bracket) -> BracketLayout {
    let pitch = MATCH_HEIGHT + ROW_GAP;
    let mut slots = Vec::new();
    let mut previous: Vec<f64> = Vec::new();
    let mut width: f64 = 0.0;
    let mut height: f64 = 0.0;

    for (round, entry) in bracket.rounds.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = round as f64 * (MATCH_WIDTH + COLUMN_GAP);
        let scale = f64::from(1_u32 << round.min(16));
        let mut current = Vec::with_capacity(entry.matches.len());

        for index in 0..entry.matches.len() {
            let feeders = (previous.get(index * 2), previous.get(index * 2 + 1));
            #[allow(clippy::cast_precision_loss)]
            let stacked = HEADER_HEIGHT + (index as f64 * pitch * scale) + (pitch * (scale - 1.0) * 0.5);
            let y = match (round, feeders) {
                (0, _) => stacked,
                (_, (Some(a), Some(b))) => (a + b) * 0.5,
                _ => stacked,
            };
            current.push(y);
            slots.push(MatchSlot { round, index, x, y });
            width = width.max(x + MATCH_WIDTH);
            height = height.max(y + MATCH_HEIGHT);
        }
        previous = current;
    }

    BracketLayout { slots, width, height }
}
