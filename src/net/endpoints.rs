//! REST path table.
//!
//! Paths are relative to `ApiConfig::base_url`. Identifiers are opaque keys
//! handed out by the backend, so each one is escaped into a single segment.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Draw endpoints.
pub mod draws {
    use crate::net::types::Identifier;

    fn segment(id: &Identifier) -> String {
        urlencoding::encode(&id.to_string()).into_owned()
    }

    /// `GET` a draw by its tournament and event.
    pub fn by_tournament_and_event(tournament_id: &Identifier, event_id: &Identifier) -> String {
        format!("/draws/tournament/{}/event/{}", segment(tournament_id), segment(event_id))
    }

    /// `POST` to publish a draw.
    pub fn publish(draw_id: &Identifier) -> String {
        format!("/draws/{}/publish", segment(draw_id))
    }
}
