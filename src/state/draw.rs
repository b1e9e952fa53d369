//! Draw page state: the loaded draw plus load/publish progress.
//!
//! DESIGN
//! ======
//! Each load is tagged with a sequence number. When route params change
//! while a request is in flight, the older response arrives with a stale
//! sequence and is dropped, so the page never shows the wrong event's draw.
//! A publish carries the sequence of the load it was started from; once a
//! newer load begins, its result is dropped the same way.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::net::error::ApiError;
use crate::net::types::{Draw, Identifier};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPageState {
    pub draw: Option<Draw>,
    pub loading: bool,
    pub error: Option<String>,
    pub publish_pending: bool,
    pub publish_error: Option<String>,
    load_seq: u64,
}

impl DrawPageState {
    /// Start a load, clearing the previous draw. Returns the sequence number
    /// the result must be delivered with.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.draw = None;
        self.error = None;
        self.publish_pending = false;
        self.publish_error = None;
        self.load_seq
    }

    /// Apply a load result. Returns `false` when the result was stale.
    pub fn finish_load(&mut self, seq: u64, result: Result<Draw, ApiError>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(draw) => self.draw = Some(draw),
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// Route params were unusable; nothing will be requested.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load_seq += 1;
        self.loading = false;
        self.draw = None;
        self.error = Some(message.into());
        self.publish_pending = false;
        self.publish_error = None;
    }

    /// Whether the Publish action should be enabled.
    pub fn can_publish(&self) -> bool {
        !self.publish_pending && self.draw.as_ref().is_some_and(|draw| !draw.status.is_published())
    }

    /// Start publishing the loaded draw. Returns the load sequence the result
    /// must be delivered with and the draw id, or `None` when there is nothing
    /// to publish or a publish is already running.
    pub fn begin_publish(&mut self) -> Option<(u64, Identifier)> {
        if !self.can_publish() {
            return None;
        }
        let id = self.draw.as_ref().map(|draw| draw.id.clone())?;
        self.publish_pending = true;
        self.publish_error = None;
        Some((self.load_seq, id))
    }

    /// Apply a publish result; success replaces the draw with the server's copy.
    /// Returns `false` when a newer load has started since the publish began.
    pub fn finish_publish(&mut self, seq: u64, result: Result<Draw, ApiError>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.publish_pending = false;
        match result {
            Ok(draw) => self.draw = Some(draw),
            Err(err) => self.publish_error = Some(err.to_string()),
        }
        true
    }
}

/// Parse the draw route params, naming the first missing one.
pub fn parse_draw_route(
    tournament_id: Option<&str>,
    event_id: Option<&str>,
) -> Result<(Identifier, Identifier), &'static str> {
    let tournament = tournament_id.filter(|v| !v.trim().is_empty()).ok_or("Missing tournament id.")?;
    let event = event_id.filter(|v| !v.trim().is_empty()).ok_or("Missing event id.")?;
    Ok((parse_identifier(tournament), parse_identifier(event)))
}

fn parse_identifier(raw: &str) -> Identifier {
    let Ok(id) = raw.parse::<Identifier>();
    id
}
