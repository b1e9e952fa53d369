//! Draw data service: fetch a draw and publish it.
//!
//! Both operations issue exactly one request and return the decoded body.
//! Client errors are propagated as-is; callers decide how to present them.

#[cfg(test)]
#[path = "draws_test.rs"]
mod draws_test;

use crate::net::api::{ApiClient, HttpClient};
use crate::net::endpoints;
use crate::net::error::ApiError;
use crate::net::types::{Draw, Identifier, PublishPayload};

/// Reads and publishes draws through an [`ApiClient`].
#[derive(Clone, Debug)]
pub struct DrawService<C> {
    client: C,
}

impl DrawService<HttpClient> {
    /// Service backed by the browser HTTP client.
    pub fn http() -> Self {
        Self::new(HttpClient::from_build_env())
    }
}

impl<C: ApiClient> DrawService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch the draw for a tournament event.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged if the request fails.
    pub async fn fetch_draw_by_tournament_and_event(
        &self,
        tournament_id: &Identifier,
        event_id: &Identifier,
    ) -> Result<Draw, ApiError> {
        let path = endpoints::draws::by_tournament_and_event(tournament_id, event_id);
        self.client.get(&path).await
    }

    /// Publish a draw, sending `payload` or `{}` when absent.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged if the request fails.
    pub async fn publish_draw(&self, draw_id: &Identifier, payload: Option<&PublishPayload>) -> Result<Draw, ApiError> {
        let path = endpoints::draws::publish(draw_id);
        match payload {
            Some(payload) => self.client.post(&path, payload).await,
            None => self.client.post(&path, &PublishPayload::default()).await,
        }
    }
}
