//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the `/api` proxy and the upstream
//! base URL, if one is configured.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_url: Option<Arc<str>>,
}

impl AppState {
    /// Build state from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend
    /// initialisation failure).
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, upstream_url: config.upstream_url.as_deref().map(Arc::from) })
    }
}
