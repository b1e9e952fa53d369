//! REST client wrapper.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! the draws API is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls are single-shot: no retry, no caching. Failures are logged to the
//! browser console and returned to the caller untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;

/// Generic GET/POST surface the services are written against.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// `GET path` and decode the body as `T`.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// `POST path` with a JSON `body` and decode the response as `T`.
    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError>;
}

impl<C: ApiClient> ApiClient for &C {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        (**self).get(path).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        (**self).post(path, body).await
    }
}

/// HTTP implementation of [`ApiClient`].
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client pointed at the build-time configured base path.
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::from_build_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        status_text.trim().to_owned()
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(method: &str, url: &str, resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let err = ApiError::status(resp.status(), status_message(resp.status(), &resp.status_text()));
        log::warn!("{method} {url} failed: {err}");
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| {
        let err = network_error(e);
        log::warn!("{method} {url} body rejected: {err}");
        err
    })
}

impl ApiClient for HttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(path);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| {
                let err = network_error(e);
                log::warn!("GET {url} failed: {err}");
                err
            })?;
            decode_response("GET", &url, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(path);
            log::debug!("POST {url}");
            let request = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            let resp = request.send().await.map_err(|e| {
                let err = network_error(e);
                log::warn!("POST {url} failed: {err}");
                err
            })?;
            decode_response("POST", &url, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}
