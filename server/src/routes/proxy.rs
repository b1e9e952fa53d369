//! Same-origin pass-through for the draws API.
//!
//! The browser client calls `/api/...`; this forwards the request verbatim
//! to `DRAWS_UPSTREAM_URL` and relays status, content type and body. One
//! attempt per request, bounded by the client timeout. The path is taken from
//! the raw request URI so percent-escaped identifiers reach upstream intact.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Join the upstream base, the captured path, and the raw query string.
fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

const API_PREFIX: &str = "/api/";

/// Portion of a still-escaped request path below the `/api` mount.
fn api_subpath(raw_path: &str) -> &str {
    raw_path.strip_prefix(API_PREFIX).unwrap_or(raw_path)
}

fn failure_status(timed_out: bool) -> StatusCode {
    if timed_out { StatusCode::GATEWAY_TIMEOUT } else { StatusCode::BAD_GATEWAY }
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream_url.as_deref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "draws upstream not configured").into_response();
    };
    let url = upstream_url(upstream, api_subpath(uri.path()), uri.query());

    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in [CONTENT_TYPE, ACCEPT, AUTHORIZATION] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream_resp = match request.send().await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %url, error = %err, "upstream request failed");
            return failure_status(err.is_timeout()).into_response();
        }
    };

    let status = upstream_resp.status();
    let content_type = upstream_resp.headers().get(CONTENT_TYPE).cloned();
    match upstream_resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, %status, "proxied");
            let mut response = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            response
        }
        Err(err) => {
            tracing::warn!(%method, %url, error = %err, "upstream body read failed");
            failure_status(err.is_timeout()).into_response()
        }
    }
}
