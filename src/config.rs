//! Client-side API configuration.
//!
//! The base path is baked in at build time so the WASM bundle and the SSR
//! render agree on where the draws API lives. Set `DRAWS_API_BASE` when
//! building to point at something other than the same-origin `/api` proxy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base path used when `DRAWS_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where REST calls are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base. Trailing slashes are dropped so
    /// endpoint paths (which start with `/`) join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Config from the `DRAWS_API_BASE` build-time variable, or `/api`.
    pub fn from_build_env() -> Self {
        Self::new(resolve_base(option_env!("DRAWS_API_BASE")))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute request URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn resolve_base(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE,
    }
}
