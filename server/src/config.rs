//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded first (via `dotenvy`) so local runs can keep settings in
//! a file; real environment variables win over it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the draws backend. `None` disables the `/api` proxy.
    pub upstream_url: Option<String>,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DRAWS_UPSTREAM_URL`: proxy target for `/api/*`
    /// - `DRAWS_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let upstream_url = parse_upstream(get("DRAWS_UPSTREAM_URL"))?;
        let timeout_secs = parse_or("DRAWS_PROXY_TIMEOUT_SECS", get("DRAWS_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        Ok(Self { port, upstream_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

fn parse_upstream(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var: "DRAWS_UPSTREAM_URL", value });
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
