//! Wire DTOs for the draws API.
//!
//! DESIGN
//! ======
//! The draw structure stays an opaque `serde_json::Value`; only the bracket
//! view interprets it, and only on a best-effort basis. Field names accept
//! both camelCase (what the backend sends) and snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque backend key. Numeric ids stay numbers on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Route parameters: canonical integers become `Number`, anything else is
/// kept verbatim as `Text` so `"007"` or `"+5"` still name the same key.
impl FromStr for Identifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if is_canonical_integer(s) {
            s.parse::<i64>().map_or_else(|_| Self::Text(s.to_owned()), Self::Number)
        } else {
            Self::Text(s.to_owned())
        })
    }
}

/// `0`, or an optional `-` followed by digits without a leading zero.
fn is_canonical_integer(s: &str) -> bool {
    if s == "0" {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.bytes().next().is_some_and(|b| (b'1'..=b'9').contains(&b)) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Publication state of a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStatus {
    #[default]
    Draft,
    Published,
    #[serde(other)]
    Unknown,
}

impl DrawStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Bracket/schedule for one (tournament, event) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    pub id: Identifier,
    #[serde(alias = "tournament_id")]
    pub tournament_id: Identifier,
    #[serde(alias = "event_id")]
    pub event_id: Identifier,
    /// Bracket/schedule payload, opaque to the client.
    #[serde(default)]
    pub structure: serde_json::Value,
    #[serde(default)]
    pub status: DrawStatus,
}

/// Publish-time options. Serializes as a bare JSON object; the empty payload
/// is `{}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishPayload(pub serde_json::Map<String, serde_json::Value>);

impl PublishPayload {
    /// Builder-style insert of one option.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
