//! Shared value objects used across multiple bounded contexts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse the leading base-10 integer of a path segment.
    ///
    /// Leading whitespace and a single sign are accepted and anything after the
    /// digits is ignored, so `"12abc"` and `"12.5"` both read as 12. Returns
    /// `None` when no digits lead the segment or the value does not fit.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.trim_start_matches(['+', '-']);
        let sign_len = trimmed.len() - unsigned.len();
        if sign_len > 1 {
            return None;
        }

        let digits_len = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if digits_len == 0 {
            return None;
        }

        trimmed[..sign_len + digits_len].parse::<i64>().ok().map(Self)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque identifier handed back by the call-placement provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallSid(String);

impl CallSid {
    pub fn new(sid: impl Into<String>) -> Self {
        Self(sid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
