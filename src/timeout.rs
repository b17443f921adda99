//! Three-state timeout settings
//!
//! Operators can leave a timeout unset, disable it outright, or pick a
//! value. The three states stay distinct all the way to the wire boundary:
//! collapsing "no opinion" into "explicitly disabled" would change observable
//! proxy behavior.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// A timeout setting as expressed by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutPolicy {
    /// No opinion; the proxy applies its own default.
    #[default]
    UseDefault,
    /// Explicitly no timeout.
    Disabled,
    /// An explicit timeout value.
    Duration(Duration),
}

impl TimeoutPolicy {
    /// The explicit value, if one was set.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_use_default(&self) -> bool {
        matches!(self, Self::UseDefault)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Error parsing an operator-supplied timeout string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timeout {0:?}")]
pub struct InvalidTimeout(String);

impl FromStr for TimeoutPolicy {
    type Err = InvalidTimeout;

    /// Parses the config-file form: empty means unset, `"infinity"` disables
    /// the timeout, anything else must be a duration literal such as
    /// `"500ms"`, `"5s"`, `"1m"` or `"1h"` (a bare number is seconds).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Ok(Self::UseDefault),
            "infinity" => Ok(Self::Disabled),
            _ => parse_duration(s)
                .map(Self::Duration)
                .ok_or_else(|| InvalidTimeout(s.to_string())),
        }
    }
}

/// Parse a duration literal (e.g. "30s", "1m", "500ms").
fn parse_duration(s: &str) -> Option<Duration> {
    if let Some(millis) = s.strip_suffix("ms") {
        return millis.parse().ok().map(Duration::from_millis);
    }
    if let Some(secs) = s.strip_suffix('s') {
        return secs.parse().ok().map(Duration::from_secs);
    }
    if let Some(mins) = s.strip_suffix('m') {
        return mins.parse::<u64>().ok().map(|m| Duration::from_secs(m * 60));
    }
    if let Some(hours) = s.strip_suffix('h') {
        return hours.parse::<u64>().ok().map(|h| Duration::from_secs(h * 60 * 60));
    }
    // Assume seconds if no suffix
    s.parse().ok().map(Duration::from_secs)
}
