//! Resolver configuration.
//!
//! Loaded from TOML; every field has a default, so an empty document is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use crate::DayOfWeek;

/// What to do when a "last N" end offset uses a unit coarser than the
/// primary unit (e.g. "last 2 weeks ending 1 month ago").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOffsetPolicy {
    /// Reject the selection with `InvalidSelection::EndUnitTooCoarse`.
    #[default]
    Strict,
    /// Count the end offset in the primary unit instead.
    Clamp,
}

/// Settings shared by every resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// First day of the week for week-based rolling anchors (0 = Sunday).
    pub week_starts_on:    DayOfWeek,
    /// Handling of end offsets coarser than the primary unit.
    pub end_offset_policy: EndOffsetPolicy,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or holds invalid values.
    #[error("Invalid resolver configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ResolverConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML, unknown policy names
    /// or a weekday outside 0-6.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub const fn with_week_start(mut self, week_starts_on: DayOfWeek) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    pub const fn with_end_offset_policy(mut self, policy: EndOffsetPolicy) -> Self {
        self.end_offset_policy = policy;
        self
    }
}
