mod clock;
mod config;
mod consts;
mod custom;
mod prelude;
mod preset;
mod range;
mod relative;
mod resolver;
mod rolling;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, EndOffsetPolicy, ResolverConfig};
pub use consts::*;
pub use custom::{CustomRange, resolve_custom};
pub use preset::{Preset, resolve_preset};
pub use range::{DateRange, RangeError};
pub use relative::{
    RelativeMode, RelativeSelection, SinceEcho, resolve_last, resolve_last_with_policy,
    resolve_since, since_echo,
};
pub use resolver::Resolver;
pub use rolling::{EndPoint, RollingRange, StartPoint, resolve_rolling};
pub use types::{DayOfWeek, Offset, Quantity, TimeUnit};

use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One user interaction on the date-range picker.
/// Resolved immediately to a [`DateRange`] and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "camelCase")]
pub enum Selection {
    /// A named interval such as "past 4 weeks"
    Preset(Preset),
    /// "Since N units ago" or "last N units ending K ago"
    Relative(RelativeSelection),
    /// A start anchor paired with an end anchor
    Rolling(RollingRange),
    /// Two explicitly picked dates, in either order
    #[from(ignore)]
    Custom { start: NaiveDate, end: NaiveDate },
}

/// The single error kind raised by the resolvers. Each variant names what
/// made the selection unusable.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidSelection {
    #[display(fmt = "Unknown preset: {_0}")]
    UnknownPreset(String),
    #[display(fmt = "Custom day start requires a weekday (0-{})", MAX_WEEKDAY)]
    MissingCustomDay,
    #[display(fmt = "End offset unit {end_unit} is coarser than range unit {unit}")]
    EndUnitTooCoarse { unit: TimeUnit, end_unit: TimeUnit },
    #[display(fmt = "A since selection cannot have an end offset")]
    EndOffsetOnSince,
    #[display(fmt = "Quantity must be at least 1")]
    ZeroQuantity,
    #[display(fmt = "Invalid weekday: {} (must be 0-{})", "_0", MAX_WEEKDAY)]
    WeekdayOutOfRange(u8),
    #[display(fmt = "Date falls outside the supported calendar range")]
    OutOfRange,
}

impl std::error::Error for InvalidSelection {}

impl Selection {
    /// Creates a custom selection from two dates
    pub const fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom { start, end }
    }

    /// Resolves the selection against `today`.
    ///
    /// # Errors
    /// Returns `InvalidSelection` for unknown or incomplete selections; see
    /// the individual resolvers.
    pub fn resolve(&self, today: NaiveDate, config: &ResolverConfig) -> Result<DateRange, InvalidSelection> {
        match self {
            Self::Preset(preset) => preset.resolve(today),
            Self::Relative(relative) => relative.resolve(today, config.end_offset_policy),
            Self::Rolling(rolling) => rolling.resolve(today, config.week_starts_on),
            Self::Custom { start, end } => Ok(DateRange::new(*start, *end)),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Relative(relative) => write!(f, "{relative}"),
            Self::Rolling(rolling) => write!(f, "{rolling}"),
            Self::Custom { start, end } => f.write_str(&DateRange::new(*start, *end).display_text()),
        }
    }
}
