//! "Since" and "last N" ranges: a count of units measured back from today,
//! optionally ending some offset before today.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_WEEK, DateRange, ECHO_DAYS_LIMIT, ECHO_DAYS_PER_MONTH, ECHO_WEEKS_LIMIT, EndOffsetPolicy,
    InvalidSelection, Offset, Quantity, TimeUnit, prelude::*,
};

/// Whether a relative range always ends today or may end earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeMode {
    /// From `value` units ago through today
    #[display(fmt = "since")]
    Since,
    /// `value` units ending `end_offset` before today
    #[display(fmt = "last")]
    Last,
}

/// A relative selection as entered on the "since" or "last" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeSelection {
    pub mode:       RelativeMode,
    pub value:      Quantity,
    pub unit:       TimeUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<Offset>,
}

impl RelativeSelection {
    pub const fn since(value: Quantity, unit: TimeUnit) -> Self {
        Self {
            mode: RelativeMode::Since,
            value,
            unit,
            end_offset: None,
        }
    }

    pub const fn last(value: Quantity, unit: TimeUnit) -> Self {
        Self {
            mode: RelativeMode::Last,
            value,
            unit,
            end_offset: None,
        }
    }

    /// Ends the range `offset` before today
    pub const fn ending(mut self, offset: Offset) -> Self {
        self.end_offset = Some(offset);
        self
    }

    /// Resolves the selection against `today`.
    ///
    /// # Errors
    /// Returns `InvalidSelection::EndOffsetOnSince` for a since selection with
    /// an end offset, `InvalidSelection::EndUnitTooCoarse` when a strict
    /// policy rejects the end unit, or `InvalidSelection::OutOfRange`.
    pub fn resolve(&self, today: NaiveDate, policy: EndOffsetPolicy) -> Result<DateRange, InvalidSelection> {
        match (self.mode, self.end_offset) {
            (RelativeMode::Since, None) => resolve_since(self.value, self.unit, today),
            (RelativeMode::Since, Some(_)) => Err(InvalidSelection::EndOffsetOnSince),
            (RelativeMode::Last, end) => {
                let end = end.unwrap_or_default();
                resolve_last_with_policy(self.value, self.unit, end.value, end.unit, today, policy)
            },
        }
    }
}

impl fmt::Display for RelativeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.get();
        let noun = self.unit.noun(value);
        match (self.mode, self.end_offset) {
            (RelativeMode::Since, _) => write!(f, "since {value} {noun} ago"),
            (RelativeMode::Last, Some(end)) if !end.is_zero() => {
                write!(f, "last {value} {noun} ending {end}")
            },
            (RelativeMode::Last, _) => write!(f, "last {value} {noun}"),
        }
    }
}

/// From `value` units before `today` through `today`.
///
/// # Errors
/// Returns `InvalidSelection::OutOfRange` if the start is not representable.
pub fn resolve_since(value: Quantity, unit: TimeUnit, today: NaiveDate) -> Result<DateRange, InvalidSelection> {
    let start = unit.sub_from(today, value.get()).ok_or(InvalidSelection::OutOfRange)?;
    tracing::trace!(%value, %unit, %start, "resolved since range");
    Ok(DateRange::new(start, today))
}

/// `value` units ending `end_value` `end_unit`s before `today`, rejecting an
/// end unit coarser than `unit`.
///
/// The end is computed first and the start is counted back from the end.
///
/// # Errors
/// Returns `InvalidSelection::EndUnitTooCoarse` if `end_unit > unit`, or
/// `InvalidSelection::OutOfRange`.
pub fn resolve_last(
    value: Quantity,
    unit: TimeUnit,
    end_value: u32,
    end_unit: TimeUnit,
    today: NaiveDate,
) -> Result<DateRange, InvalidSelection> {
    resolve_last_with_policy(value, unit, end_value, end_unit, today, EndOffsetPolicy::Strict)
}

/// Like [`resolve_last`], with explicit handling of a too-coarse end unit.
///
/// # Errors
/// See [`resolve_last`]; under `EndOffsetPolicy::Clamp` the end unit is
/// never rejected.
pub fn resolve_last_with_policy(
    value: Quantity,
    unit: TimeUnit,
    end_value: u32,
    end_unit: TimeUnit,
    today: NaiveDate,
    policy: EndOffsetPolicy,
) -> Result<DateRange, InvalidSelection> {
    let end_unit = if end_unit <= unit {
        end_unit
    } else {
        match policy {
            EndOffsetPolicy::Strict => {
                return Err(InvalidSelection::EndUnitTooCoarse { unit, end_unit });
            },
            EndOffsetPolicy::Clamp => {
                tracing::warn!(%unit, %end_unit, "end offset unit coarser than range unit, clamping");
                unit
            },
        }
    };

    let end = Offset::new(end_value, end_unit).before(today).ok_or(InvalidSelection::OutOfRange)?;
    let start = unit.sub_from(end, value.get()).ok_or(InvalidSelection::OutOfRange)?;
    tracing::trace!(%value, %unit, end_value, %end_unit, %start, %end, "resolved last range");
    Ok(DateRange::new(start, end))
}

/// Approximate `(value, unit)` shown back to the user after picking a
/// "since" start date on the calendar. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinceEcho {
    pub value: u32,
    pub unit:  TimeUnit,
}

impl fmt::Display for SinceEcho {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.noun(self.value))
    }
}

/// Maps an explicit start date to the coarsest readable `(value, unit)`.
///
/// Gaps of at most 31 days are shown in days, at most 365 days in weeks
/// (rounded up), and anything longer in 30-day months (rounded up). The
/// mapping is lossy; resolve the authoritative range from the picked date.
pub fn since_echo(start: NaiveDate, today: NaiveDate) -> SinceEcho {
    let days = (today - start).num_days().unsigned_abs();
    let (value, unit) = if days <= ECHO_DAYS_LIMIT {
        (days, TimeUnit::Days)
    } else if days <= ECHO_WEEKS_LIMIT {
        (days.div_ceil(u64::from(DAYS_PER_WEEK)), TimeUnit::Weeks)
    } else {
        (days.div_ceil(ECHO_DAYS_PER_MONTH), TimeUnit::Months)
    };
    SinceEcho {
        value: u32::try_from(value).unwrap_or(u32::MAX),
        unit,
    }
}
