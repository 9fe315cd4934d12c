use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DISPLAY_DATE_FORMAT, DISPLAY_RANGE_SEPARATOR, ISO_DATE_FORMAT, RANGE_SEPARATOR, prelude::*};

/// A concrete calendar interval, inclusive at both ends.
///
/// Ranges built with [`DateRange::new`] always satisfy `start <= end`: an
/// inverted pair is swapped, not rejected. Rolling selections keep the order
/// of their anchors, so [`DateRange::is_inverted`] can be true for those.
/// The text and serde forms keep the order as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}{}{}", "start.format(ISO_DATE_FORMAT)", RANGE_SEPARATOR, "end.format(ISO_DATE_FORMAT)")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for parsing a date range from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing one of the endpoint dates.
    #[error(transparent)]
    InvalidDate(#[from] chrono::ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range, swapping the dates if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// A single-day range
    pub const fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Keeps the anchors in the order given, even if inverted.
    pub(crate) const fn from_anchors(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// True if the start lies after the end (rolling selections only)
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Earliest and latest dates covered, regardless of anchor order
    fn bounds(&self) -> (NaiveDate, NaiveDate) {
        if self.is_inverted() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    /// Number of calendar days covered, counting both ends
    pub fn num_days(&self) -> u64 {
        let (lower, upper) = self.bounds();
        (upper - lower).num_days().unsigned_abs() + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &NaiveDate) -> bool {
        let (lower, upper) = self.bounds();
        lower <= *date && *date <= upper
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        let (self_lower, self_upper) = self.bounds();
        let (other_lower, other_upper) = other.bounds();
        self_lower <= other_upper && other_lower <= self_upper
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        let (self_lower, self_upper) = self.bounds();
        let (other_lower, other_upper) = other.bounds();
        other_lower <= self_lower && self_upper <= other_upper
    }

    /// Every day covered by the range, earliest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let (lower, upper) = self.bounds();
        lower.iter_days().take_while(move |day| *day <= upper)
    }

    /// Human-readable form, e.g. "May 8, 2024 - May 15, 2024"
    pub fn display_text(&self) -> String {
        format!(
            "{}{DISPLAY_RANGE_SEPARATOR}{}",
            self.start.format(DISPLAY_DATE_FORMAT),
            self.end.format(DISPLAY_DATE_FORMAT)
        )
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self::new(start, end)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval format: RANGE_SEPARATOR separates start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = NaiveDate::parse_from_str(start_str.trim(), ISO_DATE_FORMAT)?;
                let end = NaiveDate::parse_from_str(end_str.trim(), ISO_DATE_FORMAT)?;

                Ok(Self::from_anchors(start, end))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
