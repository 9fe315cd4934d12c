//! Rolling ranges: a symbolic start anchor paired with a symbolic end anchor.
//!
//! Anchors are resolved independently and the pair is not reordered, so an
//! inconsistent combination (e.g. "first day of month" to "end of previous
//! month") yields an inverted range.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{end_of_previous_month, end_of_previous_week, first_of_month, most_recent, previous, start_of_week};
use crate::{DateRange, DayOfWeek, InvalidSelection, TimeUnit, prelude::*};

/// Where a rolling range starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartPoint {
    /// First day of the current month
    #[display(fmt = "First Day of Month")]
    FirstDayOfMonth,
    /// Last day of the previous month
    #[display(fmt = "Last Day of Month")]
    LastDayOfMonth,
    /// First day of the current week
    #[display(fmt = "First Day of Week")]
    FirstDayOfWeek,
    /// Last day of the previous week
    #[display(fmt = "Last Day of Week")]
    LastDayOfWeek,
    /// Most recent Monday before today
    #[display(fmt = "Last Monday")]
    LastMonday,
    /// Most recent Friday before today
    #[display(fmt = "Last Friday")]
    LastFriday,
    /// Most recent occurrence of a chosen weekday, today included
    #[display(fmt = "Custom Day of Week")]
    CustomDay,
}

/// Where a rolling range ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndPoint {
    #[display(fmt = "Today")]
    Today,
    #[display(fmt = "Yesterday")]
    Yesterday,
    /// Last day of the previous week
    #[display(fmt = "End of Previous Week")]
    EndOfPreviousWeek,
    /// Last day of the previous month
    #[display(fmt = "End of Previous Month")]
    EndOfPreviousMonth,
}

impl StartPoint {
    pub const ALL: [Self; 7] = [
        Self::FirstDayOfMonth,
        Self::LastDayOfMonth,
        Self::FirstDayOfWeek,
        Self::LastDayOfWeek,
        Self::LastMonday,
        Self::LastFriday,
        Self::CustomDay,
    ];

    /// The date this anchor names, relative to `today`.
    ///
    /// # Errors
    /// Returns `InvalidSelection::MissingCustomDay` for `CustomDay` without a
    /// weekday, or `InvalidSelection::OutOfRange`.
    pub fn anchor(
        self,
        today: NaiveDate,
        custom_day: Option<DayOfWeek>,
        week_start: DayOfWeek,
    ) -> Result<NaiveDate, InvalidSelection> {
        match self {
            Self::FirstDayOfMonth => first_of_month(today),
            Self::LastDayOfMonth => end_of_previous_month(today),
            Self::FirstDayOfWeek => start_of_week(today, week_start),
            Self::LastDayOfWeek => end_of_previous_week(today, week_start),
            Self::LastMonday => previous(today, DayOfWeek::MONDAY),
            Self::LastFriday => previous(today, DayOfWeek::FRIDAY),
            Self::CustomDay => {
                let day = custom_day.ok_or(InvalidSelection::MissingCustomDay)?;
                most_recent(today, day)
            },
        }
        .ok_or(InvalidSelection::OutOfRange)
    }
}

impl EndPoint {
    pub const ALL: [Self; 4] = [Self::Today, Self::Yesterday, Self::EndOfPreviousWeek, Self::EndOfPreviousMonth];

    /// The date this anchor names, relative to `today`.
    ///
    /// # Errors
    /// Returns `InvalidSelection::OutOfRange` at the edge of the calendar.
    pub fn anchor(self, today: NaiveDate, week_start: DayOfWeek) -> Result<NaiveDate, InvalidSelection> {
        match self {
            Self::Today => Some(today),
            Self::Yesterday => TimeUnit::Days.sub_from(today, 1),
            Self::EndOfPreviousWeek => end_of_previous_week(today, week_start),
            Self::EndOfPreviousMonth => end_of_previous_month(today),
        }
        .ok_or(InvalidSelection::OutOfRange)
    }
}

/// A start anchor, an end anchor, and the weekday used by `StartPoint::CustomDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingRange {
    pub start_point: StartPoint,
    pub end_point:   EndPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_day:  Option<DayOfWeek>,
}

impl RollingRange {
    pub const fn new(start_point: StartPoint, end_point: EndPoint) -> Self {
        Self {
            start_point,
            end_point,
            custom_day: None,
        }
    }

    pub const fn with_custom_day(mut self, day: DayOfWeek) -> Self {
        self.custom_day = Some(day);
        self
    }

    /// Resolves both anchors against `today`, keeping their order.
    ///
    /// # Errors
    /// See [`StartPoint::anchor`] and [`EndPoint::anchor`].
    pub fn resolve(&self, today: NaiveDate, week_start: DayOfWeek) -> Result<DateRange, InvalidSelection> {
        let start = self.start_point.anchor(today, self.custom_day, week_start)?;
        let end = self.end_point.anchor(today, week_start)?;
        tracing::trace!(
            start_point = %self.start_point,
            end_point = %self.end_point,
            %start,
            %end,
            "resolved rolling range"
        );
        Ok(DateRange::from_anchors(start, end))
    }
}

impl fmt::Display for RollingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_point, self.custom_day) {
            (StartPoint::CustomDay, Some(day)) => write!(f, "Last {}", day.name())?,
            (start, _) => write!(f, "{start}")?,
        }
        write!(f, " to {}", self.end_point)
    }
}

/// Resolves a rolling selection with weeks starting on Sunday.
///
/// # Errors
/// Returns `InvalidSelection::MissingCustomDay` if `start_point` is
/// `CustomDay` and no weekday was supplied.
pub fn resolve_rolling(
    start_point: StartPoint,
    end_point: EndPoint,
    custom_day: Option<DayOfWeek>,
    today: NaiveDate,
) -> Result<DateRange, InvalidSelection> {
    RollingRange {
        start_point,
        end_point,
        custom_day,
    }
    .resolve(today, DayOfWeek::SUNDAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, weekday};

    #[test]
    fn test_start_point_cases() {
        struct TestCase {
            start_point: StartPoint,
            custom_day:  Option<u8>,
            expected:    NaiveDate,
            description: &'static str,
        }

        // 2024-05-15 is a Wednesday
        let cases = [
            TestCase {
                start_point: StartPoint::FirstDayOfMonth,
                custom_day:  None,
                expected:    date(2024, 5, 1),
                description: "first day of current month",
            },
            TestCase {
                start_point: StartPoint::LastDayOfMonth,
                custom_day:  None,
                expected:    date(2024, 4, 30),
                description: "last day of previous month",
            },
            TestCase {
                start_point: StartPoint::FirstDayOfWeek,
                custom_day:  None,
                expected:    date(2024, 5, 12),
                description: "Sunday starting this week",
            },
            TestCase {
                start_point: StartPoint::LastDayOfWeek,
                custom_day:  None,
                expected:    date(2024, 5, 11),
                description: "Saturday ending last week",
            },
            TestCase {
                start_point: StartPoint::LastMonday,
                custom_day:  None,
                expected:    date(2024, 5, 13),
                description: "Monday of the current week",
            },
            TestCase {
                start_point: StartPoint::LastFriday,
                custom_day:  None,
                expected:    date(2024, 5, 10),
                description: "Friday of the previous week",
            },
            TestCase {
                start_point: StartPoint::CustomDay,
                custom_day:  Some(3),
                expected:    date(2024, 5, 15),
                description: "custom Wednesday on a Wednesday is today",
            },
            TestCase {
                start_point: StartPoint::CustomDay,
                custom_day:  Some(4),
                expected:    date(2024, 5, 9),
                description: "custom Thursday is six days back",
            },
            TestCase {
                start_point: StartPoint::CustomDay,
                custom_day:  Some(0),
                expected:    date(2024, 5, 12),
                description: "custom Sunday",
            },
        ];

        for case in &cases {
            let range = resolve_rolling(
                case.start_point,
                EndPoint::Today,
                case.custom_day.map(weekday),
                date(2024, 5, 15),
            )
            .unwrap_or_else(|e| panic!("{}: {e}", case.description));
            assert_eq!(range.start(), case.expected, "{}", case.description);
            assert_eq!(range.end(), date(2024, 5, 15), "{}", case.description);
        }
    }

    #[test]
    fn test_end_point_cases() {
        let today = date(2024, 5, 15);
        let expected = [
            (EndPoint::Today, today),
            (EndPoint::Yesterday, date(2024, 5, 14)),
            (EndPoint::EndOfPreviousWeek, date(2024, 5, 11)),
            (EndPoint::EndOfPreviousMonth, date(2024, 4, 30)),
        ];

        for (end_point, end) in expected {
            assert_eq!(end_point.anchor(today, DayOfWeek::SUNDAY), Ok(end), "{end_point}");
        }
    }

    #[test]
    fn test_anchors_on_their_own_weekday() {
        // 2024-05-13 is a Monday, 2024-05-10 a Friday
        let monday = date(2024, 5, 13);
        let friday = date(2024, 5, 10);
        assert_eq!(StartPoint::LastMonday.anchor(monday, None, DayOfWeek::SUNDAY), Ok(date(2024, 5, 6)));
        assert_eq!(StartPoint::LastFriday.anchor(friday, None, DayOfWeek::SUNDAY), Ok(date(2024, 5, 3)));

        // A custom day on its own weekday still resolves to today
        assert_eq!(StartPoint::CustomDay.anchor(monday, Some(weekday(1)), DayOfWeek::SUNDAY), Ok(monday));

        let range = resolve_rolling(StartPoint::LastMonday, EndPoint::Today, None, monday)
            .expect("rolling range should resolve");
        assert_eq!(range.dates(), (date(2024, 5, 6), monday));
    }

    #[test]
    fn test_week_start_is_configurable() {
        let today = date(2024, 5, 15);
        let range = RollingRange::new(StartPoint::FirstDayOfWeek, EndPoint::EndOfPreviousWeek)
            .resolve(today, DayOfWeek::MONDAY)
            .expect("rolling range should resolve");
        assert_eq!(range.start(), date(2024, 5, 13));
        assert_eq!(range.end(), date(2024, 5, 12));
    }

    #[test]
    fn test_missing_custom_day() {
        let result = resolve_rolling(StartPoint::CustomDay, EndPoint::Today, None, date(2024, 5, 15));
        assert_eq!(result, Err(InvalidSelection::MissingCustomDay));
    }

    #[test]
    fn test_custom_day_ignored_for_other_start_points() {
        let today = date(2024, 5, 15);
        let with_day = resolve_rolling(StartPoint::LastMonday, EndPoint::Today, Some(weekday(5)), today);
        let without_day = resolve_rolling(StartPoint::LastMonday, EndPoint::Today, None, today);
        assert_eq!(with_day, without_day);
    }

    #[test]
    fn test_inconsistent_anchors_stay_inverted() {
        let range = resolve_rolling(StartPoint::FirstDayOfMonth, EndPoint::EndOfPreviousMonth, None, date(2024, 5, 15))
        .expect("rolling range should resolve");
        assert!(range.is_inverted());
        assert_eq!(range.start(), date(2024, 5, 1));
        assert_eq!(range.end(), date(2024, 4, 30));

        let text = range.to_string();
        assert_eq!(text.parse::<DateRange>(), Ok(range));

        let json = serde_json::to_string(&range).expect("failed to serialize inverted range");
        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize inverted range");
        assert_eq!(parsed, range);
    }

    #[test]
    fn test_every_combination_resolves() {
        let days = [date(2024, 1, 1), date(2024, 3, 1), date(2024, 5, 12), date(2024, 12, 31)];
        for today in days {
            for start_point in StartPoint::ALL {
                for end_point in EndPoint::ALL {
                    let rolling = RollingRange::new(start_point, end_point).with_custom_day(weekday(2));
                    let first = rolling.resolve(today, DayOfWeek::SUNDAY);
                    assert!(first.is_ok(), "{rolling} on {today}");
                    assert_eq!(first, rolling.resolve(today, DayOfWeek::SUNDAY));
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let rolling = RollingRange::new(StartPoint::LastMonday, EndPoint::Yesterday);
        assert_eq!(rolling.to_string(), "Last Monday to Yesterday");

        let rolling = RollingRange::new(StartPoint::CustomDay, EndPoint::Today).with_custom_day(weekday(3));
        assert_eq!(rolling.to_string(), "Last Wednesday to Today");
    }

    #[test]
    fn test_serde() {
        let rolling = RollingRange::new(StartPoint::CustomDay, EndPoint::EndOfPreviousWeek).with_custom_day(weekday(1));
        let json = serde_json::to_string(&rolling).expect("failed to serialize rolling range");
        assert_eq!(json, r#"{"startPoint":"customDay","endPoint":"endOfPreviousWeek","customDay":1}"#);
        let parsed: RollingRange = serde_json::from_str(&json).expect("failed to deserialize rolling range");
        assert_eq!(parsed, rolling);

        let parsed: RollingRange = serde_json::from_str(r#"{"startPoint":"lastFriday","endPoint":"today"}"#)
            .expect("failed to deserialize without custom day");
        assert_eq!(parsed.custom_day, None);
    }
}
