use crate::consts::{DAYS_PER_WEEK, FRIDAY, MAX_WEEKDAY, MONDAY, MONTHS_PER_YEAR, SUNDAY, WEEKDAY_NAMES};
use crate::{InvalidSelection, prelude::*};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A count of time units guaranteed to be positive.
/// Uses `NonZeroU32` internally, so 0 is not a valid quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Creates a new Quantity, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `InvalidSelection::ZeroQuantity` if the value is 0.
    pub fn new(value: u32) -> Result<Self, InvalidSelection> {
        NonZeroU32::new(value).map(Self).ok_or(InvalidSelection::ZeroQuantity)
    }

    /// Returns the quantity as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Quantity {
    type Error = InvalidSelection;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Granularity of a relative offset, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
}

impl TimeUnit {
    /// All units, finest first
    pub const ALL: [Self; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    /// Units an end offset may use alongside `self` as the primary unit:
    /// every unit no coarser than `self`.
    pub fn end_offset_units(self) -> &'static [Self] {
        match self {
            Self::Days => &[Self::Days],
            Self::Weeks => &[Self::Days, Self::Weeks],
            Self::Months => &[Self::Days, Self::Weeks, Self::Months],
            Self::Years => &Self::ALL,
        }
    }

    /// Singular or plural noun for `count` units
    pub const fn noun(self, count: u32) -> &'static str {
        match (self, count == 1) {
            (Self::Days, true) => "day",
            (Self::Days, false) => "days",
            (Self::Weeks, true) => "week",
            (Self::Weeks, false) => "weeks",
            (Self::Months, true) => "month",
            (Self::Months, false) => "months",
            (Self::Years, true) => "year",
            (Self::Years, false) => "years",
        }
    }

    /// Steps `amount` units back from `date`.
    /// Month and year steps clamp the day of month (Mar 31 - 1 month = Feb 28/29).
    /// Returns `None` if the result is not representable.
    pub fn sub_from(self, date: NaiveDate, amount: u32) -> Option<NaiveDate> {
        match self {
            Self::Days => date.checked_sub_days(Days::new(u64::from(amount))),
            Self::Weeks => date.checked_sub_days(Days::new(u64::from(amount) * u64::from(DAYS_PER_WEEK))),
            Self::Months => date.checked_sub_months(Months::new(amount)),
            Self::Years => amount
                .checked_mul(MONTHS_PER_YEAR)
                .and_then(|months| date.checked_sub_months(Months::new(months))),
        }
    }
}

/// How far before today a "last N" range ends. A zero value means today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub value: u32,
    pub unit:  TimeUnit,
}

impl Offset {
    /// No offset: the range ends today
    pub const ZERO: Self = Self {
        value: 0,
        unit:  TimeUnit::Days,
    };

    pub const fn new(value: u32, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// The date this offset lands on when counted back from `date`
    pub fn before(self, date: NaiveDate) -> Option<NaiveDate> {
        if self.is_zero() {
            Some(date)
        } else {
            self.unit.sub_from(date, self.value)
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("today")
        } else {
            write!(f, "{} {} ago", self.value, self.unit.noun(self.value))
        }
    }
}

/// A weekday index guaranteed to be in the range `0..=MAX_WEEKDAY`,
/// counted from Sunday (0 = Sunday, 6 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(SUNDAY);
    pub const MONDAY: Self = Self(MONDAY);
    pub const FRIDAY: Self = Self(FRIDAY);

    /// Creates a new DayOfWeek, validating that it's <= `MAX_WEEKDAY`
    ///
    /// # Errors
    /// Returns `InvalidSelection::WeekdayOutOfRange` if the value is > `MAX_WEEKDAY`.
    pub const fn new(value: u8) -> Result<Self, InvalidSelection> {
        if value > MAX_WEEKDAY {
            return Err(InvalidSelection::WeekdayOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the weekday index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The weekday `date` falls on
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// English name of the weekday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.0 as usize]
    }

    /// Number of days to step back from `self` to reach `target` (0..=6)
    pub const fn days_back_to(self, target: Self) -> u8 {
        (self.0 + MAX_WEEKDAY + 1 - target.0) % (MAX_WEEKDAY + 1)
    }
}

impl Default for DayOfWeek {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = InvalidSelection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self(match weekday {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        })
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day.0 {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tue,
            3 => Self::Wed,
            4 => Self::Thu,
            5 => Self::Fri,
            // validated on construction: only 6 remains
            _ => Self::Sat,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar anchors. Each returns `None` only at the edge of chrono's range.

/// Most recent date on or before `date` that falls on `weekday`
pub(crate) fn most_recent(date: NaiveDate, weekday: DayOfWeek) -> Option<NaiveDate> {
    let back = DayOfWeek::of(date).days_back_to(weekday);
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// Latest date strictly before `date` that falls on `weekday`
pub(crate) fn previous(date: NaiveDate, weekday: DayOfWeek) -> Option<NaiveDate> {
    let back = match DayOfWeek::of(date).days_back_to(weekday) {
        0 => DAYS_PER_WEEK,
        back => u32::from(back),
    };
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// First day of the week containing `date`
pub(crate) fn start_of_week(date: NaiveDate, week_start: DayOfWeek) -> Option<NaiveDate> {
    most_recent(date, week_start)
}

/// Last day of the week before the one containing `date`
pub(crate) fn end_of_previous_week(date: NaiveDate, week_start: DayOfWeek) -> Option<NaiveDate> {
    start_of_week(date, week_start)?.pred_opt()
}

/// First day of the month containing `date`
pub(crate) fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Last day of the month before the one containing `date`
pub(crate) fn end_of_previous_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date)?.pred_opt()
}

/// January 1 of the year containing `date`
pub(crate) fn first_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}
