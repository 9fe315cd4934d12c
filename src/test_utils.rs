//! Shared constructors for tests.

use chrono::NaiveDate;

use crate::{DayOfWeek, Quantity};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

pub fn qty(value: u32) -> Quantity {
    Quantity::new(value).expect("invalid test quantity")
}

pub fn weekday(value: u8) -> DayOfWeek {
    DayOfWeek::new(value).expect("invalid test weekday")
}
