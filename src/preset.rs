use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{first_of_month, first_of_year};
use crate::{
    DateRange, InvalidSelection, PAST_4_WEEKS_DAYS, PAST_6_MONTHS, PAST_12_MONTHS,
    PAST_12_WEEKS_DAYS, PAST_WEEK_DAYS, TimeUnit, prelude::*,
};

/// A named, parameterless interval relative to today.
/// Displays as its menu label, parses from its camelCase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    #[display(fmt = "Today")]
    Today,
    #[display(fmt = "Yesterday")]
    Yesterday,
    #[display(fmt = "Past Week")]
    PastWeek,
    #[display(fmt = "Month to Date")]
    MonthToDate,
    #[display(fmt = "Past 4 Weeks")]
    Past4Weeks,
    #[display(fmt = "Past 12 Weeks")]
    Past12Weeks,
    #[display(fmt = "Year to Date")]
    YearToDate,
    #[display(fmt = "Past 6 Months")]
    Past6Months,
    #[display(fmt = "Past 12 Months")]
    Past12Months,
}

impl Preset {
    /// Every preset, in menu order
    pub const ALL: [Self; 9] = [
        Self::Today,
        Self::Yesterday,
        Self::PastWeek,
        Self::MonthToDate,
        Self::Past4Weeks,
        Self::Past12Weeks,
        Self::YearToDate,
        Self::Past6Months,
        Self::Past12Months,
    ];

    /// The stable key this preset is selected by
    pub const fn key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::PastWeek => "pastWeek",
            Self::MonthToDate => "monthToDate",
            Self::Past4Weeks => "past4Weeks",
            Self::Past12Weeks => "past12Weeks",
            Self::YearToDate => "yearToDate",
            Self::Past6Months => "past6Months",
            Self::Past12Months => "past12Months",
        }
    }

    /// Resolves the preset against `today`.
    ///
    /// # Errors
    /// Returns `InvalidSelection::OutOfRange` only when `today` sits at the
    /// edge of the representable calendar.
    pub fn resolve(self, today: NaiveDate) -> Result<DateRange, InvalidSelection> {
        let back = |unit: TimeUnit, amount: u32| unit.sub_from(today, amount);

        let start = match self {
            Self::Today => Some(today),
            Self::Yesterday => {
                let yesterday = back(TimeUnit::Days, 1).ok_or(InvalidSelection::OutOfRange)?;
                return Ok(DateRange::day(yesterday));
            },
            Self::PastWeek => back(TimeUnit::Days, PAST_WEEK_DAYS),
            Self::MonthToDate => first_of_month(today),
            Self::Past4Weeks => back(TimeUnit::Days, PAST_4_WEEKS_DAYS),
            Self::Past12Weeks => back(TimeUnit::Days, PAST_12_WEEKS_DAYS),
            Self::YearToDate => first_of_year(today),
            Self::Past6Months => back(TimeUnit::Months, PAST_6_MONTHS),
            Self::Past12Months => back(TimeUnit::Months, PAST_12_MONTHS),
        }
        .ok_or(InvalidSelection::OutOfRange)?;

        tracing::trace!(preset = self.key(), %start, %today, "resolved preset");
        Ok(DateRange::new(start, today))
    }
}

impl FromStr for Preset {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.key() == key)
            .ok_or_else(|| InvalidSelection::UnknownPreset(key.to_owned()))
    }
}

/// Resolves a preset selected by key.
///
/// # Errors
/// Returns `InvalidSelection::UnknownPreset` if `key` names no preset.
pub fn resolve_preset(key: &str, today: NaiveDate) -> Result<DateRange, InvalidSelection> {
    key.parse::<Preset>()?.resolve(today)
}
