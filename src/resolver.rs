//! Clock-driven entry point over the individual resolvers.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{
    Clock, DateRange, DayOfWeek, EndPoint, InvalidSelection, Offset, Preset, Quantity,
    RelativeSelection, ResolverConfig, RollingRange, Selection, SinceEcho, StartPoint,
    SystemClock, TimeUnit, since_echo,
};

/// Resolves selections against the date reported by a [`Clock`].
///
/// Every call reads the clock once, so a single selection never straddles
/// midnight.
#[derive(Debug, Clone, Default)]
pub struct Resolver<C = SystemClock> {
    clock:  C,
    config: ResolverConfig,
}

impl Resolver {
    /// A resolver on the system clock with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Resolver<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Resolves any selection.
    ///
    /// # Errors
    /// Returns the `InvalidSelection` raised by the underlying resolver.
    pub fn resolve(&self, selection: &Selection) -> Result<DateRange, InvalidSelection> {
        let today = self.clock.today();
        let result = selection.resolve(today, &self.config);
        match &result {
            Ok(range) => {
                if range.is_inverted() {
                    warn!(%selection, %range, "selection resolved to an inverted range");
                }
                debug!(%selection, %today, %range, "resolved selection");
            },
            Err(error) => debug!(%selection, %today, %error, "rejected selection"),
        }
        result
    }

    /// # Errors
    /// Returns `InvalidSelection::UnknownPreset` if `key` names no preset.
    pub fn preset(&self, key: &str) -> Result<DateRange, InvalidSelection> {
        let preset = key.parse::<Preset>().inspect_err(|error| debug!(key, %error, "rejected preset key"))?;
        self.resolve(&Selection::Preset(preset))
    }

    /// # Errors
    /// Returns `InvalidSelection::OutOfRange` if the start is not representable.
    pub fn since(&self, value: Quantity, unit: TimeUnit) -> Result<DateRange, InvalidSelection> {
        self.resolve(&Selection::Relative(RelativeSelection::since(value, unit)))
    }

    /// Display echo for a "since" start picked on the calendar.
    pub fn since_echo(&self, start: NaiveDate) -> SinceEcho {
        since_echo(start, self.clock.today())
    }

    /// # Errors
    /// Returns `InvalidSelection::EndUnitTooCoarse` under the strict policy
    /// when `end_unit` is coarser than `unit`.
    pub fn last(
        &self,
        value: Quantity,
        unit: TimeUnit,
        end_value: u32,
        end_unit: TimeUnit,
    ) -> Result<DateRange, InvalidSelection> {
        let selection = RelativeSelection::last(value, unit).ending(Offset::new(end_value, end_unit));
        self.resolve(&Selection::Relative(selection))
    }

    /// # Errors
    /// Returns `InvalidSelection::MissingCustomDay` for a `CustomDay` start
    /// without a weekday.
    pub fn rolling(
        &self,
        start_point: StartPoint,
        end_point: EndPoint,
        custom_day: Option<DayOfWeek>,
    ) -> Result<DateRange, InvalidSelection> {
        let rolling = RollingRange {
            start_point,
            end_point,
            custom_day,
        };
        self.resolve(&Selection::Rolling(rolling))
    }

    /// Returns `None` while either date is missing.
    pub fn custom(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateRange> {
        match (start, end) {
            (Some(start), Some(end)) => self.resolve(&Selection::Custom { start, end }).ok(),
            _ => {
                debug!(?start, ?end, "custom selection pending");
                None
            },
        }
    }
}
