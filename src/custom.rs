//! Explicit start/end picks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DateRange;

/// Resolves an explicit pair of dates.
///
/// Returns `None` while either date is missing: the selection is pending
/// and must not be applied yet. An inverted pair is swapped.
pub fn resolve_custom(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateRange> {
    match (start, end) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)),
        _ => None,
    }
}

/// Start and end fields of a custom range being edited.
///
/// Single-field edits keep the fields ordered: moving the start past the
/// end drags the end along, and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CustomFields")]
pub struct CustomRange {
    start: Option<NaiveDate>,
    end:   Option<NaiveDate>,
}

/// Stored picker fields, ordered on load.
#[derive(Deserialize)]
struct CustomFields {
    start: Option<NaiveDate>,
    end:   Option<NaiveDate>,
}

impl From<CustomFields> for CustomRange {
    fn from(CustomFields { start, end }: CustomFields) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start > end => Self { start: Some(end), end: Some(start) },
            _ => Self { start, end },
        }
    }
}

impl CustomRange {
    pub const fn new() -> Self {
        Self { start: None, end: None }
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Sets the start date, moving the end forward if it now lies before it.
    pub fn set_start(&mut self, date: NaiveDate) {
        self.start = Some(date);
        if self.end.is_some_and(|end| date > end) {
            self.end = Some(date);
        }
    }

    /// Sets the end date, moving the start back if it now lies after it.
    pub fn set_end(&mut self, date: NaiveDate) {
        self.end = Some(date);
        if self.start.is_some_and(|start| date < start) {
            self.start = Some(date);
        }
    }

    /// Applies a calendar click.
    ///
    /// The first click (or any click after a completed range) starts a new
    /// range and clears the end; the next click completes it. Returns the
    /// range once both ends are set.
    pub fn pick(&mut self, date: NaiveDate) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), None) => {
                let range = DateRange::new(start, date);
                self.start = Some(range.start());
                self.end = Some(range.end());
            },
            _ => {
                self.start = Some(date);
                self.end = None;
            },
        }
        self.range()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// True until both dates are set
    pub const fn is_pending(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// The selected range, or `None` while pending
    pub fn range(&self) -> Option<DateRange> {
        resolve_custom(self.start, self.end)
    }
}
