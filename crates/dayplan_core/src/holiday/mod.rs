//! Public holiday calculator.
//!
//! # Responsibility
//! - Decide which days of a displayed month are public holidays.
//! - Keep the holiday data itself external: the calendar is a supplied
//!   table, not something this core derives from first principles.
//!
//! # Invariants
//! - `holidays_in_month` is pure and side-effect free.
//! - Results are ascending and confined to the month containing the input
//!   day.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeMap;

pub mod japan;

/// Predicate over calendar days, supplied by a locale-specific table.
pub trait HolidayCalendar {
    /// Returns whether `day` is a public holiday.
    fn is_holiday(&self, day: NaiveDate) -> bool;
}

/// Table-backed holiday calendar.
///
/// The table is plain data; construct one from any source of dated entries
/// (the bundled Japanese table, a config file, a test fixture).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    entries: BTreeMap<NaiveDate, String>,
}

impl HolidayTable {
    /// Builds a table from `(day, display name)` entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the display name of the holiday on `day`, if any.
    pub fn name(&self, day: NaiveDate) -> Option<&str> {
        self.entries.get(&day).map(String::as_str)
    }

    /// Returns the number of known holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HolidayCalendar for HolidayTable {
    fn is_holiday(&self, day: NaiveDate) -> bool {
        self.entries.contains_key(&day)
    }
}

/// Returns the first and last calendar day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    // day0() is the zero-based day of month, so the subtraction stays
    // inside the month and cannot underflow.
    let first = day - Days::new(u64::from(day.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_first| next_first.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Collects the public holidays of the month containing `day`, ascending.
pub fn holidays_in_month(calendar: &impl HolidayCalendar, day: NaiveDate) -> Vec<NaiveDate> {
    let (first, last) = month_bounds(day);
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| calendar.is_holiday(*d))
        .collect()
}
