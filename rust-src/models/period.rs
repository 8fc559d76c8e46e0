//! Calendar date ranges used to query the data source.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WINDOW_DAYS;


/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}


impl DateRange {
    /// Range from `start` to `end`; swapped bounds are reordered.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// The dashboard window of `WINDOW_DAYS` days ending on `date`.
    pub fn week_ending(date: NaiveDate) -> Self {
        Self::new(date - Duration::days(WINDOW_DAYS - 1), date)
    }

    /// Window of the same length immediately before this one.
    pub fn previous(&self) -> Self {
        let len = self.days();
        Self::new(self.start - Duration::days(len), self.start - Duration::days(1))
    }

    /// Number of days covered, bounds included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Short label such as `12 Oct 2026 - 18 Oct 2026`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%d %b %Y"), self.end.format("%d %b %Y"))
    }
}


impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_ending() {
        let range = DateRange::week_ending(date(2026, 10, 18));
        assert_eq!(range.start, date(2026, 10, 12));
        assert_eq!(range.end, date(2026, 10, 18));
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn test_previous_window() {
        let prev = DateRange::week_ending(date(2026, 10, 18)).previous();
        assert_eq!(prev.start, date(2026, 10, 5));
        assert_eq!(prev.end, date(2026, 10, 11));
    }

    #[test]
    fn test_swapped_bounds() {
        let range = DateRange::new(date(2026, 3, 2), date(2026, 3, 1));
        assert_eq!(range.start, date(2026, 3, 1));
        assert!(range.contains(date(2026, 3, 2)));
        assert!(!range.contains(date(2026, 3, 3)));
    }

    #[test]
    fn test_display() {
        let range = DateRange::week_ending(date(2026, 1, 3));
        assert_eq!(range.to_string(), "2025-12-28..2026-01-03");
        assert_eq!(range.label(), "28 Dec 2025 - 03 Jan 2026");
    }
}
