//! Selected date for the overview panel.

use chrono::{Duration, Local, NaiveDate};


/// Holds an optional selected date. No validation or range limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelector {
    selected: Option<NaiveDate>,
}


impl Default for DateSelector {
    fn default() -> Self {
        Self::new()
    }
}


impl DateSelector {
    /// Selector starting on today's local date.
    pub fn new() -> Self {
        Self::starting_at(Some(Local::now().date_naive()))
    }

    pub fn starting_at(selected: Option<NaiveDate>) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn set(&mut self, date: Option<NaiveDate>) {
        self.selected = date;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn reset_to(&mut self, today: NaiveDate) {
        self.selected = Some(today);
    }

    /// Move the selection by `days`, starting from `today` when unset.
    pub fn shift_days(&mut self, days: i64, today: NaiveDate) -> NaiveDate {
        let base = self.selected.unwrap_or(today);
        let date = base
            .checked_add_signed(Duration::days(days))
            .unwrap_or(base);
        self.selected = Some(date);
        date
    }

    /// Button text, e.g. `18 October 2026`.
    pub fn label(&self) -> String {
        match self.selected {
            Some(date) => date.format("%d %B %Y").to_string(),
            None => "Pick a date".to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_today() {
        let selector = DateSelector::new();
        assert_eq!(selector.selected(), Some(Local::now().date_naive()));
    }

    #[test]
    fn test_set_and_get() {
        let mut selector = DateSelector::starting_at(None);
        assert_eq!(selector.selected(), None);
        selector.set(Some(date(2026, 10, 18)));
        assert_eq!(selector.selected(), Some(date(2026, 10, 18)));
        selector.clear();
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn test_shift_days() {
        let today = date(2026, 10, 18);
        let mut selector = DateSelector::starting_at(None);
        assert_eq!(selector.shift_days(-1, today), date(2026, 10, 17));
        assert_eq!(selector.shift_days(7, today), date(2026, 10, 24));
        selector.reset_to(today);
        assert_eq!(selector.selected(), Some(today));
    }

    #[test]
    fn test_label() {
        let mut selector = DateSelector::starting_at(Some(date(2026, 10, 8)));
        assert_eq!(selector.label(), "08 October 2026");
        selector.clear();
        assert_eq!(selector.label(), "Pick a date");
    }
}
