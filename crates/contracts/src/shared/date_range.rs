use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range, no time component.
///
/// An inverted range (`from > to`) is not an error: it expands to zero
/// days so the dashboard renders an empty state instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parse from a pair of `YYYY-MM-DD` strings
    pub fn parse(from: &str, to: &str) -> Option<Self> {
        let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
        let to = NaiveDate::parse_from_str(to, "%Y-%m-%d").ok()?;
        Some(Self { from, to })
    }

    /// Inclusive number of calendar days, 0 for an inverted range
    pub fn day_count(&self) -> u64 {
        if self.from <= self.to {
            (self.to - self.from).num_days() as u64 + 1
        } else {
            0
        }
    }

    /// Each calendar day in ascending order, empty for an inverted range
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take(self.day_count() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_count_single_day() {
        let range = DateRange::new(d("2024-03-01"), d("2024-03-01"));
        assert_eq!(range.day_count(), 1);
    }

    #[test]
    fn test_day_count_week() {
        let range = DateRange::new(d("2024-03-01"), d("2024-03-07"));
        assert_eq!(range.day_count(), 7);
    }

    #[test]
    fn test_day_count_inverted() {
        let range = DateRange::new(d("2024-03-07"), d("2024-03-01"));
        assert_eq!(range.day_count(), 0);
        assert_eq!(range.iter_days().count(), 0);
    }

    #[test]
    fn test_iter_days_ascending_by_one() {
        let range = DateRange::new(d("2024-02-27"), d("2024-03-02"));
        let days: Vec<NaiveDate> = range.iter_days().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], d("2024-02-27"));
        // Leap year: February has 29 days
        assert_eq!(days[2], d("2024-02-29"));
        assert_eq!(days[4], d("2024-03-02"));
        for pair in days.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn test_parse() {
        let range = DateRange::parse("2024-01-01", "2024-01-05").unwrap();
        assert_eq!(range.day_count(), 5);
        assert!(DateRange::parse("2024-13-01", "2024-01-05").is_none());
        assert!(DateRange::parse("01.05.2024", "2024-01-05").is_none());
    }
}
