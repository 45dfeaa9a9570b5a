use chrono::{Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("invalid date range: begin {begin} is after end {end}")]
    Inverted { begin: NaiveDate, end: NaiveDate },
}

/// An inclusive range of calendar days with `begin <= end`.
///
/// A single isolated day is represented as `begin == end`. Consumers that
/// think in open time intervals must treat that case explicitly; the range
/// is never widened to fake a non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DateRange {
    begin: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if begin > end {
            return Err(DateRangeError::Inverted { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            begin: date,
            end: date,
        }
    }

    /// Builds a range from two endpoints given in any order.
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.begin == self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.begin && date <= self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    pub fn len_days(&self) -> u64 {
        (self.end - self.begin).num_days() as u64 + 1
    }

    pub(crate) fn extend_to(&mut self, date: NaiveDate) {
        if date > self.end {
            self.end = date;
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let begin = self.begin;
        (0..self.len_days()).filter_map(move |offset| begin.checked_add_days(Days::new(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn new_rejects_begin_after_end() {
        let err = DateRange::new(on_date(2026, 2, 21), on_date(2026, 2, 20)).unwrap_err();
        assert!(matches!(err, DateRangeError::Inverted { .. }));
    }

    #[test]
    fn ordered_sorts_its_endpoints() {
        let range = DateRange::ordered(on_date(2026, 2, 5), on_date(2026, 2, 3));
        assert_eq!(range.begin(), on_date(2026, 2, 3));
        assert_eq!(range.end(), on_date(2026, 2, 5));
    }

    #[test]
    fn single_day_range_has_equal_endpoints_and_one_day() {
        let range = DateRange::single_day(on_date(2026, 2, 27));
        assert!(range.is_single_day());
        assert_eq!(range.len_days(), 1);
        assert!(range.contains(on_date(2026, 2, 27)));
        assert!(!range.contains(on_date(2026, 2, 28)));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(on_date(2026, 2, 16), on_date(2026, 2, 20)).unwrap();

        let test_cases = vec![
            (on_date(2026, 2, 15), false),
            (on_date(2026, 2, 16), true),
            (on_date(2026, 2, 18), true),
            (on_date(2026, 2, 20), true),
            (on_date(2026, 2, 21), false),
        ];

        for (date, expected) in test_cases {
            assert_eq!(
                range.contains(date),
                expected,
                "Expected contains({}) to be {}",
                date,
                expected
            );
        }
    }

    #[test]
    fn days_enumerates_across_month_boundaries() {
        let range = DateRange::new(on_date(2026, 2, 27), on_date(2026, 3, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                on_date(2026, 2, 27),
                on_date(2026, 2, 28),
                on_date(2026, 3, 1),
                on_date(2026, 3, 2),
            ]
        );
    }

    #[test]
    fn overlapping_ranges_share_at_least_one_day() {
        let a = DateRange::new(on_date(2026, 2, 1), on_date(2026, 2, 5)).unwrap();
        let b = DateRange::new(on_date(2026, 2, 5), on_date(2026, 2, 9)).unwrap();
        let c = DateRange::new(on_date(2026, 2, 6), on_date(2026, 2, 9)).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
