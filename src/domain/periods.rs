use chrono::NaiveDate;

use crate::domain::calendar_date::{CalendarDay, sorted_unique};
use crate::domain::date_range::DateRange;

/// Folds individually selected days into the minimal list of contiguous,
/// ascending ranges. Duplicate days are ignored and isolated days become
/// single-day ranges.
pub fn extract_periods(dates: &[NaiveDate]) -> Vec<DateRange> {
    let mut periods = Vec::new();
    let mut open: Option<DateRange> = None;

    for date in sorted_unique(dates) {
        open = match open {
            Some(mut range) if range.end().next_day() == Some(date) => {
                range.extend_to(date);
                Some(range)
            }
            Some(range) => {
                periods.push(range);
                Some(DateRange::single_day(date))
            }
            None => Some(DateRange::single_day(date)),
        };
    }

    if let Some(range) = open {
        periods.push(range);
    }
    periods
}

/// Enumerates every day of every range, in range order.
pub fn expand_periods(periods: &[DateRange]) -> Vec<NaiveDate> {
    periods.iter().flat_map(DateRange::days).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    fn range(begin: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(begin, end).unwrap()
    }

    #[test]
    fn extract_periods_splits_on_gaps() {
        let dates = vec![
            on_date(2026, 2, 1),
            on_date(2026, 2, 2),
            on_date(2026, 2, 3),
            on_date(2026, 2, 5),
        ];

        assert_eq!(
            extract_periods(&dates),
            vec![
                range(on_date(2026, 2, 1), on_date(2026, 2, 3)),
                range(on_date(2026, 2, 5), on_date(2026, 2, 5)),
            ]
        );
    }

    #[test]
    fn extract_periods_of_a_gap_free_run_is_one_range() {
        let dates: Vec<_> = (1..=28).map(|day| on_date(2026, 2, day)).collect();
        assert_eq!(
            extract_periods(&dates),
            vec![range(on_date(2026, 2, 1), on_date(2026, 2, 28))]
        );
    }

    #[test]
    fn extract_periods_sorts_and_ignores_duplicates() {
        let dates = vec![
            on_date(2026, 3, 1),
            on_date(2026, 2, 27),
            on_date(2026, 2, 28),
            on_date(2026, 2, 28),
            on_date(2026, 2, 10),
        ];

        assert_eq!(
            extract_periods(&dates),
            vec![
                range(on_date(2026, 2, 10), on_date(2026, 2, 10)),
                range(on_date(2026, 2, 27), on_date(2026, 3, 1)),
            ]
        );
    }

    #[test]
    fn extract_periods_of_nothing_is_nothing() {
        assert!(extract_periods(&[]).is_empty());
        assert!(expand_periods(&[]).is_empty());
    }

    #[test]
    fn single_isolated_day_keeps_equal_endpoints() {
        let periods = extract_periods(&[on_date(2026, 2, 14)]);
        assert_eq!(periods.len(), 1);
        assert!(periods[0].is_single_day());
    }

    #[test]
    fn expand_after_extract_yields_sorted_unique_dates() {
        let dates = vec![
            on_date(2026, 4, 2),
            on_date(2025, 12, 31),
            on_date(2026, 1, 1),
            on_date(2026, 4, 2),
            on_date(2026, 3, 31),
            on_date(2026, 4, 1),
            on_date(2026, 2, 14),
        ];

        let expected = vec![
            on_date(2025, 12, 31),
            on_date(2026, 1, 1),
            on_date(2026, 2, 14),
            on_date(2026, 3, 31),
            on_date(2026, 4, 1),
            on_date(2026, 4, 2),
        ];

        assert_eq!(expand_periods(&extract_periods(&dates)), expected);
    }

    #[test]
    fn expand_after_extract_matches_sorted_unique_input_for_varied_sets() {
        let run_over_new_year: Vec<NaiveDate> = (0..10)
            .map(|offset| on_date(2025, 12, 27) + chrono::Days::new(offset))
            .collect();
        let every_third_day: Vec<NaiveDate> = (0..40)
            .rev()
            .step_by(3)
            .map(|offset| on_date(2026, 1, 15) + chrono::Days::new(offset))
            .collect();

        let test_cases: Vec<Vec<NaiveDate>> = vec![
            vec![],
            vec![on_date(2026, 2, 14)],
            vec![on_date(2026, 2, 14); 4],
            vec![on_date(2025, 12, 31), on_date(2026, 1, 1)],
            vec![on_date(2024, 2, 28), on_date(2024, 3, 1), on_date(2024, 2, 29)],
            run_over_new_year,
            every_third_day,
        ];

        for dates in test_cases {
            let mut expected = dates.clone();
            expected.sort();
            expected.dedup();

            assert_eq!(
                expand_periods(&extract_periods(&dates)),
                expected,
                "round trip of {dates:?}"
            );
        }
    }
}
