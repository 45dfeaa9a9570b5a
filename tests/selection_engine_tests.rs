use chrono::NaiveDate;

use calpick::domain::cell_style::{CalendarPurpose, CellSelectionMode, StyleRole};
use calpick::domain::periods::extract_periods;
use calpick::domain::selection::{CalendarSelection, SelectionEvent, SelectionManipulation};

fn feb(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

#[test]
fn check_in_selection_publishes_range_to_channel_subscribers() {
    let styles = CalendarPurpose::CheckIn.cell_styles();
    let mut selection = CalendarSelection::new(CalendarPurpose::CheckIn, vec![feb(20)], feb(1));
    let receiver = selection.subscribe_channel();

    selection.manipulate_date_click(feb(14));
    selection.manipulate_date_click(feb(16));
    selection.commit();

    assert!(matches!(
        selection.cell_selection_mode(feb(15), &styles),
        CellSelectionMode::Medium(_)
    ));
    assert_eq!(
        selection.cell_selection_mode(feb(20), &styles).role(),
        StyleRole::Selected
    );

    let event = receiver.try_recv().unwrap();
    match event {
        SelectionEvent::Period(period) => {
            assert_eq!(period.begin_date, Some(feb(14)));
            assert_eq!(period.end_date, Some(feb(16)));
        }
        SelectionEvent::Dates(_) => panic!("expected a period event"),
    }
}

#[test]
fn unavailability_selection_emits_dates_that_fold_into_periods() {
    let mut selection =
        CalendarSelection::new(CalendarPurpose::Unavailability, Vec::new(), feb(1));
    let receiver = selection.subscribe_channel();

    for day in [3, 4, 5, 9] {
        selection.manipulate_date_click(feb(day));
    }
    selection.commit();

    let SelectionEvent::Dates(dates) = receiver.try_recv().unwrap() else {
        panic!("expected a dates event");
    };
    let periods = extract_periods(&dates);
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].begin(), feb(3));
    assert_eq!(periods[0].end(), feb(5));
    assert!(periods[1].is_single_day());
}
