use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::calendar_date::CalendarDay;
use crate::domain::cell_style::CalendarPurpose;
use crate::domain::selection::{CalendarSelection, SelectionEvent, SelectionManipulation};

/// A recorded sequence of taps against one calendar instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub purpose: CalendarPurpose,
    pub today: NaiveDate,
    pub already_selected: Vec<NaiveDate>,
    pub taps: Vec<NaiveDate>,
    /// Commit after every tap, like the widget does; otherwise commit once
    /// after the last tap.
    pub commit_each_tap: bool,
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub selection: CalendarSelection,
    pub events: Vec<SelectionEvent>,
    /// Taps on days before `today`, filtered out before reaching the engine.
    pub skipped_taps: Vec<NaiveDate>,
}

/// Plays the taps of `scenario` the way the calendar view would: past days
/// are filtered before the engine sees them, and every accepted tap is
/// followed by a commit.
pub fn replay_scenario(scenario: &Scenario) -> ReplayOutcome {
    let mut selection = CalendarSelection::new(
        scenario.purpose,
        scenario.already_selected.clone(),
        scenario.today,
    );
    let receiver = selection.subscribe_channel();
    let mut skipped_taps = Vec::new();

    for tap in &scenario.taps {
        if tap.is_before_today(&scenario.today) {
            warn!(date = %tap, "skipping tap on a past date");
            skipped_taps.push(*tap);
            continue;
        }
        selection.manipulate_date_click(*tap);
        if scenario.commit_each_tap {
            selection.commit();
        }
    }

    if !scenario.commit_each_tap {
        selection.commit();
    }

    let events: Vec<SelectionEvent> = receiver.try_iter().collect();
    debug!(events = events.len(), "scenario replayed");

    ReplayOutcome {
        selection,
        events,
        skipped_taps,
    }
}
