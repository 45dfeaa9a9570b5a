use std::sync::mpsc::Receiver;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::calendar_date::{
    CalendarDay, contains_day, immediately_after, immediately_before, sorted_unique,
};
use crate::domain::cell_style::{CalendarPurpose, CellSelectionMode, CellStyles};
use crate::domain::date_range::DateRange;
use crate::domain::periods::extract_periods;
use crate::domain::publisher::{Publisher, SubscriptionId};

/// Capability set shared by every way of selecting days on a calendar.
///
/// Callers are expected to filter out past days before reporting a click.
/// Implementations still ignore such clicks silently.
pub trait SelectionManipulation {
    /// What [`SelectionManipulation::commit`] hands to subscribers.
    type Payload: Clone + 'static;

    fn manipulate_date_click(&mut self, date: NaiveDate);

    fn cell_selection_mode<'a>(
        &self,
        date: NaiveDate,
        styles: &'a CellStyles,
    ) -> CellSelectionMode<'a>;

    fn current_payload(&self) -> Self::Payload;

    fn already_selected_dates(&self) -> &[NaiveDate];

    /// Replaces the committed dates wholesale. The next query re-derives
    /// every mode from scratch.
    fn set_already_selected_dates(&mut self, dates: Vec<NaiveDate>);

    /// Drops the live selection. Committed dates are kept.
    fn clear(&mut self);

    fn publisher_mut(&mut self) -> &mut Publisher<Self::Payload>;

    /// Publishes the current selection as a finalized event.
    fn commit(&mut self) {
        let payload = self.current_payload();
        debug!("committing selection");
        self.publisher_mut().publish(payload);
    }

    fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Self::Payload) + 'static,
        Self: Sized,
    {
        self.publisher_mut().subscribe(callback)
    }

    fn subscribe_channel(&mut self) -> Receiver<Self::Payload> {
        self.publisher_mut().subscribe_channel()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.publisher_mut().unsubscribe(id)
    }

    fn is_date_already_selected(&self, date: NaiveDate) -> bool {
        contains_day(self.already_selected_dates(), date)
    }
}

/// Progress of a two-tap range selection. A last date without a first one
/// cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelectionState {
    #[default]
    Empty,
    FirstOnly(NaiveDate),
    Complete(DateRange),
}

impl RangeSelectionState {
    pub fn first_date(&self) -> Option<NaiveDate> {
        match self {
            RangeSelectionState::Empty => None,
            RangeSelectionState::FirstOnly(first) => Some(*first),
            RangeSelectionState::Complete(range) => Some(range.begin()),
        }
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        match self {
            RangeSelectionState::Complete(range) => Some(range.end()),
            _ => None,
        }
    }

    /// First tap opens, second tap closes (in either order), third tap
    /// starts over.
    pub fn after_click(self, date: NaiveDate) -> Self {
        match self {
            RangeSelectionState::Empty => RangeSelectionState::FirstOnly(date),
            RangeSelectionState::FirstOnly(first) => {
                RangeSelectionState::Complete(DateRange::ordered(first, date))
            }
            RangeSelectionState::Complete(_) => RangeSelectionState::FirstOnly(date),
        }
    }
}

/// Commit payload of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedPeriod {
    pub begin_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug)]
pub struct RangedSelection {
    state: RangeSelectionState,
    already_selected: Vec<NaiveDate>,
    today: NaiveDate,
    publisher: Publisher<SelectedPeriod>,
}

impl RangedSelection {
    pub fn new(already_selected: Vec<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            state: RangeSelectionState::Empty,
            already_selected: sorted_unique(&already_selected),
            today,
            publisher: Publisher::new(),
        }
    }

    pub fn state(&self) -> RangeSelectionState {
        self.state
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.state.first_date()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.state.last_date()
    }

    pub fn selected_range(&self) -> Option<DateRange> {
        match self.state {
            RangeSelectionState::Complete(range) => Some(range),
            _ => None,
        }
    }

    /// Committed dates that fall inside the completed range.
    pub fn conflicting_dates(&self) -> Vec<NaiveDate> {
        match self.selected_range() {
            Some(range) => self
                .already_selected
                .iter()
                .copied()
                .filter(|date| range.contains(*date))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Preview for a tentative second endpoint while only `first` is chosen:
    /// the day is enabled when the range it would close contains no
    /// committed day, and shown as committed otherwise. `None` when the
    /// committed days give no answer.
    ///
    /// When `first` lies between two committed days, both of them bound
    /// the enabled window, not only the earlier one.
    fn anchored_mode<'a>(
        &self,
        first: NaiveDate,
        date: NaiveDate,
        styles: &'a CellStyles,
    ) -> Option<CellSelectionMode<'a>> {
        let committed = &self.already_selected;
        if committed.is_empty() {
            return Some(CellSelectionMode::Only(&styles.enabled));
        }
        let before = immediately_before(first, committed)?;
        let after = immediately_after(first, committed)?;
        let earliest = *committed.first()?;
        let latest = *committed.last()?;

        let enabled = CellSelectionMode::Only(&styles.enabled);
        let blocked = CellSelectionMode::Only(&styles.selected);

        if first.is_before(&before) {
            if date.is_before(&earliest) {
                return Some(enabled);
            }
            if date.is_after(&latest) {
                return Some(blocked);
            }
            return None;
        }

        if first.is_between(&before, &after) {
            // Both neighbours are real here, the fallbacks cannot straddle `first`.
            if date.is_between(&before, &after) {
                return Some(enabled);
            }
            return Some(blocked);
        }

        if first.is_after(&after) {
            if date.is_after(&latest) {
                return Some(enabled);
            }
            if date.is_before(&earliest) {
                return Some(blocked);
            }
        }

        None
    }
}

impl SelectionManipulation for RangedSelection {
    type Payload = SelectedPeriod;

    fn manipulate_date_click(&mut self, date: NaiveDate) {
        if date.is_before_today(&self.today) {
            debug!(%date, "ignoring click on a past date");
            return;
        }
        self.state = self.state.after_click(date);
        debug!(%date, state = ?self.state, "range selection updated");
    }

    fn cell_selection_mode<'a>(
        &self,
        date: NaiveDate,
        styles: &'a CellStyles,
    ) -> CellSelectionMode<'a> {
        // Past days are never actionable, see `StyleRole::Disabled`.
        if date.is_before_today(&self.today) {
            return CellSelectionMode::None(&styles.disabled);
        }

        if self.is_date_already_selected(date) {
            return CellSelectionMode::Only(&styles.selected);
        }

        match self.state {
            RangeSelectionState::Empty => CellSelectionMode::None(&styles.disabled),
            RangeSelectionState::FirstOnly(first) if date.is_same_day(&first) => {
                CellSelectionMode::Only(&styles.selection)
            }
            RangeSelectionState::FirstOnly(first) => self
                .anchored_mode(first, date, styles)
                .unwrap_or(CellSelectionMode::Only(&styles.selected)),
            RangeSelectionState::Complete(range) => {
                if date.is_same_day(&range.begin()) {
                    CellSelectionMode::Begin(&styles.selection)
                } else if date.is_same_day(&range.end()) {
                    CellSelectionMode::End(&styles.selection)
                } else if date.is_between(&range.begin(), &range.end()) {
                    CellSelectionMode::Medium(&styles.selection)
                } else {
                    CellSelectionMode::None(&styles.disabled)
                }
            }
        }
    }

    fn current_payload(&self) -> SelectedPeriod {
        SelectedPeriod {
            begin_date: self.first_date(),
            end_date: self.last_date(),
        }
    }

    fn already_selected_dates(&self) -> &[NaiveDate] {
        &self.already_selected
    }

    fn set_already_selected_dates(&mut self, dates: Vec<NaiveDate>) {
        self.already_selected = sorted_unique(&dates);
    }

    fn clear(&mut self) {
        self.state = RangeSelectionState::Empty;
    }

    fn publisher_mut(&mut self) -> &mut Publisher<SelectedPeriod> {
        &mut self.publisher
    }
}

/// Independent day toggles.
#[derive(Debug)]
pub struct SingledSelection {
    selected_dates: Vec<NaiveDate>,
    already_selected: Vec<NaiveDate>,
    today: NaiveDate,
    publisher: Publisher<Vec<NaiveDate>>,
}

impl SingledSelection {
    pub fn new(already_selected: Vec<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            selected_dates: Vec::new(),
            already_selected: sorted_unique(&already_selected),
            today,
            publisher: Publisher::new(),
        }
    }

    /// Live selection in tap order.
    pub fn selected_dates(&self) -> &[NaiveDate] {
        &self.selected_dates
    }

    pub fn selected_periods(&self) -> Vec<DateRange> {
        extract_periods(&self.selected_dates)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

impl SelectionManipulation for SingledSelection {
    type Payload = Vec<NaiveDate>;

    fn manipulate_date_click(&mut self, date: NaiveDate) {
        if date.is_before_today(&self.today) {
            debug!(%date, "ignoring click on a past date");
            return;
        }

        match self.selected_dates.iter().position(|d| d.is_same_day(&date)) {
            Some(index) => {
                self.selected_dates.remove(index);
                debug!(%date, "day deselected");
            }
            None => {
                self.selected_dates.push(date);
                debug!(%date, "day selected");
            }
        }
    }

    fn cell_selection_mode<'a>(
        &self,
        date: NaiveDate,
        styles: &'a CellStyles,
    ) -> CellSelectionMode<'a> {
        if self.is_date_already_selected(date) {
            return CellSelectionMode::Only(&styles.selected);
        }

        if contains_day(&self.selected_dates, date) {
            return CellSelectionMode::Only(&styles.selection);
        }

        CellSelectionMode::None(&styles.enabled)
    }

    fn current_payload(&self) -> Vec<NaiveDate> {
        self.selected_dates.clone()
    }

    fn already_selected_dates(&self) -> &[NaiveDate] {
        &self.already_selected
    }

    fn set_already_selected_dates(&mut self, dates: Vec<NaiveDate>) {
        self.already_selected = sorted_unique(&dates);
    }

    fn clear(&mut self) {
        self.selected_dates.clear();
    }

    fn publisher_mut(&mut self) -> &mut Publisher<Vec<NaiveDate>> {
        &mut self.publisher
    }
}

/// Commit payload of a [`CalendarSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Period(SelectedPeriod),
    Dates(Vec<NaiveDate>),
}

#[derive(Debug)]
pub enum SelectionEngine {
    Ranged(RangedSelection),
    Singled(SingledSelection),
}

/// One calendar instance: the engine its purpose calls for, plus a
/// publisher of purpose-independent events.
#[derive(Debug)]
pub struct CalendarSelection {
    purpose: CalendarPurpose,
    engine: SelectionEngine,
    publisher: Publisher<SelectionEvent>,
}

impl CalendarSelection {
    pub fn new(purpose: CalendarPurpose, already_selected: Vec<NaiveDate>, today: NaiveDate) -> Self {
        let engine = match purpose {
            CalendarPurpose::CheckIn => {
                SelectionEngine::Ranged(RangedSelection::new(already_selected, today))
            }
            CalendarPurpose::Unavailability => {
                SelectionEngine::Singled(SingledSelection::new(already_selected, today))
            }
        };
        Self {
            purpose,
            engine,
            publisher: Publisher::new(),
        }
    }

    pub fn purpose(&self) -> CalendarPurpose {
        self.purpose
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn as_ranged(&self) -> Option<&RangedSelection> {
        match &self.engine {
            SelectionEngine::Ranged(ranged) => Some(ranged),
            SelectionEngine::Singled(_) => None,
        }
    }

    pub fn as_singled(&self) -> Option<&SingledSelection> {
        match &self.engine {
            SelectionEngine::Singled(singled) => Some(singled),
            SelectionEngine::Ranged(_) => None,
        }
    }
}

impl SelectionManipulation for CalendarSelection {
    type Payload = SelectionEvent;

    fn manipulate_date_click(&mut self, date: NaiveDate) {
        match &mut self.engine {
            SelectionEngine::Ranged(ranged) => ranged.manipulate_date_click(date),
            SelectionEngine::Singled(singled) => singled.manipulate_date_click(date),
        }
    }

    fn cell_selection_mode<'a>(
        &self,
        date: NaiveDate,
        styles: &'a CellStyles,
    ) -> CellSelectionMode<'a> {
        match &self.engine {
            SelectionEngine::Ranged(ranged) => ranged.cell_selection_mode(date, styles),
            SelectionEngine::Singled(singled) => singled.cell_selection_mode(date, styles),
        }
    }

    fn current_payload(&self) -> SelectionEvent {
        match &self.engine {
            SelectionEngine::Ranged(ranged) => SelectionEvent::Period(ranged.current_payload()),
            SelectionEngine::Singled(singled) => SelectionEvent::Dates(singled.current_payload()),
        }
    }

    fn already_selected_dates(&self) -> &[NaiveDate] {
        match &self.engine {
            SelectionEngine::Ranged(ranged) => ranged.already_selected_dates(),
            SelectionEngine::Singled(singled) => singled.already_selected_dates(),
        }
    }

    fn set_already_selected_dates(&mut self, dates: Vec<NaiveDate>) {
        match &mut self.engine {
            SelectionEngine::Ranged(ranged) => ranged.set_already_selected_dates(dates),
            SelectionEngine::Singled(singled) => singled.set_already_selected_dates(dates),
        }
    }

    fn clear(&mut self) {
        match &mut self.engine {
            SelectionEngine::Ranged(ranged) => ranged.clear(),
            SelectionEngine::Singled(singled) => singled.clear(),
        }
    }

    fn publisher_mut(&mut self) -> &mut Publisher<SelectionEvent> {
        &mut self.publisher
    }
}
