use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Day-granularity comparisons for calendar dates.
///
/// `NaiveDate` carries no time of day, so every comparison here already
/// ignores it. Month and year differences count as ordering, not just the
/// day of the month.
pub trait CalendarDay {
    fn is_same_day(&self, other: &NaiveDate) -> bool;
    fn is_before(&self, other: &NaiveDate) -> bool;
    fn is_after(&self, other: &NaiveDate) -> bool;
    /// Strictly exclusive on both ends.
    fn is_between(&self, begin: &NaiveDate, end: &NaiveDate) -> bool;
    fn is_today(&self, today: &NaiveDate) -> bool;
    fn is_after_today(&self, today: &NaiveDate) -> bool;
    fn is_before_today(&self, today: &NaiveDate) -> bool;
    /// `None` past the last date chrono can represent.
    fn next_day(&self) -> Option<NaiveDate>;
    fn previous_day(&self) -> Option<NaiveDate>;
}

impl CalendarDay for NaiveDate {
    fn is_same_day(&self, other: &NaiveDate) -> bool {
        self == other
    }

    fn is_before(&self, other: &NaiveDate) -> bool {
        self < other
    }

    fn is_after(&self, other: &NaiveDate) -> bool {
        self > other
    }

    fn is_between(&self, begin: &NaiveDate, end: &NaiveDate) -> bool {
        self.is_after(begin) && self.is_before(end)
    }

    fn is_today(&self, today: &NaiveDate) -> bool {
        self.is_same_day(today)
    }

    fn is_after_today(&self, today: &NaiveDate) -> bool {
        self.is_after(today)
    }

    fn is_before_today(&self, today: &NaiveDate) -> bool {
        self.is_before(today)
    }

    fn next_day(&self) -> Option<NaiveDate> {
        self.succ_opt()
    }

    fn previous_day(&self) -> Option<NaiveDate> {
        self.pred_opt()
    }
}

/// Nearest date strictly before `date`, or the earliest of `dates` when none
/// qualifies. `None` only for an empty sequence.
pub fn immediately_before(date: NaiveDate, dates: &[NaiveDate]) -> Option<NaiveDate> {
    strictly_before(date, dates).or_else(|| dates.iter().min().copied())
}

/// Nearest date strictly after `date`, or the latest of `dates` when none
/// qualifies. `None` only for an empty sequence.
pub fn immediately_after(date: NaiveDate, dates: &[NaiveDate]) -> Option<NaiveDate> {
    strictly_after(date, dates).or_else(|| dates.iter().max().copied())
}

pub fn strictly_before(date: NaiveDate, dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.iter().filter(|d| d.is_before(&date)).max().copied()
}

pub fn strictly_after(date: NaiveDate, dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.iter().filter(|d| d.is_after(&date)).min().copied()
}

pub fn contains_day(dates: &[NaiveDate], date: NaiveDate) -> bool {
    dates.iter().any(|d| d.is_same_day(&date))
}

/// Sorted copy of `dates` with duplicate days removed.
pub fn sorted_unique(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut sorted = dates.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
}

/// The only place the wall clock is read.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> NaiveDate {
    value.date_naive()
}

pub fn from_naive_datetime(value: &NaiveDateTime) -> NaiveDate {
    value.date()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
