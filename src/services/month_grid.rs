use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthGridError {
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("month {year}-{month} does not fit in {rows} rows")]
    TooFewRows { year: i32, month: u32, rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `false` for the leading and trailing days of the neighbouring months.
    pub belongs_to_month: bool,
}

/// A Monday-first month page padded with neighbouring days up to a fixed
/// number of rows, the way the calendar view lays out its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<[GridCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, number_of_rows: usize) -> Result<Self, MonthGridError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(MonthGridError::InvalidMonth { year, month })?;
        let leading = first.weekday().num_days_from_monday() as u64;
        let grid_start = first
            .checked_sub_days(Days::new(leading))
            .ok_or(MonthGridError::InvalidMonth { year, month })?;

        let needed_rows = (leading as usize + days_in_month(first)).div_ceil(DAYS_PER_WEEK);
        if needed_rows > number_of_rows {
            return Err(MonthGridError::TooFewRows {
                year,
                month,
                rows: number_of_rows,
            });
        }

        let mut rows = Vec::with_capacity(number_of_rows);
        for row in 0..number_of_rows {
            let mut week = [GridCell {
                date: grid_start,
                belongs_to_month: false,
            }; DAYS_PER_WEEK];
            for (column, cell) in week.iter_mut().enumerate() {
                let offset = (row * DAYS_PER_WEEK + column) as u64;
                let date = grid_start
                    .checked_add_days(Days::new(offset))
                    .ok_or(MonthGridError::InvalidMonth { year, month })?;
                *cell = GridCell {
                    date,
                    belongs_to_month: date.month() == month && date.year() == year,
                };
            }
            rows.push(week);
        }

        Ok(Self { year, month, rows })
    }

    pub fn containing(date: NaiveDate, number_of_rows: usize) -> Result<Self, MonthGridError> {
        Self::new(date.year(), date.month(), number_of_rows)
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flat_map(|week| week.iter())
    }

    pub fn month_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells()
            .filter(|cell| cell.belongs_to_month)
            .map(|cell| cell.date)
    }
}

fn days_in_month(first: NaiveDate) -> usize {
    let next_month = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first);
    (next_month - first).num_days() as usize
}
