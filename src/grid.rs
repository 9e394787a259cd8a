use crate::consts::WEEK_LEN;
use crate::prelude::*;
use crate::{DateError, YearMonth};
use chrono::{Datelike, NaiveDate, Weekday};

/// One slot in a month grid: a concrete day, or blank padding before the
/// first of the month and after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarCell {
    /// Padding cell with nothing to render
    #[display(fmt = "")]
    Empty,
    /// A day of the month being displayed
    #[display(fmt = "{}", "_0.day()")]
    Day(NaiveDate),
}

impl CalendarCell {
    /// The date in this cell, if it holds one
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Empty => None,
            Self::Day(date) => Some(date),
        }
    }

    /// True for padding cells
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One week of the grid. Always exactly 7 cells, Sunday through Saturday.
pub type WeekRow = [CalendarCell; WEEK_LEN];

/// Short column labels, in grid column order (Sunday-first).
pub const WEEKDAY_LABELS: [&str; WEEK_LEN] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A week-partitioned layout of one month, ready for a month-view renderer.
///
/// Columns run Sunday..Saturday. The first row is padded with `Empty` cells
/// so day 1 sits under its weekday column, and the last row is padded after
/// the final day; every row is exactly 7 cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// Lays out the grid for a month.
    pub fn for_month(month: YearMonth) -> Self {
        let mut weeks = Vec::with_capacity(6);
        let mut row = [CalendarCell::Empty; WEEK_LEN];
        let mut col = column_of(month.first_day().weekday());

        for date in month.days() {
            row[col] = CalendarCell::Day(date);
            col += 1;
            if col == WEEK_LEN {
                weeks.push(row);
                row = [CalendarCell::Empty; WEEK_LEN];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(row);
        }

        Self { month, weeks }
    }

    /// The month this grid lays out
    pub const fn month(&self) -> YearMonth {
        self.month
    }

    /// The week rows, top to bottom
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Every date of the month in calendar order, skipping padding
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks
            .iter()
            .flatten()
            .filter_map(|cell| cell.date())
    }

    /// (row, column) of the cell holding `date`, if the date is in this month
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| cell.date() == Some(date))
                .map(|col| (row, col))
        })
    }
}

/// Grid column for a weekday, with Sunday in column 0.
pub fn column_of(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// Builds the month grid from raw year and month numbers.
///
/// # Errors
/// Returns `DateError::InvalidYear` or `DateError::InvalidMonth` for
/// out-of-range input, e.g. `build_month_grid(2025, 13)`.
pub fn build_month_grid(year: u16, month: u8) -> Result<MonthGrid, DateError> {
    Ok(MonthGrid::for_month(YearMonth::of(year, month)?))
}
