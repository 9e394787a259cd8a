mod consts;
mod grid;
mod interval;
mod prelude;
mod types;
mod workout;

pub use consts::*;
pub use grid::{CalendarCell, MonthGrid, WEEKDAY_LABELS, WeekRow, build_month_grid, column_of};
pub use interval::DayInterval;
pub use types::{Month, Year, days_in_month, is_leap_year};
pub use workout::{Exercise, ExerciseSet, SetType, Workout, workout_on, workouts_in};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A calendar month in a specific year, the unit the month view navigates by.
/// Both components are validated on construction, so every value is a real
/// month between 0001-01 and 9999-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year: Year,
    month: Month,
}

/// Error type for calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input string was empty or all whitespace.
    #[error("Empty date string")]
    EmptyInput,

    /// Input did not match the expected shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside `1..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(i32),

    /// Month outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day outside the month's length.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// No instant corresponds to the requested local time in the zone.
    #[error("No valid local time for {date} in {zone}")]
    InvalidLocalTime {
        date: NaiveDate,
        zone: chrono_tz::Tz,
    },
}

impl YearMonth {
    /// Creates a year-month from already-validated components.
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a year-month from raw numbers, validating both.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` or `DateError::InvalidMonth` for
    /// out-of-range components.
    pub fn of(year: u16, month: u8) -> Result<Self, DateError> {
        Ok(Self::new(Year::new(year)?, Month::new(month)?))
    }

    /// The month containing the given date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the date's year falls outside the
    /// supported `1..=9999` range.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateError> {
        let year = u16::try_from(date.year())
            .map_err(|_| DateError::InvalidYear(date.year()))
            .and_then(Year::new)?;
        let month = Month::new(date.month() as u8)?;
        Ok(Self::new(year, month))
    }

    /// Returns the year component
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month component
    pub const fn month(self) -> Month {
        self.month
    }

    /// Number of days in this month (28..=31, leap-aware)
    pub const fn length(self) -> u8 {
        self.month.days(self.year)
    }

    /// First calendar date of this month
    pub fn first_day(self) -> NaiveDate {
        self.at(MIN_DAY)
    }

    /// Last calendar date of this month
    pub fn last_day(self) -> NaiveDate {
        self.at(self.length())
    }

    /// The date of a specific day in this month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is 0 or past the month's end.
    pub fn day(self, day: u8) -> Result<NaiveDate, DateError> {
        if !(MIN_DAY..=self.length()).contains(&day) {
            return Err(DateError::InvalidDay {
                year: self.year.get(),
                month: self.month.get(),
                day,
            });
        }
        Ok(self.at(day))
    }

    /// Ordered iterator over every date in this month
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        (MIN_DAY..=self.length()).map(move |d| self.at(d))
    }

    /// The following month. `None` past December 9999.
    pub fn next(self) -> Option<Self> {
        if self.month.get() == DECEMBER {
            if self.year.get() >= MAX_YEAR {
                return None;
            }
            Some(Self::new(
                Year::new(self.year.get() + 1).ok()?,
                Month::new(JANUARY).ok()?,
            ))
        } else {
            Some(Self::new(self.year, Month::new(self.month.get() + 1).ok()?))
        }
    }

    /// The preceding month. `None` before January 1.
    pub fn pred(self) -> Option<Self> {
        if self.month.get() == JANUARY {
            if self.year.get() <= 1 {
                return None;
            }
            Some(Self::new(
                Year::new(self.year.get() - 1).ok()?,
                Month::new(DECEMBER).ok()?,
            ))
        } else {
            Some(Self::new(self.year, Month::new(self.month.get() - 1).ok()?))
        }
    }

    // Year is 1..=9999 and Month is 1..=12, both inside chrono's supported
    // range; callers never pass a day past the month length.
    #[allow(clippy::expect_used)]
    fn at(self, day: u8) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(day),
        )
        .expect("validated year-month-day is representable")
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strict ISO shape: YYYY-MM
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 2 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM, found: {trimmed}"
            )));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;

        Self::of(year, month)
    }
}

impl TryFrom<(u16, u8)> for YearMonth {
    type Error = DateError;

    fn try_from(value: (u16, u8)) -> Result<Self, Self::Error> {
        Self::of(value.0, value.1)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ym};

    #[test]
    fn test_of_valid() {
        let m = YearMonth::of(2025, 6).unwrap();
        assert_eq!(m.year().get(), 2025);
        assert_eq!(m.month().get(), 6);
    }

    #[test]
    fn test_of_invalid_month() {
        let result = YearMonth::of(2025, 13);
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = YearMonth::of(2025, 0);
        assert!(matches!(result, Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_of_invalid_year() {
        let result = YearMonth::of(0, 6);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));

        let result = YearMonth::of(10000, 6);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_from_date() {
        let m = YearMonth::from_date(date(2025, 6, 17)).unwrap();
        assert_eq!(m, ym(2025, 6));
    }

    #[test]
    fn test_from_date_year_out_of_range() {
        let early = NaiveDate::from_ymd_opt(0, 6, 17).unwrap();
        let result = YearMonth::from_date(early);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));

        let late = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let result = YearMonth::from_date(late);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_length() {
        assert_eq!(ym(2025, 2).length(), 28);
        assert_eq!(ym(2024, 2).length(), 29);
        assert_eq!(ym(2025, 1).length(), 31);
        assert_eq!(ym(2025, 4).length(), 30);
    }

    #[test]
    fn test_first_and_last_day() {
        let m = ym(2025, 6);
        assert_eq!(m.first_day(), date(2025, 6, 1));
        assert_eq!(m.last_day(), date(2025, 6, 30));

        let leap_feb = ym(2024, 2);
        assert_eq!(leap_feb.last_day(), date(2024, 2, 29));
    }

    #[test]
    fn test_day_valid() {
        let m = ym(2025, 6);
        assert_eq!(m.day(17).unwrap(), date(2025, 6, 17));
    }

    #[test]
    fn test_day_invalid() {
        let result = ym(2025, 2).day(29);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2025,
                month: 2,
                day: 29
            })
        ));

        let result = ym(2025, 2).day(0);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_days_iterator() {
        let days: Vec<_> = ym(2025, 2).days().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], date(2025, 2, 1));
        assert_eq!(days[27], date(2025, 2, 28));

        // Strictly increasing
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_next_and_pred() {
        assert_eq!(ym(2025, 6).next(), Some(ym(2025, 7)));
        assert_eq!(ym(2025, 12).next(), Some(ym(2026, 1)));
        assert_eq!(ym(2025, 1).pred(), Some(ym(2024, 12)));
        assert_eq!(ym(2025, 6).pred(), Some(ym(2025, 5)));
    }

    #[test]
    fn test_next_and_pred_at_bounds() {
        assert_eq!(ym(9999, 12).next(), None);
        assert_eq!(ym(9999, 11).next(), Some(ym(9999, 12)));
        assert_eq!(ym(1, 1).pred(), None);
        assert_eq!(ym(1, 2).pred(), Some(ym(1, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2025, 6).to_string(), "2025-06");
        assert_eq!(ym(987, 12).to_string(), "0987-12");
    }

    #[test]
    fn test_parse() {
        let m = "2025-06".parse::<YearMonth>().unwrap();
        assert_eq!(m, ym(2025, 6));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let m = " 2025 - 06 ".parse::<YearMonth>().unwrap();
        assert_eq!(m, ym(2025, 6));
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::EmptyInput)));

        let result = "   ".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::EmptyInput)));
    }

    #[test]
    fn test_parse_invalid_shape() {
        // Bare year is not a year-month
        let result = "2025".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        // Full dates are not accepted either
        let result = "2025-06-17".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "20XX-06".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "2025-JUN".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_out_of_range_components() {
        let result = "2025-13".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = "0-06".parse::<YearMonth>();
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_try_from_tuple() {
        let m: YearMonth = (2025, 6).try_into().unwrap();
        assert_eq!(m, ym(2025, 6));

        let result: Result<YearMonth, _> = (2025, 13).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(ym(2024, 12) < ym(2025, 1));
        assert!(ym(2025, 1) < ym(2025, 2));
        assert_eq!(ym(2025, 6), ym(2025, 6));
    }

    #[test]
    fn test_serde_string_format() {
        let m = ym(2025, 6);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#""2025-06""#);

        let parsed: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<YearMonth, _> = serde_json::from_str(r#""2025-13""#);
        assert!(result.is_err());

        let result: Result<YearMonth, _> = serde_json::from_str(r#""not a month""#);
        assert!(result.is_err());
    }
}
