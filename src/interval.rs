use crate::DateError;
use crate::consts::HOURS_PER_DAY;
use crate::prelude::*;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The half-open instant range `[start, end)` covering one calendar day in a
/// given time zone, used to filter time-stamped records down to "events on
/// this day".
///
/// The window is always exactly 24 hours wide, anchored at the day's local
/// midnight and stored as UTC instants. On DST transition days the local
/// clock day is shorter or longer than 24 hours; the window is not adjusted
/// to match, so a record stamped in the final clock hour of a 25-hour day
/// lands in the next day's bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{start}, {end})")]
pub struct DayInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayInterval {
    /// Resolves the day interval for a calendar date in a time zone.
    ///
    /// A midnight that repeats in the zone (DST fold) anchors the window at
    /// its first occurrence. A midnight skipped by a DST gap anchors it at
    /// the first valid local time after the gap, matching how
    /// `java.time`-based callers resolved the same dates.
    ///
    /// # Errors
    /// Returns `DateError::InvalidLocalTime` if no instant near local
    /// midnight exists in the zone (the zone skipped the date outright).
    pub fn for_date(date: NaiveDate, zone: Tz) -> Result<Self, DateError> {
        let midnight = date.and_time(NaiveTime::MIN);
        let start = match zone.from_local_datetime(&midnight) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(first, _) => first,
            LocalResult::None => zone
                .from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
                .ok_or(DateError::InvalidLocalTime { date, zone })?,
        }
        .with_timezone(&Utc);

        Ok(Self {
            start,
            end: start + Duration::hours(HOURS_PER_DAY),
        })
    }

    /// Inclusive lower bound
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The filter predicate: `start <= instant < end`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        (self.start..self.end).contains(&instant)
    }

    /// Width of the window. Always exactly 24 hours.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
