//! Date/time helpers built on `chrono`.

use chrono::{DateTime, DurationRound, FixedOffset, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::error::{CommonError, Result};

/// Renders `date_time` as ISO 8601 with 7 fractional digits and an explicit
/// offset, e.g. `2021-06-10T20:30:00.0000000+00:00`.
///
/// With `as_utc` the instant is first converted to UTC, otherwise the original
/// offset is kept.
pub fn to_iso8601<Tz: TimeZone>(date_time: &DateTime<Tz>, as_utc: bool) -> String {
    let fixed: DateTime<FixedOffset> = if as_utc {
        date_time.with_timezone(&Utc).fixed_offset()
    } else {
        date_time.fixed_offset()
    };
    // 100ns ticks.
    let ticks = (fixed.timestamp_subsec_nanos() % 1_000_000_000) / 100;
    format!(
        "{}.{ticks:07}{}",
        fixed.format("%Y-%m-%dT%H:%M:%S"),
        fixed.format("%:z")
    )
}

/// Rounds to the nearest multiple of `span`; exact halves round up.
///
/// # Errors
///
/// [`CommonError::Rounding`] when `span` is not positive or the result is out
/// of range.
pub fn round_to(date_time: DateTime<Utc>, span: TimeDelta) -> Result<DateTime<Utc>> {
    Ok(date_time.duration_round(span)?)
}

/// Midnight UTC of the day `date_time` falls on, in UTC.
pub fn utc_date<Tz: TimeZone>(date_time: &DateTime<Tz>) -> DateTime<Utc> {
    date_time
        .with_timezone(&Utc)
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Every UTC midnight from the day of `start` to the day of `end`.
///
/// Empty when `start` is after `end`. With `strict`, the last date is removed
/// when it is exactly `end`.
pub fn dates_until(start: DateTime<Utc>, end: DateTime<Utc>, strict: bool) -> Vec<DateTime<Utc>> {
    if start > end {
        return Vec::new();
    }
    let last_day = end.date_naive();
    let mut dates: Vec<DateTime<Utc>> = start
        .date_naive()
        .iter_days()
        .take_while(|day| *day <= last_day)
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .collect();
    if strict && dates.last() == Some(&end) {
        dates.pop();
    }
    dates
}

pub fn to_unix_seconds<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp()
}

pub fn to_unix_milliseconds<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp_millis()
}

/// A half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeInterval<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeInterval<Tz> {
    /// # Errors
    ///
    /// [`CommonError::InvalidInterval`] when `end` is before `start`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self> {
        if end < start {
            return Err(CommonError::InvalidInterval {
                start: to_iso8601(&start, false),
                end: to_iso8601(&end, false),
            });
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.clone() - self.start.clone()
    }

    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}
