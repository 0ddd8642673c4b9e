//! Civil calendar timestamp with sub-second precision.
//!
//! Provides `UtcTime`, the timestamp accepted by every public entry point of
//! the engine. Validation is explicit: a structurally invalid date is an
//! error, it is never clamped into range.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    calendar_to_jd, days_in_month, jd_to_calendar, jd_to_centuries, unix_seconds_to_jd,
};

/// Civil calendar date and time (UTC by convention).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given calendar day.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check every calendar field against the Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be in 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Fraction of the day elapsed, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second / 86_400.0
    }

    /// Julian Date of this timestamp.
    pub fn to_jd(&self) -> Result<f64, TimeError> {
        self.validate()?;
        Ok(calendar_to_jd(
            self.year,
            self.month,
            self.day as f64 + self.day_fraction(),
        ))
    }

    /// Julian centuries since J2000.0.
    pub fn to_centuries(&self) -> Result<f64, TimeError> {
        Ok(jd_to_centuries(self.to_jd()?))
    }

    /// Convert a Julian Date back to a calendar timestamp, rounded to the
    /// nearest millisecond.
    pub fn from_jd(jd: f64) -> Self {
        const MS_PER_DAY: f64 = 86_400_000.0;

        let shifted = jd + 0.5;
        let mut whole_days = shifted.floor();
        let mut ms = ((shifted - whole_days) * MS_PER_DAY).round();
        if ms >= MS_PER_DAY {
            ms -= MS_PER_DAY;
            whole_days += 1.0;
        }

        // whole_days - 0.5 is a civil midnight, so the day fraction is integral.
        let (year, month, day_frac) = jd_to_calendar(whole_days - 0.5);
        let ms = ms as u64;
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: (ms / 3_600_000) as u32,
            minute: ((ms / 60_000) % 60) as u32,
            second: (ms % 60_000) as f64 / 1000.0,
        }
    }

    /// Timestamp from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::from_jd(unix_seconds_to_jd(seconds))
    }

    /// Shift a local civil time by a fixed UTC offset (hours east of Greenwich)
    /// to obtain the corresponding UTC timestamp.
    pub fn local_to_utc(&self, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let jd = self.to_jd()?;
        Ok(Self::from_jd(jd - utc_offset_hours / 24.0))
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss[.fff]`,
    /// with an optional trailing `Z`. A space may replace the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_suffix('Z')
            .or_else(|| trimmed.strip_suffix('z'))
            .unwrap_or(trimmed);

        let (date_part, time_part) = match body.split_once(|c| c == 'T' || c == 't' || c == ' ') {
            Some((d, t)) => (d, Some(t)),
            None => (body, None),
        };

        let mut date_fields = date_part.splitn(3, '-');
        let year = parse_field::<i32>(date_fields.next(), "year", s)?;
        let month = parse_field::<u32>(date_fields.next(), "month", s)?;
        let day = parse_field::<u32>(date_fields.next(), "day", s)?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut fields = t.split(':');
                let hour = parse_field::<u32>(fields.next(), "hour", s)?;
                let minute = parse_field::<u32>(fields.next(), "minute", s)?;
                let second = match fields.next() {
                    Some(sec) => parse_field::<f64>(Some(sec), "second", s)?,
                    None => 0.0,
                };
                if fields.next().is_some() {
                    return Err(TimeError::Parse(format!("too many time fields in '{s}'")));
                }
                (hour, minute, second)
            }
        };

        let time = Self::new(year, month, day, hour, minute, second);
        time.validate()?;
        Ok(time)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str, input: &str) -> Result<T, TimeError> {
    let raw = field.ok_or_else(|| TimeError::Parse(format!("missing {name} in '{input}'")))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| TimeError::Parse(format!("bad {name} '{raw}' in '{input}'")))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
