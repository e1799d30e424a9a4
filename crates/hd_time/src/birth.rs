//! Birth date, time and place as supplied by a visitor.
//!
//! [`BirthInput`] carries raw form values; [`validate_birth`] range-checks it
//! into a [`BirthData`], the immutable record consumed by the chart engine.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::ValidationError;
use crate::julian::{calendar_to_jd, decimal_day, jd_to_calendar, unix_seconds_to_jd};

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Validated birth record.
///
/// The location is carried through for callers but never enters the math.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub location: String,
}

impl BirthData {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            location: String::new(),
        }
    }

    /// Attach a free-text birth place.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Julian Day of the birth moment, treating the wall-clock time as UT.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(
            self.year,
            self.month,
            decimal_day(self.day, self.hour, self.minute),
        )
    }
}

impl std::fmt::Display for BirthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Unvalidated birth fields, as parsed from a form or command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthInput {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub location: String,
}

/// Accepted year window for [`validate_birth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Earliest accepted year (default 1900).
    pub min_year: i32,
    /// Latest accepted year (default: the current year).
    pub max_year: i32,
}

impl ValidationConfig {
    /// Fixed upper bound, independent of the system clock.
    pub fn with_max_year(max_year: i32) -> Self {
        Self {
            min_year: MIN_BIRTH_YEAR,
            max_year,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::with_max_year(current_year())
    }
}

/// Current Gregorian year from the system clock.
///
/// A clock set before 1970 reads as 1970.
pub fn current_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    jd_to_calendar(unix_seconds_to_jd(secs)).0
}

fn check(
    value: i64,
    lo: i64,
    hi: i64,
    err: fn(i64) -> ValidationError,
) -> Result<u32, ValidationError> {
    if (lo..=hi).contains(&value) {
        Ok(value as u32)
    } else {
        Err(err(value))
    }
}

/// Range-check raw input into a [`BirthData`].
///
/// Day is checked against 1-31 only; an impossible date such as 31 February
/// is accepted and rolls over in the Julian Day arithmetic.
pub fn validate_birth(
    input: &BirthInput,
    config: &ValidationConfig,
) -> Result<BirthData, ValidationError> {
    if input.year < i64::from(config.min_year) || input.year > i64::from(config.max_year) {
        return Err(ValidationError::Year {
            value: input.year,
            min: config.min_year,
            max: config.max_year,
        });
    }
    let month = check(input.month, 1, 12, ValidationError::Month)?;
    let day = check(input.day, 1, 31, ValidationError::Day)?;
    let hour = check(input.hour, 0, 23, ValidationError::Hour)?;
    let minute = check(input.minute, 0, 59, ValidationError::Minute)?;

    Ok(BirthData {
        year: input.year as i32,
        month,
        day,
        hour,
        minute,
        location: input.location.trim().to_string(),
    })
}
