//! Birth-date input and calendar arithmetic.
//!
//! This crate provides:
//! - `BirthData`, the validated birth record, and its range checks
//! - Gregorian calendar ↔ Julian Day conversion
//! - A system-clock lookup of the current year for input validation

pub mod birth;
pub mod error;
pub mod julian;

pub use birth::{
    BirthData, BirthInput, MIN_BIRTH_YEAR, ValidationConfig, current_year, validate_birth,
};
pub use error::ValidationError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, decimal_day, jd_to_calendar,
    unix_seconds_to_jd,
};
