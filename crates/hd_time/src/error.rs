//! Error types for birth-input validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A birth-input field lies outside its permitted range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Year outside `[min, max]`.
    Year { value: i64, min: i32, max: i32 },
    /// Month outside 1-12.
    Month(i64),
    /// Day outside 1-31.
    Day(i64),
    /// Hour outside 0-23.
    Hour(i64),
    /// Minute outside 0-59.
    Minute(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year { value, min, max } => {
                write!(f, "year {value} outside {min}-{max}")
            }
            Self::Month(v) => write!(f, "month {v} outside 1-12"),
            Self::Day(v) => write!(f, "day {v} outside 1-31"),
            Self::Hour(v) => write!(f, "hour {v} outside 0-23"),
            Self::Minute(v) => write!(f, "minute {v} outside 0-59"),
        }
    }
}

impl Error for ValidationError {}
