//! Error types for chart math.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart math pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HdError {
    /// An intermediate value (day count or longitude) was NaN or infinite.
    NonFinite(&'static str),
    /// Text did not name one of the five archetypes.
    UnknownType(String),
    /// Text did not name a supported locale.
    UnknownLocale(String),
}

impl Display for HdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::UnknownType(s) => write!(f, "unknown type: {s}"),
            Self::UnknownLocale(s) => write!(f, "unknown locale: {s}"),
        }
    }
}

impl Error for HdError {}

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, HdError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HdError::NonFinite(what))
    }
}
