//! Error types for the chart entry points.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hd_base::HdError;
use hd_time::ValidationError;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the chart math.
    Math(HdError),
    /// Birth input failed range checks.
    Validation(ValidationError),
    /// Center mode name not recognized.
    UnknownCenterMode(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "chart math error: {e}"),
            Self::Validation(e) => write!(f, "invalid birth data: {e}"),
            Self::UnknownCenterMode(s) => write!(f, "unknown center mode: {s}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::UnknownCenterMode(_) => None,
        }
    }
}

impl From<HdError> for ChartError {
    fn from(e: HdError) -> Self {
        Self::Math(e)
    }
}

impl From<ValidationError> for ChartError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
