//! Output language for human-readable labels.

use std::str::FromStr;

use crate::error::HdError;

/// Language of strategy, description and authority labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl FromStr for Locale {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "de" | "german" | "deutsch" => Ok(Self::De),
            _ => Err(HdError::UnknownLocale(s.to_string())),
        }
    }
}
