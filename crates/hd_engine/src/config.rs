//! Chart computation settings.

use std::str::FromStr;

use hd_base::Locale;

use crate::error::ChartError;

/// Days between the design moment and birth.
pub const DESIGN_OFFSET_DAYS: f64 = 88.0;

/// How a full chart decides which centers are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CenterMode {
    /// Calendar heuristic at fixed placeholder inputs (June 15th, gate 1),
    /// ignoring the computed gates. Every full chart then has throat, sacral,
    /// solar plexus and root defined. Matches results produced by earlier
    /// deployments.
    #[default]
    QuickHeuristic,
    /// A center is defined when any of the four activated gates (personality
    /// and design Sun and Earth) belongs to it.
    GateLookup,
}

impl FromStr for CenterMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" | "heuristic" | "quick-heuristic" => Ok(Self::QuickHeuristic),
            "gates" | "gate" | "gate-lookup" => Ok(Self::GateLookup),
            _ => Err(ChartError::UnknownCenterMode(s.to_string())),
        }
    }
}

/// Configuration for [`crate::compute_full_chart_with`] and the quick path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Center definition strategy for full charts.
    pub centers: CenterMode,
    /// Days subtracted from birth for the design moment (default 88).
    pub design_offset_days: f64,
    /// Language of strategy, description and authority labels.
    pub locale: Locale,
}

impl ChartConfig {
    pub fn new(centers: CenterMode, locale: Locale) -> Self {
        Self {
            centers,
            design_offset_days: DESIGN_OFFSET_DAYS,
            locale,
        }
    }

    /// Gate-lookup centers, English labels.
    pub fn gate_lookup() -> Self {
        Self::new(CenterMode::GateLookup, Locale::En)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(CenterMode::QuickHeuristic, Locale::En)
    }
}
