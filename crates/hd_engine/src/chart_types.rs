//! Result records returned by the entry points.
//!
//! All fields are plain data and serialize directly to JSON.

use serde::Serialize;

use hd_base::{Authority, CenterSet, Gate, HdType, Locale, Profile, TypePalette};

/// Gates activated by one moment (personality or design).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlanetGates {
    pub sun: Gate,
    pub earth: Gate,
}

impl PlanetGates {
    pub fn as_array(self) -> [Gate; 2] {
        [self.sun, self.earth]
    }
}

/// Channel activations. Channel detection is not implemented, so this is
/// always `NotComputed` rather than an empty list that would read as
/// "no channels".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channels {
    #[default]
    NotComputed,
}

/// Complete chart record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub strategy: &'static str,
    #[serde(skip)]
    pub authority: Authority,
    /// Localized authority label.
    #[serde(rename = "authority")]
    pub authority_label: &'static str,
    pub profile: Profile,
    pub defined_centers: CenterSet,
    pub personality_gates: PlanetGates,
    pub design_gates: PlanetGates,
    pub channels: Channels,
    /// Julian Day of birth.
    pub personality_jd: f64,
    /// Julian Day of the design moment.
    pub design_jd: f64,
    #[serde(skip)]
    pub locale: Locale,
}

impl ChartResult {
    pub fn palette(&self) -> TypePalette {
        self.hd_type.palette()
    }

    /// All four activated gates, personality first.
    pub fn active_gates(&self) -> [Gate; 4] {
        let [ps, pe] = self.personality_gates.as_array();
        let [ds, de] = self.design_gates.as_array();
        [ps, pe, ds, de]
    }
}

/// Which path produced a [`QuickResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickSource {
    /// Solar gate plus calendar heuristic.
    Chart,
    /// Calendar-only estimate after the chart path failed.
    Fallback,
}

/// Lightweight classification for interactive use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickResult {
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub strategy: &'static str,
    pub description: &'static str,
    pub source: QuickSource,
}

impl QuickResult {
    pub fn new(hd_type: HdType, locale: Locale, source: QuickSource) -> Self {
        Self {
            hd_type,
            strategy: hd_type.strategy(locale),
            description: hd_type.description(locale),
            source,
        }
    }

    pub fn palette(&self) -> TypePalette {
        self.hd_type.palette()
    }
}
