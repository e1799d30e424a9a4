//! Full chart: gates at the personality and design moments, defined
//! centers, type, authority and profile.

use tracing::debug;

use hd_base::{
    CenterSet, HdError, calculate_profile, determine_authority, determine_type, ensure_finite,
    gate_for_degree, placeholder_centers, sun_longitude_deg,
};
use hd_time::BirthData;

use crate::chart_types::{ChartResult, Channels, PlanetGates};
use crate::config::{CenterMode, ChartConfig};
use crate::error::ChartError;

/// Sun and Earth gates at a Julian Day.
pub fn planet_gates(jd: f64) -> Result<PlanetGates, HdError> {
    let jd = ensure_finite(jd, "day count")?;
    let sun_lon = ensure_finite(sun_longitude_deg(jd), "sun longitude")?;
    Ok(PlanetGates {
        sun: gate_for_degree(sun_lon),
        earth: gate_for_degree(sun_lon + 180.0),
    })
}

/// Defined centers for a full chart under the configured mode.
pub fn chart_centers(
    mode: CenterMode,
    personality: PlanetGates,
    design: PlanetGates,
) -> CenterSet {
    match mode {
        CenterMode::QuickHeuristic => placeholder_centers(),
        CenterMode::GateLookup => {
            let [ps, pe] = personality.as_array();
            let [ds, de] = design.as_array();
            CenterSet::from_gates(&[ps, pe, ds, de])
        }
    }
}

/// Full chart with the default configuration.
pub fn compute_full_chart(birth: &BirthData) -> Result<ChartResult, ChartError> {
    compute_full_chart_with(birth, &ChartConfig::default())
}

/// Full chart for a birth record.
///
/// Fails only when an intermediate value is not finite, e.g. a NaN
/// `design_offset_days`.
pub fn compute_full_chart_with(
    birth: &BirthData,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    let personality_jd = birth.to_jd();
    let design_jd = personality_jd - config.design_offset_days;
    debug!(%birth, personality_jd, design_jd, "computing full chart");

    let personality_gates = planet_gates(personality_jd)?;
    let design_gates = planet_gates(design_jd)?;
    debug!(
        personality_sun = %personality_gates.sun,
        personality_earth = %personality_gates.earth,
        design_sun = %design_gates.sun,
        design_earth = %design_gates.earth,
        "activated gates"
    );

    let defined_centers = chart_centers(config.centers, personality_gates, design_gates);
    let hd_type = determine_type(defined_centers);
    let authority = determine_authority(defined_centers, hd_type);
    let profile = calculate_profile(personality_gates.sun, design_gates.sun);
    debug!(
        mode = ?config.centers,
        centers = defined_centers.len(),
        %hd_type,
        %authority,
        %profile,
        "classified chart"
    );

    Ok(ChartResult {
        hd_type,
        strategy: hd_type.strategy(config.locale),
        authority,
        authority_label: authority.label(config.locale),
        profile,
        defined_centers,
        personality_gates,
        design_gates,
        channels: Channels::NotComputed,
        personality_jd,
        design_jd,
        locale: config.locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_base::{Authority, Center, HdType};

    #[test]
    fn planet_gates_1990() {
        let g = planet_gates(2_448_057.937_5).unwrap();
        assert_eq!(g.sun.number(), 42);
        assert_eq!(g.earth.number(), 32);
    }

    #[test]
    fn planet_gates_rejects_nan() {
        assert_eq!(
            planet_gates(f64::NAN),
            Err(HdError::NonFinite("day count"))
        );
    }

    #[test]
    fn heuristic_mode_ignores_gates() {
        let a = PlanetGates {
            sun: gate_for_degree(0.0),
            earth: gate_for_degree(180.0),
        };
        let b = PlanetGates {
            sun: gate_for_degree(90.0),
            earth: gate_for_degree(270.0),
        };
        assert_eq!(
            chart_centers(CenterMode::QuickHeuristic, a, b),
            chart_centers(CenterMode::QuickHeuristic, b, a)
        );
    }

    #[test]
    fn default_full_chart_1990() {
        let r = compute_full_chart(&BirthData::new(1990, 6, 15, 10, 30)).unwrap();
        assert_eq!(r.hd_type, HdType::ManifestingGenerator);
        assert_eq!(r.authority, Authority::Emotional);
        assert_eq!(r.profile.label(), "4/6");
        assert_eq!(r.design_gates.sun.number(), 60);
        assert_eq!(r.design_gates.earth.number(), 56);
        assert_eq!(r.channels, Channels::NotComputed);
        assert!((r.personality_jd - r.design_jd - 88.0).abs() < 1e-9);
    }

    #[test]
    fn gate_lookup_full_chart_1990() {
        let r = compute_full_chart_with(
            &BirthData::new(1990, 6, 15, 10, 30),
            &ChartConfig::gate_lookup(),
        )
        .unwrap();
        // gates 42, 32, 60, 56
        for c in [
            Center::Throat,
            Center::Heart,
            Center::Sacral,
            Center::Spleen,
            Center::Root,
        ] {
            assert!(r.defined_centers.contains(c), "{c}");
        }
        assert_eq!(r.defined_centers.len(), 5);
        assert_eq!(r.hd_type, HdType::ManifestingGenerator);
        assert_eq!(r.authority, Authority::Sacral);
    }

    #[test]
    fn nan_offset_is_an_error() {
        let config = ChartConfig {
            design_offset_days: f64::NAN,
            ..ChartConfig::default()
        };
        let err = compute_full_chart_with(&BirthData::new(1990, 6, 15, 10, 30), &config);
        assert_eq!(
            err,
            Err(ChartError::Math(HdError::NonFinite("day count")))
        );
    }
}
