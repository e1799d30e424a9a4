//! Quick archetype for the interactive flow, with the calendar fallback.
//!
//! The quick path never fails: any error in the chart math is logged and
//! replaced by the calendar-only estimate, so personalization cannot block
//! page rendering.

use tracing::{debug, warn};

use hd_base::{HdError, HdType, Locale, determine_type, fallback_type, quick_centers};
use hd_time::BirthData;

use crate::chart::planet_gates;
use crate::chart_types::{QuickResult, QuickSource};

/// Archetype from the Sun gate at `jd` plus the calendar heuristic.
pub fn quick_chart_type(birth: &BirthData, jd: f64) -> Result<HdType, HdError> {
    let gates = planet_gates(jd)?;
    let centers = quick_centers(birth.month, birth.day, gates.sun);
    let hd_type = determine_type(centers);
    debug!(
        %birth,
        sun_gate = %gates.sun,
        earth_gate = %gates.earth,
        centers = centers.len(),
        %hd_type,
        "quick classification"
    );
    Ok(hd_type)
}

/// Quick archetype with English labels.
pub fn compute_quick_type(birth: &BirthData) -> QuickResult {
    compute_quick_type_with(birth, Locale::En)
}

/// Quick archetype; falls back to [`compute_fallback_with`] on failure.
pub fn compute_quick_type_with(birth: &BirthData, locale: Locale) -> QuickResult {
    quick_type_at(birth, birth.to_jd(), locale)
}

/// Quick archetype for an explicit birth Julian Day.
pub fn quick_type_at(birth: &BirthData, jd: f64, locale: Locale) -> QuickResult {
    match quick_chart_type(birth, jd) {
        Ok(hd_type) => QuickResult::new(hd_type, locale, QuickSource::Chart),
        Err(e) => {
            warn!(%birth, error = %e, "quick classification failed, using calendar fallback");
            compute_fallback_with(birth, locale)
        }
    }
}

/// Calendar-only estimate with English labels.
pub fn compute_fallback(birth: &BirthData) -> QuickResult {
    compute_fallback_with(birth, Locale::En)
}

pub fn compute_fallback_with(birth: &BirthData, locale: Locale) -> QuickResult {
    let hd_type = fallback_type(birth.year, birth.month, birth.day);
    QuickResult::new(hd_type, locale, QuickSource::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_1990_is_mg() {
        let r = compute_quick_type(&BirthData::new(1990, 6, 15, 10, 30));
        assert_eq!(r.hd_type, HdType::ManifestingGenerator);
        assert_eq!(r.source, QuickSource::Chart);
        assert_eq!(r.strategy, "Wait to respond, then inform");
    }

    #[test]
    fn nan_day_count_falls_back() {
        let birth = BirthData::new(1990, 1, 3, 0, 0);
        let r = quick_type_at(&birth, f64::NAN, Locale::De);
        assert_eq!(r.source, QuickSource::Fallback);
        assert_eq!(r.hd_type, HdType::Manifestor);
        assert_eq!(r.strategy, "Informieren und Initiieren");
    }

    #[test]
    fn infinite_day_count_falls_back() {
        let birth = BirthData::new(1990, 7, 20, 0, 0);
        let r = quick_type_at(&birth, f64::INFINITY, Locale::En);
        assert_eq!(r.source, QuickSource::Fallback);
        assert_eq!(r.hd_type, HdType::ManifestingGenerator);
    }

    #[test]
    fn fallback_labels_match_type() {
        let r = compute_fallback(&BirthData::new(1989, 12, 24, 0, 0));
        assert_eq!(r.hd_type, HdType::Reflector);
        assert_eq!(r.strategy, HdType::Reflector.strategy(Locale::En));
        assert_eq!(r.description, HdType::Reflector.description(Locale::En));
    }
}
