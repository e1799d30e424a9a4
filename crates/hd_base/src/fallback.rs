//! Calendar-only archetype estimate.
//!
//! Used when the chart pipeline cannot produce a result. The rules run in
//! order and each one overwrites the previous answer, so the last matching
//! rule wins.

use crate::hd_type::HdType;

/// Archetype from calendar fields alone:
///
/// - default Generator
/// - April to August, day 15 or later → Manifesting Generator
/// - November to February, day 15 or earlier → Projector
/// - January 1st to 5th → Manifestor
/// - December 20th or later in a year divisible by 13 → Reflector
pub fn fallback_type(year: i32, month: u32, day: u32) -> HdType {
    let mut hd_type = HdType::Generator;

    if (4..=8).contains(&month) && day >= 15 {
        hd_type = HdType::ManifestingGenerator;
    }
    if (month >= 11 || month <= 2) && day <= 15 {
        hd_type = HdType::Projector;
    }
    if month == 1 && day <= 5 {
        hd_type = HdType::Manifestor;
    }
    if month == 12 && day >= 20 && year % 13 == 0 {
        hd_type = HdType::Reflector;
    }

    hd_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generator() {
        assert_eq!(fallback_type(1990, 3, 20), HdType::Generator);
        assert_eq!(fallback_type(1990, 9, 1), HdType::Generator);
    }

    #[test]
    fn summer_second_half() {
        assert_eq!(fallback_type(1990, 4, 15), HdType::ManifestingGenerator);
        assert_eq!(fallback_type(1990, 8, 31), HdType::ManifestingGenerator);
        assert_eq!(fallback_type(1990, 8, 14), HdType::Generator);
    }

    #[test]
    fn winter_first_half() {
        assert_eq!(fallback_type(1990, 11, 15), HdType::Projector);
        assert_eq!(fallback_type(1990, 2, 1), HdType::Projector);
        assert_eq!(fallback_type(1990, 12, 16), HdType::Generator);
    }

    #[test]
    fn early_january_overrides_projector() {
        assert_eq!(fallback_type(1990, 1, 5), HdType::Manifestor);
        assert_eq!(fallback_type(1990, 1, 6), HdType::Projector);
    }

    #[test]
    fn late_december_thirteenth_year() {
        // 1989 = 13 * 153
        assert_eq!(fallback_type(1989, 12, 20), HdType::Reflector);
        assert_eq!(fallback_type(1990, 12, 20), HdType::Generator);
        assert_eq!(fallback_type(1989, 12, 19), HdType::Generator);
    }
}
