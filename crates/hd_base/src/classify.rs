//! Archetype decision from defined centers.

use crate::center::{Center, CenterSet};
use crate::hd_type::HdType;

/// The six center flags the type rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFlags {
    pub sacral: bool,
    pub throat: bool,
    pub heart: bool,
    pub solar_plexus: bool,
    pub root: bool,
    pub spleen: bool,
}

impl TypeFlags {
    pub fn from_centers(centers: CenterSet) -> Self {
        Self {
            sacral: centers.contains(Center::Sacral),
            throat: centers.contains(Center::Throat),
            heart: centers.contains(Center::Heart),
            solar_plexus: centers.contains(Center::SolarPlexus),
            root: centers.contains(Center::Root),
            spleen: centers.contains(Center::Spleen),
        }
    }

    /// Throat defined together with a motor (heart, root or solar plexus).
    pub const fn motor_to_throat(self) -> bool {
        self.throat && (self.heart || self.root || self.solar_plexus)
    }
}

/// Classify a set of defined centers. First matching rule wins:
///
/// 1. no sacral, motor to throat → Manifestor
/// 2. sacral with motor to throat → Manifesting Generator, sacral alone → Generator
/// 3. no sacral, no motor to throat, any of throat/heart/solar plexus/spleen → Projector
/// 4. nothing defined → Reflector
/// 5. anything else (only head, ajna, G or root) → Generator
pub fn determine_type(centers: CenterSet) -> HdType {
    let f = TypeFlags::from_centers(centers);

    if !f.sacral && f.motor_to_throat() {
        return HdType::Manifestor;
    }

    if f.sacral {
        if f.motor_to_throat() {
            return HdType::ManifestingGenerator;
        }
        return HdType::Generator;
    }

    // sacral and motor-to-throat charts have returned above
    if f.throat || f.heart || f.solar_plexus || f.spleen {
        return HdType::Projector;
    }

    if centers.is_empty() {
        return HdType::Reflector;
    }

    HdType::Generator
}
