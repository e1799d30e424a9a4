//! Inner authority.

use serde::Serialize;

use crate::center::{Center, CenterSet};
use crate::hd_type::HdType;
use crate::locale::Locale;

/// Decision-making authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    Mental,
    Lunar,
    /// No inner authority.
    #[serde(rename = "None")]
    NoInner,
}

impl Authority {
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::Emotional => "Emotional",
                Self::Sacral => "Sacral",
                Self::Splenic => "Splenic",
                Self::Ego => "Ego",
                Self::SelfProjected => "Self-Projected",
                Self::Mental => "Mental",
                Self::Lunar => "Lunar",
                Self::NoInner => "None",
            },
            Locale::De => match self {
                Self::Emotional => "Emotional",
                Self::Sacral => "Sakral",
                Self::Splenic => "Milz",
                Self::Ego => "Herz",
                Self::SelfProjected => "Selbst",
                Self::Mental => "Mental",
                Self::Lunar => "Lunar",
                Self::NoInner => "Keine innere Autorität",
            },
        }
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// Authority by priority: solar plexus, sacral (sacral types only), spleen,
/// heart, G, ajna, then Lunar for Reflectors and no authority otherwise.
pub fn determine_authority(centers: CenterSet, hd_type: HdType) -> Authority {
    if centers.contains(Center::SolarPlexus) {
        Authority::Emotional
    } else if centers.contains(Center::Sacral) && hd_type.is_sacral() {
        Authority::Sacral
    } else if centers.contains(Center::Spleen) {
        Authority::Splenic
    } else if centers.contains(Center::Heart) {
        Authority::Ego
    } else if centers.contains(Center::G) {
        Authority::SelfProjected
    } else if centers.contains(Center::Ajna) {
        Authority::Mental
    } else if hd_type == HdType::Reflector {
        Authority::Lunar
    } else {
        Authority::NoInner
    }
}
