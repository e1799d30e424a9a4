//! The five archetypes and their fixed label tables.

use std::str::FromStr;

use serde::Serialize;

use crate::error::HdError;
use crate::locale::Locale;

/// Personality archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HdType {
    Generator,
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

/// All five archetypes.
pub const ALL_TYPES: [HdType; 5] = [
    HdType::Generator,
    HdType::ManifestingGenerator,
    HdType::Projector,
    HdType::Manifestor,
    HdType::Reflector,
];

/// Theme colors for one archetype, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl HdType {
    /// Canonical identifier, e.g. `"ManifestingGenerator"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "ManifestingGenerator",
            Self::Projector => "Projector",
            Self::Manifestor => "Manifestor",
            Self::Reflector => "Reflector",
        }
    }

    /// Human-readable name with spaces.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ManifestingGenerator => "Manifesting Generator",
            other => other.name(),
        }
    }

    /// Lowercase key without spaces, used to look up per-type URLs.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::ManifestingGenerator => "manifestinggenerator",
            Self::Projector => "projector",
            Self::Manifestor => "manifestor",
            Self::Reflector => "reflector",
        }
    }

    /// Strategy label.
    pub const fn strategy(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::Generator => "Wait to respond",
                Self::ManifestingGenerator => "Wait to respond, then inform",
                Self::Projector => "Wait for the invitation",
                Self::Manifestor => "Inform and initiate",
                Self::Reflector => "Wait a lunar cycle",
            },
            Locale::De => match self {
                Self::Generator => "Warten und Reagieren",
                Self::ManifestingGenerator => "Warten, Reagieren und Informieren",
                Self::Projector => "Warten auf Einladung",
                Self::Manifestor => "Informieren und Initiieren",
                Self::Reflector => "Warten einen Mondzyklus",
            },
        }
    }

    /// One-paragraph description addressed to the visitor.
    pub const fn description(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::Generator => {
                    "You are here to work and create. Follow your enthusiasm and respond to life!"
                }
                Self::ManifestingGenerator => {
                    "You are a multi-talent with the power to manifest and to generate. \
                     You can do many things at once."
                }
                Self::Projector => {
                    "You are a natural guide and coordinator. \
                     Wait for recognition and invitations for your gifts."
                }
                Self::Manifestor => {
                    "You are an initiator with the power to begin new things. \
                     Inform others about your plans."
                }
                Self::Reflector => {
                    "You are a rare mirror of your community. \
                     Take your time with important decisions."
                }
            },
            Locale::De => match self {
                Self::Generator => {
                    "Du bist hier um zu arbeiten und zu erschaffen. \
                     Folge deiner Begeisterung und reagiere auf das Leben!"
                }
                Self::ManifestingGenerator => {
                    "Du bist ein Multitalent mit der Kraft zu manifestieren und zu generieren. \
                     Du kannst viele Dinge gleichzeitig machen."
                }
                Self::Projector => {
                    "Du bist ein natürlicher Leiter und Koordinator. \
                     Warte auf Anerkennung und Einladungen für deine Gaben."
                }
                Self::Manifestor => {
                    "Du bist ein Initiator mit der Kraft, Neues zu beginnen. \
                     Informiere andere über deine Pläne."
                }
                Self::Reflector => {
                    "Du bist ein seltener Spiegel der Gemeinschaft. \
                     Lass dir Zeit für wichtige Entscheidungen."
                }
            },
        }
    }

    pub const fn palette(self) -> TypePalette {
        match self {
            Self::Generator => TypePalette {
                primary: "#e74c3c",
                secondary: "#c0392b",
                accent: "#f39c12",
            },
            Self::ManifestingGenerator => TypePalette {
                primary: "#e67e22",
                secondary: "#d35400",
                accent: "#f1c40f",
            },
            Self::Projector => TypePalette {
                primary: "#3498db",
                secondary: "#2980b9",
                accent: "#9b59b6",
            },
            Self::Manifestor => TypePalette {
                primary: "#2ecc71",
                secondary: "#27ae60",
                accent: "#1abc9c",
            },
            Self::Reflector => TypePalette {
                primary: "#9b59b6",
                secondary: "#8e44ad",
                accent: "#e91e63",
            },
        }
    }

    /// Whether the sacral center drives this type.
    pub const fn is_sacral(self) -> bool {
        matches!(self, Self::Generator | Self::ManifestingGenerator)
    }

    pub const fn all() -> &'static [HdType; 5] {
        &ALL_TYPES
    }
}

impl std::fmt::Display for HdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical name, the slug or the spaced form, ignoring case.
impl FromStr for HdType {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        ALL_TYPES
            .into_iter()
            .find(|t| t.slug() == key)
            .ok_or_else(|| HdError::UnknownType(s.to_string()))
    }
}
