//! Table-driven chart math built on a low-order solar model.
//!
//! This crate provides:
//! - Apparent solar longitude from a Julian Day
//! - The 64-gate wheel and its fixed gate ordering
//! - The nine centers, their gate membership and a calendar heuristic
//! - Archetype, authority and profile rules
//! - A calendar-only fallback archetype estimate
//!
//! Everything here is pure: no I/O, no shared mutable state.

pub mod authority;
pub mod center;
pub mod classify;
pub mod error;
pub mod fallback;
pub mod gate;
pub mod hd_type;
pub mod locale;
pub mod profile;
pub mod solar;
pub mod util;

pub use authority::{Authority, determine_authority};
pub use center::{
    ALL_CENTERS, Center, CenterSet, PLACEHOLDER_DAY, PLACEHOLDER_MONTH, PLACEHOLDER_SUN_GATE,
    placeholder_centers, quick_centers,
};
pub use classify::{TypeFlags, determine_type};
pub use error::{HdError, ensure_finite};
pub use fallback::fallback_type;
pub use gate::{GATE_SEQUENCE, GATE_SPAN_DEG, Gate, GateInfo, gate_for_degree, gate_from_longitude};
pub use hd_type::{ALL_TYPES, HdType, TypePalette};
pub use locale::Locale;
pub use profile::{PROFILE_TABLE, Profile, calculate_profile, profile_index};
pub use solar::{J2000_JD, earth_longitude_deg, sun_longitude_deg};
pub use util::normalize_360;
