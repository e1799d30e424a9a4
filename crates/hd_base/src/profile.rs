//! Profile from the personality and design Sun gates.
//!
//! The line pair is not derived from gate lines: the two gate numbers are
//! summed and the sum indexes a fixed 12-entry table.

use serde::{Serialize, Serializer};

use crate::gate::Gate;

/// Profile labels indexed by `(personality + design) mod 12`.
pub const PROFILE_TABLE: [&str; 12] = [
    "1/3", "1/4", "2/4", "2/5", "3/5", "3/6", "4/6", "4/1", "5/1", "5/2", "6/2", "6/3",
];

/// One of the twelve profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile(u8);

impl Profile {
    /// Profile at a table position, wrapping mod 12.
    pub const fn from_index(index: u32) -> Self {
        Self((index % 12) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Label such as `"4/6"`.
    pub const fn label(self) -> &'static str {
        PROFILE_TABLE[self.0 as usize]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Table index for a pair of Sun gate numbers.
pub const fn profile_index(personality_sun: u32, design_sun: u32) -> u32 {
    (personality_sun + design_sun) % 12
}

pub fn calculate_profile(personality_sun: Gate, design_sun: Gate) -> Profile {
    Profile::from_index(profile_index(
        u32::from(personality_sun.number()),
        u32::from(design_sun.number()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pair() {
        // 42 + 60 = 102, 102 mod 12 = 6
        let p = calculate_profile(Gate::new(42).unwrap(), Gate::new(60).unwrap());
        assert_eq!(p.label(), "4/6");
    }

    #[test]
    fn wraps_mod_12() {
        for sum in 0..200 {
            assert_eq!(
                Profile::from_index(sum).label(),
                Profile::from_index(sum + 12).label()
            );
        }
    }

    #[test]
    fn smallest_and_largest_sums() {
        // 1 + 1 = 2, 64 + 64 = 128 → 8
        assert_eq!(
            calculate_profile(Gate::new(1).unwrap(), Gate::new(1).unwrap()).label(),
            "2/4"
        );
        assert_eq!(
            calculate_profile(Gate::new(64).unwrap(), Gate::new(64).unwrap()).label(),
            "5/1"
        );
    }

    #[test]
    fn serializes_label() {
        assert_eq!(
            serde_json::to_string(&Profile::from_index(0)).unwrap(),
            "\"1/3\""
        );
    }
}
