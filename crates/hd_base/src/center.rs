//! The nine centers and the two ways of marking them defined.
//!
//! [`CenterSet::from_gates`] follows the gate membership table: a center is
//! defined when any of its gates is active. [`quick_centers`] instead applies
//! fixed calendar heuristics and ignores gate membership except for the G
//! center's parity check.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::gate::Gate;

/// One of the nine centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Sacral,
    SolarPlexus,
    Spleen,
    Root,
}

/// All nine centers, top to bottom.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Sacral,
    Center::SolarPlexus,
    Center::Spleen,
    Center::Root,
];

impl Center {
    /// Snake-case key used in serialized output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Ajna => "ajna",
            Self::Throat => "throat",
            Self::G => "g",
            Self::Heart => "heart",
            Self::Sacral => "sacral",
            Self::SolarPlexus => "solar_plexus",
            Self::Spleen => "spleen",
            Self::Root => "root",
        }
    }

    /// 0-based index (Head=0 .. Root=8).
    pub const fn index(self) -> u8 {
        match self {
            Self::Head => 0,
            Self::Ajna => 1,
            Self::Throat => 2,
            Self::G => 3,
            Self::Heart => 4,
            Self::Sacral => 5,
            Self::SolarPlexus => 6,
            Self::Spleen => 7,
            Self::Root => 8,
        }
    }

    /// Gates that belong to this center.
    ///
    /// Lists overlap (gates 1, 7, 8, 13 and 31 appear under throat, G and
    /// heart alike) and ten gates belong to no center at all.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &[64, 61, 63],
            Self::Ajna => &[47, 24, 4, 17, 43, 11],
            Self::Throat => &[62, 23, 56, 35, 12, 45, 33, 8, 31, 7, 1, 13, 16, 20],
            Self::G => &[25, 46, 22, 36, 33, 13, 7, 1, 8, 31],
            Self::Heart => &[26, 44, 32, 28, 27, 24, 2, 23, 8, 31, 7, 1, 13],
            Self::Sacral => &[5, 14, 29, 59, 9, 3, 42, 27, 34],
            Self::SolarPlexus => &[6, 37, 49, 55, 30, 36, 22, 12, 35],
            Self::Spleen => &[50, 32, 28, 44, 26, 11, 43, 4, 24, 47],
            Self::Root => &[19, 39, 52, 53, 60, 41, 58],
        }
    }

    /// Whether `gate` is one of this center's gates.
    pub fn has_gate(self, gate: Gate) -> bool {
        self.gates().contains(&gate.number())
    }

    pub const fn all() -> &'static [Center; 9] {
        &ALL_CENTERS
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of defined centers, stored as a 9-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CenterSet(u16);

impl CenterSet {
    pub const EMPTY: Self = Self(0);

    pub const fn empty() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, center: Center) {
        self.0 |= 1 << center.index();
    }

    /// Copy of the set with `center` added.
    pub const fn with(self, center: Center) -> Self {
        Self(self.0 | 1 << center.index())
    }

    pub const fn contains(self, center: Center) -> bool {
        self.0 & (1 << center.index()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Defined centers in [`ALL_CENTERS`] order.
    pub fn iter(self) -> impl Iterator<Item = Center> {
        ALL_CENTERS.into_iter().filter(move |c| self.contains(*c))
    }

    /// Centers defined by at least one of `gates`.
    pub fn from_gates(gates: &[Gate]) -> Self {
        ALL_CENTERS
            .into_iter()
            .filter(|c| gates.iter().any(|g| c.has_gate(*g)))
            .collect()
    }
}

impl FromIterator<Center> for CenterSet {
    fn from_iter<I: IntoIterator<Item = Center>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

/// Serializes as `{"head": false, "ajna": false, ..., "root": true}`.
impl Serialize for CenterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_CENTERS.len()))?;
        for c in ALL_CENTERS {
            map.serialize_entry(c.name(), &self.contains(c))?;
        }
        map.end()
    }
}

/// Month, day and Sun gate standing in for the gate lookup when a full
/// chart is built without it (June 15th, gate 1).
pub const PLACEHOLDER_MONTH: u32 = 6;
pub const PLACEHOLDER_DAY: u32 = 15;
pub const PLACEHOLDER_SUN_GATE: Gate = Gate(1);

/// Calendar heuristic for defined centers.
///
/// Each rule is evaluated independently:
///
/// | Center | Defined when |
/// |---|---|
/// | sacral | month in 3..=9 |
/// | throat | day in 10..=25 |
/// | solar plexus | month even |
/// | spleen | month <= 6 and solar plexus not defined |
/// | root | day divisible by 3 |
/// | head, ajna | month >= 9 or month <= 3 |
/// | G | Sun gate even |
/// | heart | day >= 25 and month in 6..=8 |
pub fn quick_centers(month: u32, day: u32, sun_gate: Gate) -> CenterSet {
    let mut set = CenterSet::EMPTY;

    if (3..=9).contains(&month) {
        set.insert(Center::Sacral);
    }
    if (10..=25).contains(&day) {
        set.insert(Center::Throat);
    }
    if month % 2 == 0 {
        set.insert(Center::SolarPlexus);
    }
    if month <= 6 && !set.contains(Center::SolarPlexus) {
        set.insert(Center::Spleen);
    }
    if day % 3 == 0 {
        set.insert(Center::Root);
    }
    if month >= 9 || month <= 3 {
        set.insert(Center::Head);
        set.insert(Center::Ajna);
    }
    if sun_gate.is_even() {
        set.insert(Center::G);
    }
    if day >= 25 && (6..=8).contains(&month) {
        set.insert(Center::Heart);
    }

    set
}

/// Heuristic evaluated at the fixed placeholder inputs.
///
/// Always `{throat, sacral, solar_plexus, root}`.
pub fn placeholder_centers() -> CenterSet {
    quick_centers(PLACEHOLDER_MONTH, PLACEHOLDER_DAY, PLACEHOLDER_SUN_GATE)
}
