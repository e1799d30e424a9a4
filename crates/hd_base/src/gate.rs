//! The 64-gate wheel.
//!
//! The ecliptic is cut into 64 equal slices of 5.625 deg starting at 0 deg
//! longitude. Slices are numbered along the wheel, not in gate order: slice 0
//! is gate 41, slice 1 is gate 19, and so on through [`GATE_SEQUENCE`].

use serde::Serialize;

/// Span of one gate: 360/64 = 5.625 degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;

/// Gate number for each 5.625 deg slice of the wheel, starting at 0 deg.
pub const GATE_SEQUENCE: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, //
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56, //
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50, //
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// A gate number in 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Gate(pub(crate) u8);

impl Gate {
    /// Gate from its number, `None` outside 1..=64.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 64 {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Position of this gate on the wheel (0 = the slice starting at 0 deg).
    pub fn wheel_index(self) -> u8 {
        GATE_SEQUENCE
            .iter()
            .position(|&g| g == self.0)
            .map_or(0, |i| i as u8)
    }

    /// Longitude where this gate's slice begins.
    pub fn start_deg(self) -> f64 {
        f64::from(self.wheel_index()) * GATE_SPAN_DEG
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a wheel lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GateInfo {
    /// The gate.
    pub gate: Gate,
    /// Wheel slice, 0..63.
    pub wheel_index: u8,
    /// Degrees past the start of the slice, [0, 5.625).
    pub degrees_in_gate: f64,
}

/// Wheel slice for a longitude, reduced mod 64 so any finite input maps.
fn wheel_index(lon_deg: f64) -> u8 {
    let slice = (lon_deg / GATE_SPAN_DEG).floor() as i64;
    slice.rem_euclid(64) as u8
}

/// Gate for an ecliptic longitude in degrees.
///
/// Inputs outside [0, 360) wrap, so `d` and `d + 360` give the same gate.
pub fn gate_for_degree(lon_deg: f64) -> Gate {
    Gate(GATE_SEQUENCE[wheel_index(lon_deg) as usize])
}

/// Gate plus slice index and offset within the slice.
pub fn gate_from_longitude(lon_deg: f64) -> GateInfo {
    let idx = wheel_index(lon_deg);
    let start = f64::from(idx) * GATE_SPAN_DEG;
    let offset = (lon_deg - start).rem_euclid(360.0);
    GateInfo {
        gate: Gate(GATE_SEQUENCE[idx as usize]),
        wheel_index: idx,
        degrees_in_gate: offset.min(GATE_SPAN_DEG),
    }
}
