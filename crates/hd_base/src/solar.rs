//! Low-order apparent solar longitude.
//!
//! First-order model from the Astronomical Almanac's low-precision solar
//! formulae: mean longitude plus a two-term equation of center. Nutation,
//! aberration and higher harmonics are ignored; accuracy is roughly 0.01 deg
//! near J2000 and degrades slowly away from it. The coefficients are fixed
//! because downstream gate assignments depend on them bit-for-bit.

use crate::util::normalize_360;

/// Julian Day of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Mean longitude at epoch (deg).
const L0_DEG: f64 = 280.460;
/// Mean longitude rate (deg/day).
const L1_DEG_PER_DAY: f64 = 0.985_647_4;
/// Mean anomaly at epoch (deg).
const G0_DEG: f64 = 357.528;
/// Mean anomaly rate (deg/day).
const G1_DEG_PER_DAY: f64 = 0.985_600_3;
/// Equation of center, first harmonic (deg).
const C1_DEG: f64 = 1.915;
/// Equation of center, second harmonic (deg).
const C2_DEG: f64 = 0.020;

/// Geocentric ecliptic longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let n = jd - J2000_JD;
    let l = L0_DEG + L1_DEG_PER_DAY * n;
    let g = (G0_DEG + G1_DEG_PER_DAY * n).to_radians();
    let lambda = l + C1_DEG * g.sin() + C2_DEG * (2.0 * g).sin();
    normalize_360(lambda)
}

/// Longitude of the Earth as seen from the Sun: Sun + 180 deg.
///
/// Not reduced to [0, 360); the gate wheel wraps it.
pub fn earth_longitude_deg(jd: f64) -> f64 {
    sun_longitude_deg(jd) + 180.0
}
