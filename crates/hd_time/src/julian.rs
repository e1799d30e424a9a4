//! Julian Day ↔ civil calendar conversion.
//!
//! The forward conversion is the standard Gregorian civil-calendar formula
//! (Meeus, *Astronomical Algorithms*, ch. 7). It is applied to every input
//! unconditionally: there is no Julian-calendar switch before 1582 and no
//! range checking. Out-of-range months or days simply roll into adjacent
//! periods.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date with fractional day to a Julian Day.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `1.5` for noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Fractional day of month for a wall-clock time: `day + (hour + minute/60) / 24`.
pub fn decimal_day(day: u32, hour: u32, minute: u32) -> f64 {
    f64::from(day) + (f64::from(hour) + f64::from(minute) / 60.0) / 24.0
}

/// Convert a Julian Day back to `(year, month, day_frac)`.
///
/// Inverse of [`calendar_to_jd`] for the Gregorian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian Day for seconds elapsed since the Unix epoch.
pub fn unix_seconds_to_jd(secs: f64) -> f64 {
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}
