//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 22.2 (IAU 1980
//! polynomial, degrees form). Good to ~1″ within a few centuries of J2000.

/// Mean obliquity of the ecliptic at J2000.0, in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_11;

/// Mean obliquity of the ecliptic of date, in degrees.
///
/// # Arguments
/// * `t`: Julian centuries since J2000.0
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    OBLIQUITY_J2000_DEG - 0.013_004_2 * t - 1.64e-7 * t2 + 5.04e-7 * t2 * t
}
