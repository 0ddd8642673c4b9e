//! Greenwich and local mean sidereal time.
//!
//! Low-precision (arcsecond-level over a few centuries) polynomial in the
//! Julian Date. Adequate for visual planning, not for driving a mount.
//!
//! The engine makes no UT1/UTC distinction: the |UT1 − UTC| < 0.9 s
//! difference is far below the model's precision.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Normalize degrees into [0, 360), guarding the `rem_euclid` rounding edge
/// where a tiny negative input would come back as exactly 360.0.
fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Greenwich Mean Sidereal Time at a Julian Date, in degrees [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(theta)
}

/// Local Sidereal Time from GMST and the observer's east-positive longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_deg(gmst_deg + longitude_east_deg)
}

/// Local Sidereal Time in degrees directly from a Julian Date.
pub fn local_sidereal_time_for_jd(jd: f64, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_deg(gmst_deg(jd), longitude_east_deg)
}
