//! Low-precision geocentric position of the Sun.
//!
//! Mean longitude and mean anomaly linear in T, a two-term equation of
//! centre, and the radius vector from the orbital eccentricity. The result
//! is geometric (no aberration or nutation), referred to the mean equinox of
//! date. Accuracy ~0.01°.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25.

use gok_frames::{EquatorialCoords, ecliptic_to_equatorial, mean_obliquity_deg, normalize_360};

/// Visual magnitude of the Sun.
pub const SUN_APPARENT_MAGNITUDE: f64 = -26.74;

/// Geocentric position of the Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunPosition {
    /// True geometric ecliptic longitude in degrees [0, 360).
    pub ecliptic_lon_deg: f64,
    /// Mean anomaly in degrees [0, 360).
    pub mean_anomaly_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
    /// Right ascension / declination for the mean equator of date.
    pub equatorial: EquatorialCoords,
}

/// Position of the Sun at `t` Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SunPosition {
    let l0 = 280.466_46 + 36_000.769_83 * t;
    let m = normalize_360(357.529_11 + 35_999.050_29 * t);
    let m_rad = m.to_radians();

    let c = (1.914_602 - 0.004_817 * t) * m_rad.sin() + 0.019_993 * (2.0 * m_rad).sin();

    let true_lon = normalize_360(l0 + c);
    let true_anomaly = (m + c).to_radians();

    let e = 0.016_708_634 - 0.000_042_037 * t;
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SunPosition {
        ecliptic_lon_deg: true_lon,
        mean_anomaly_deg: m,
        distance_au,
        equatorial: ecliptic_to_equatorial(true_lon, 0.0, mean_obliquity_deg(t)),
    }
}
