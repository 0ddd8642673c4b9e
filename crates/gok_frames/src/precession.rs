//! General precession in ecliptic longitude.
//!
//! The general precession p measures the accumulated westward motion of the
//! vernal equinox along the ecliptic since J2000.0. Adding it to a J2000
//! ecliptic longitude gives the longitude referred to the mean equinox of
//! date. Precession of the ecliptic itself (a few arcseconds per century in
//! latitude) is ignored.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 21
//! (Lieske et al. 1977 coefficients).

use crate::angle::normalize_360;
use crate::horizontal::EquatorialCoords;
use crate::obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
use crate::rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};

/// General precession in ecliptic longitude since J2000.0, in arcseconds.
///
/// # Arguments
/// * `t`: Julian centuries since J2000.0
///
/// The dominant linear term is ~5029.10″/century ≈ 1.397°/century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    5029.0966 * t + 1.111_13 * t2 - 0.000_006 * t2 * t
}

/// General precession in ecliptic longitude since J2000.0, in degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}

/// Refer a J2000 ecliptic longitude to the mean equinox of date.
///
/// Returns degrees in [0, 360).
pub fn precess_ecliptic_longitude(lon_j2000_deg: f64, t: f64) -> f64 {
    normalize_360(lon_j2000_deg + general_precession_deg(t))
}

/// Carry J2000 catalog RA/Dec to the mean equator and equinox of date.
///
/// Goes through ecliptic coordinates: J2000 obliquity out, precession in
/// longitude, obliquity of date back in.
pub fn precess_equatorial_j2000(eq: &EquatorialCoords, t: f64) -> EquatorialCoords {
    let ecl = equatorial_to_ecliptic(eq, OBLIQUITY_J2000_DEG);
    ecliptic_to_equatorial(
        precess_ecliptic_longitude(ecl.lon_deg, t),
        ecl.lat_deg,
        mean_obliquity_deg(t),
    )
}
