//! Rotation between the ecliptic and the equator about the equinox axis.
//!
//! Both frames share the x-axis (the equinox direction); the equator is the
//! ecliptic tilted by the obliquity ε. Pass the mean obliquity of date for
//! coordinates referred to the equinox of date, or
//! [`OBLIQUITY_J2000_DEG`](crate::OBLIQUITY_J2000_DEG) for J2000 coordinates.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eqs. 13.1–13.4.

use crate::angle::normalize_360;
use crate::horizontal::EquatorialCoords;

/// Ecliptic longitude and latitude, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EclipticCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

/// Ecliptic (λ, β) → equatorial (α, δ).
///
/// α = atan2(sin λ cos ε − tan β sin ε, cos λ)
/// δ = asin(sin β cos ε + cos β sin ε sin λ)
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let ra = (sin_lon * cos_eps - lat.tan() * sin_eps).atan2(cos_lon);
    let sin_dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).clamp(-1.0, 1.0);

    EquatorialCoords {
        ra_hours: normalize_360(ra.to_degrees()) / 15.0,
        dec_deg: sin_dec.asin().to_degrees(),
    }
}

/// Equatorial (α, δ) → ecliptic (λ, β).
///
/// λ = atan2(sin α cos ε + tan δ sin ε, cos α)
/// β = asin(sin δ cos ε − cos δ sin ε sin α)
pub fn equatorial_to_ecliptic(eq: &EquatorialCoords, obliquity_deg: f64) -> EclipticCoords {
    let ra = eq.ra_deg().to_radians();
    let dec = eq.dec_deg.to_radians();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();

    let lon = (sin_ra * cos_eps + dec.tan() * sin_eps).atan2(cos_ra);
    let sin_lat = (sin_dec * cos_eps - cos_dec * sin_eps * sin_ra).clamp(-1.0, 1.0);

    EclipticCoords {
        lon_deg: normalize_360(lon.to_degrees()),
        lat_deg: sin_lat.asin().to_degrees(),
    }
}

/// Rotate an ecliptic Cartesian vector into the equatorial frame.
///
/// Units are preserved; only the direction changes.
pub fn ecliptic_xyz_to_equatorial(xyz: &[f64; 3], obliquity_deg: f64) -> [f64; 3] {
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();
    let [x, y, z] = *xyz;
    [x, y * cos_eps - z * sin_eps, y * sin_eps + z * cos_eps]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obliquity::OBLIQUITY_J2000_DEG;

    #[test]
    fn vernal_equinox_maps_to_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, OBLIQUITY_J2000_DEG);
        assert!(eq.ra_hours.abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination_is_obliquity() {
        let eq = ecliptic_to_equatorial(90.0, 0.0, OBLIQUITY_J2000_DEG);
        assert!((eq.ra_hours - 6.0).abs() < 1e-9, "ra = {}", eq.ra_hours);
        assert!((eq.dec_deg - OBLIQUITY_J2000_DEG).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183° → λ = 113.215630°, β = 6.684170°
        let eq = EquatorialCoords::new(116.328_942 / 15.0, 28.026_183);
        let ecl = equatorial_to_ecliptic(&eq, OBLIQUITY_J2000_DEG);
        assert!((ecl.lon_deg - 113.215_630).abs() < 1e-5, "λ = {}", ecl.lon_deg);
        assert!((ecl.lat_deg - 6.684_170).abs() < 1e-5, "β = {}", ecl.lat_deg);

        let back = ecliptic_to_equatorial(ecl.lon_deg, ecl.lat_deg, OBLIQUITY_J2000_DEG);
        assert!((back.ra_deg() - 116.328_942).abs() < 1e-8);
        assert!((back.dec_deg - 28.026_183).abs() < 1e-8);
    }

    #[test]
    fn ra_is_non_negative() {
        // λ just below 360° must not come back as a negative RA
        let eq = ecliptic_to_equatorial(359.0, -2.0, OBLIQUITY_J2000_DEG);
        assert!((0.0..24.0).contains(&eq.ra_hours), "ra = {}", eq.ra_hours);
    }

    #[test]
    fn xyz_rotation_matches_spherical() {
        let lon = 200.0_f64;
        let lat = 3.5_f64;
        let xyz = [
            lat.to_radians().cos() * lon.to_radians().cos(),
            lat.to_radians().cos() * lon.to_radians().sin(),
            lat.to_radians().sin(),
        ];
        let [x, y, z] = ecliptic_xyz_to_equatorial(&xyz, OBLIQUITY_J2000_DEG);
        let ra = normalize_360(y.atan2(x).to_degrees());
        let dec = z.asin().to_degrees();

        let eq = ecliptic_to_equatorial(lon, lat, OBLIQUITY_J2000_DEG);
        assert!((ra - eq.ra_deg()).abs() < 1e-9);
        assert!((dec - eq.dec_deg).abs() < 1e-9);
    }

    #[test]
    fn xyz_rotation_preserves_length() {
        let v = [0.3, -1.2, 0.05];
        let r = ecliptic_xyz_to_equatorial(&v, 23.44);
        let n0 = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        let n1 = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!((n0 - n1).abs() < 1e-14);
    }
}
