//! Equatorial (RA/Dec) → horizontal (azimuth/altitude) transform.
//!
//! Azimuth is measured from North through East: N = 0°, E = 90°, S = 180°,
//! W = 270°. Altitude is measured from the geometric horizon, positive up.
//! No refraction is applied.
//!
//! Source: standard spherical trigonometry (Meeus, *Astronomical
//! Algorithms*, Chapter 13), with azimuth counted from North instead of South.

use crate::angle::{normalize_180, normalize_360};

/// Below this magnitude both `atan2` arguments are treated as zero and the
/// azimuth is reported as 0 (body at the observer's zenith or nadir).
pub const DEGENERATE_EPS: f64 = 1e-12;

/// Equatorial coordinates: right ascension in hours, declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquatorialCoords {
    /// Right ascension in hours, range [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoords {
    pub const fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Self { ra_hours, dec_deg }
    }

    /// Right ascension in degrees.
    pub fn ra_deg(&self) -> f64 {
        self.ra_hours * 15.0
    }
}

/// Horizontal coordinates as seen by a specific observer at a specific time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalCoords {
    /// Azimuth in degrees, range [0, 360), North = 0, East = 90.
    pub azimuth_deg: f64,
    /// Altitude in degrees, range [-90, 90].
    pub altitude_deg: f64,
}

impl HorizontalCoords {
    /// Whether the point is above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

/// Local hour angle H = LST − RA, in degrees (-180, 180].
///
/// Negative values are east of the meridian (rising), positive west (setting).
pub fn hour_angle_deg(lst_deg: f64, ra_hours: f64) -> f64 {
    normalize_180(lst_deg - ra_hours * 15.0)
}

/// Transform equatorial coordinates to horizontal coordinates.
///
/// # Arguments
/// * `ra_hours`: right ascension in hours
/// * `dec_deg`: declination in degrees
/// * `lst_deg`: local sidereal time in degrees
/// * `latitude_deg`: observer geodetic latitude, north positive
///
/// At the exact zenith/nadir the azimuth is undefined; it is reported as 0.
pub fn equatorial_to_horizontal(
    ra_hours: f64,
    dec_deg: f64,
    lst_deg: f64,
    latitude_deg: f64,
) -> HorizontalCoords {
    let h = hour_angle_deg(lst_deg, ra_hours).to_radians();
    let dec = dec_deg.to_radians();
    let lat = latitude_deg.to_radians();

    let (sin_h, cos_h) = h.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_h).clamp(-1.0, 1.0);
    let altitude_deg = sin_alt.asin().to_degrees().clamp(-90.0, 90.0);

    let y = -sin_h * cos_dec;
    let x = cos_lat * sin_dec - sin_lat * cos_dec * cos_h;
    let azimuth_deg = if y.abs() < DEGENERATE_EPS && x.abs() < DEGENERATE_EPS {
        0.0
    } else {
        normalize_360(y.atan2(x).to_degrees())
    };

    HorizontalCoords {
        azimuth_deg,
        altitude_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn on_meridian_south_of_zenith() {
        // Dec 0 at lat 40N, H = 0 → due south, altitude 50
        let hz = equatorial_to_horizontal(6.0, 0.0, 90.0, 40.0);
        assert!((hz.azimuth_deg - 180.0).abs() < EPS, "az = {}", hz.azimuth_deg);
        assert!((hz.altitude_deg - 50.0).abs() < EPS, "alt = {}", hz.altitude_deg);
    }

    #[test]
    fn rising_object_is_east() {
        // Equator object 6h east of the meridian rises due east
        let hz = equatorial_to_horizontal(6.0, 0.0, 0.0, 40.0);
        assert!((hz.azimuth_deg - 90.0).abs() < EPS, "az = {}", hz.azimuth_deg);
        assert!(hz.altitude_deg.abs() < EPS);
    }

    #[test]
    fn setting_object_is_west() {
        let hz = equatorial_to_horizontal(0.0, 0.0, 90.0, 40.0);
        assert!((hz.azimuth_deg - 270.0).abs() < EPS, "az = {}", hz.azimuth_deg);
    }

    #[test]
    fn pole_star_altitude_equals_latitude() {
        let hz = equatorial_to_horizontal(2.53, 90.0, 123.0, 41.15);
        assert!((hz.altitude_deg - 41.15).abs() < 1e-9);
        assert!(hz.azimuth_deg.abs() < 1e-9 || (hz.azimuth_deg - 360.0).abs() < 1e-9);
    }

    #[test]
    fn lower_culmination_is_north() {
        // Circumpolar star at H = 180 lies due north below the pole
        let hz = equatorial_to_horizontal(0.0, 60.0, 180.0, 45.0);
        let from_north = hz.azimuth_deg.min(360.0 - hz.azimuth_deg);
        assert!(from_north < EPS, "az = {}", hz.azimuth_deg);
        assert!((hz.altitude_deg - 15.0).abs() < EPS);
    }

    #[test]
    fn zenith_is_degenerate_azimuth_zero() {
        let hz = equatorial_to_horizontal(5.0, 41.0, 75.0, 41.0);
        assert_eq!(hz.azimuth_deg, 0.0);
        assert!((hz.altitude_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn nadir_is_degenerate_azimuth_zero() {
        let hz = equatorial_to_horizontal(5.0, -41.0, 255.0, 41.0);
        assert_eq!(hz.azimuth_deg, 0.0);
        assert!((hz.altitude_deg + 90.0).abs() < 1e-9);
    }

    #[test]
    fn north_pole_observer_with_polar_target() {
        let hz = equatorial_to_horizontal(12.0, 90.0, 0.0, 90.0);
        assert_eq!(hz.azimuth_deg, 0.0);
        assert!((hz.altitude_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn hour_angle_range() {
        assert_eq!(hour_angle_deg(0.0, 12.0), 180.0);
        assert!((hour_angle_deg(10.0, 23.0) - 25.0).abs() < 1e-9);
        assert!((hour_angle_deg(350.0, 1.0) - (-25.0)).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13b() {
        // Venus from Washington (lat 38°55'17"N), H = 64.352133°, δ = -6°43'11.61"
        // → azimuth (from South) 68.0337° → from North 248.0337°, altitude 15.1249°
        let lat = 38.0 + 55.0 / 60.0 + 17.0 / 3600.0;
        let dec = -(6.0 + 43.0 / 60.0 + 11.61 / 3600.0);
        let ra_hours = 0.0;
        let lst = 64.352_133;
        let hz = equatorial_to_horizontal(ra_hours, dec, lst, lat);
        assert!((hz.azimuth_deg - 248.0337).abs() < 1e-3, "az = {}", hz.azimuth_deg);
        assert!((hz.altitude_deg - 15.1249).abs() < 1e-3, "alt = {}", hz.altitude_deg);
    }

    #[test]
    fn ranges_hold_on_a_grid() {
        for lat in [-90.0, -45.0, 0.0, 41.0, 90.0] {
            for dec in [-90.0, -30.0, 0.0, 30.0, 90.0] {
                for ra in [0.0, 5.9, 12.0, 23.99] {
                    for lst in [0.0, 90.0, 179.9, 359.99] {
                        let hz = equatorial_to_horizontal(ra, dec, lst, lat);
                        assert!((0.0..360.0).contains(&hz.azimuth_deg));
                        assert!((-90.0..=90.0).contains(&hz.altitude_deg));
                    }
                }
            }
        }
    }
}
