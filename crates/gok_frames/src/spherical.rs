//! Cartesian ↔ spherical coordinate conversion.
//!
//! Unit-agnostic: the distance comes back in whatever unit the Cartesian
//! vector was expressed in (AU for the planetary model).

use crate::angle::normalize_360;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin, same unit as the input vector.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// The zero vector maps to all zeros.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lat = (z / r).clamp(-1.0, 1.0).asin();

    SphericalCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: lat.to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.distance * cos_lat * lon_rad.cos(),
        s.distance * cos_lat * lon_rad.sin(),
        s.distance * lat_rad.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn along_x_axis() {
        let s = cartesian_to_spherical(&[5.2, 0.0, 0.0]);
        assert!(s.lon_deg.abs() < EPS);
        assert!(s.lat_deg.abs() < EPS);
        assert!((s.distance - 5.2).abs() < EPS);
    }

    #[test]
    fn along_negative_y() {
        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < EPS);
    }

    #[test]
    fn along_z_axis() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.7]);
        assert!((s.lat_deg - 90.0).abs() < EPS);
        assert!((s.distance - 0.7).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234, -0.5678, 0.03456];
        let back = spherical_to_cartesian(&cartesian_to_spherical(&xyz));
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS,
                "axis {i}: {:.12} != {:.12}",
                xyz[i],
                back[i]
            );
        }
    }

    #[test]
    fn zero_vector() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }

    #[test]
    fn longitude_never_360() {
        // y a hair below zero: atan2 gives -tiny, which must not become 360.0
        let s = cartesian_to_spherical(&[1.0, -1e-18, 0.0]);
        assert!((0.0..360.0).contains(&s.lon_deg), "lon = {}", s.lon_deg);
    }
}
