//! Property checks across the frame transforms.

use gok_frames::{
    EquatorialCoords, OBLIQUITY_J2000_DEG, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_horizontal, mean_obliquity_deg, precess_ecliptic_longitude,
};

#[test]
fn hour_angle_wrap_is_continuous() {
    // LST = 0.005°; an RA of 0° vs 359.99° straddles the 0/360 wrap of H
    let lat = 41.15;
    let lst = 0.005;
    let a = equatorial_to_horizontal(0.0, 20.0, lst, lat);
    let b = equatorial_to_horizontal(359.99 / 15.0, 20.0, lst, lat);

    let mut daz = (a.azimuth_deg - b.azimuth_deg).abs();
    if daz > 180.0 {
        daz = 360.0 - daz;
    }
    assert!(daz < 0.05, "azimuth jump {daz}");
    assert!((a.altitude_deg - b.altitude_deg).abs() < 0.05);
}

#[test]
fn hour_angle_wrap_far_side() {
    // Same check at H ≈ ±180°
    let a = equatorial_to_horizontal(0.0, -10.0, 179.995, 41.15);
    let b = equatorial_to_horizontal(0.0, -10.0, 180.005, 41.15);
    let mut daz = (a.azimuth_deg - b.azimuth_deg).abs();
    if daz > 180.0 {
        daz = 360.0 - daz;
    }
    assert!(daz < 0.05, "azimuth jump {daz}");
    assert!((a.altitude_deg - b.altitude_deg).abs() < 0.05);
}

#[test]
fn ecliptic_equatorial_roundtrip_grid() {
    let eps = mean_obliquity_deg(0.245);
    for lon in (0..360).step_by(15) {
        for lat in [-60.0, -5.0, 0.0, 5.2, 60.0] {
            let eq = ecliptic_to_equatorial(lon as f64, lat, eps);
            let back = equatorial_to_ecliptic(&eq, eps);
            let mut dl = (back.lon_deg - lon as f64).abs();
            if dl > 180.0 {
                dl = 360.0 - dl;
            }
            assert!(dl < 1e-9, "lon {lon} lat {lat}: {}", back.lon_deg);
            assert!((back.lat_deg - lat).abs() < 1e-9);
        }
    }
}

#[test]
fn precession_moves_vernal_point_eastward_in_longitude() {
    // A star's ecliptic longitude grows by ~0.34° between J2000 and 2024
    let t = 24.0 / 100.0;
    let lon = precess_ecliptic_longitude(100.0, t);
    assert!((lon - 100.0 - 0.335).abs() < 0.01, "lon = {lon}");
}

#[test]
fn polaris_is_near_celestial_pole() {
    let polaris = EquatorialCoords::new(2.53, 89.264);
    let ecl = equatorial_to_ecliptic(&polaris, OBLIQUITY_J2000_DEG);
    // The celestial pole sits at ecliptic latitude 90° − ε
    assert!((ecl.lat_deg - (90.0 - OBLIQUITY_J2000_DEG)).abs() < 1.0);
}
