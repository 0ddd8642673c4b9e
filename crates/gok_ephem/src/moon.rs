//! Geocentric position of the Moon from a truncated periodic-term theory.
//!
//! Five fundamental arguments (L′, D, M, M′, F) drive the largest periodic
//! terms in longitude, latitude and distance: equation of centre, evection,
//! variation, annual equation, reduction to the ecliptic and their main
//! companions. Terms involving the Sun's anomaly M are scaled by the Earth
//! eccentricity factor E. Accuracy ~0.01° in longitude, a few tens of km in
//! distance.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47, Tables
//! 47.A and 47.B (largest terms only).

use gok_frames::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, mean_obliquity_deg, normalize_360,
};

use crate::sun::sun_position;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Earth equatorial radius in km, for the horizontal parallax.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Geocentric position of the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPosition {
    /// Geocentric ecliptic longitude/latitude, mean equinox of date.
    pub ecliptic: EclipticCoords,
    /// Earth–Moon centre distance in km.
    pub distance_km: f64,
    /// Equatorial horizontal parallax in degrees.
    pub parallax_deg: f64,
    /// Right ascension / declination for the mean equator of date.
    pub equatorial: EquatorialCoords,
    /// Moon − Sun ecliptic longitude in degrees [0, 360). 0 = new, 180 = full.
    pub elongation_deg: f64,
}

impl MoonPosition {
    /// Sun–Moon–Earth phase angle in degrees [0, 180].
    ///
    /// Approximated from the longitude elongation; 0 at full moon.
    pub fn phase_angle_deg(&self) -> f64 {
        180.0 - self.elongation_deg.min(360.0 - self.elongation_deg)
    }

    /// Approximate visual magnitude of the Moon.
    pub fn magnitude(&self) -> f64 {
        let i = self.phase_angle_deg();
        -12.73 + 0.026 * i.abs() + 4.0e-9 * i.powi(4)
    }
}

/// Longitude and distance terms: multiples of D, M, M′, F, then Σl
/// (1e-6 degree) and Σr (1e-3 km).
#[rustfmt::skip]
static LON_DIST_TERMS: [(i8, i8, i8, i8, f64, f64); 32] = [
    // D   M   M'  F      Σl           Σr
    (0,  0,  1,  0,  6_288_774.0, -20_905_355.0),
    (2,  0, -1,  0,  1_274_027.0,  -3_699_111.0),
    (2,  0,  0,  0,    658_314.0,  -2_955_968.0),
    (0,  0,  2,  0,    213_618.0,    -569_925.0),
    (0,  1,  0,  0,   -185_116.0,      48_888.0),
    (0,  0,  0,  2,   -114_332.0,      -3_149.0),
    (2,  0, -2,  0,     58_793.0,     246_158.0),
    (2, -1, -1,  0,     57_066.0,    -152_138.0),
    (2,  0,  1,  0,     53_322.0,    -170_733.0),
    (2, -1,  0,  0,     45_758.0,    -204_586.0),
    (0,  1, -1,  0,    -40_923.0,    -129_620.0),
    (1,  0,  0,  0,    -34_720.0,     108_743.0),
    (0,  1,  1,  0,    -30_383.0,     104_755.0),
    (2,  0,  0, -2,     15_327.0,      10_321.0),
    (0,  0,  1,  2,    -12_528.0,           0.0),
    (0,  0,  1, -2,     10_980.0,      79_661.0),
    (4,  0, -1,  0,     10_675.0,     -34_782.0),
    (0,  0,  3,  0,     10_034.0,     -23_210.0),
    (4,  0, -2,  0,      8_548.0,     -21_636.0),
    (2,  1, -1,  0,     -7_888.0,      24_208.0),
    (2,  1,  0,  0,     -6_766.0,      30_824.0),
    (1,  0, -1,  0,     -5_163.0,      -8_379.0),
    (1,  1,  0,  0,      4_987.0,     -16_675.0),
    (2, -1,  1,  0,      4_036.0,     -12_831.0),
    (2,  0,  2,  0,      3_994.0,     -10_445.0),
    (4,  0,  0,  0,      3_861.0,     -11_650.0),
    (2,  0, -3,  0,      3_665.0,      14_403.0),
    (0,  1, -2,  0,     -2_689.0,      -7_003.0),
    (2,  0, -1,  2,     -2_602.0,           0.0),
    (2, -1, -2,  0,      2_390.0,      10_056.0),
    (1,  0,  1,  0,     -2_348.0,       6_322.0),
    (2, -2,  0,  0,      2_236.0,      -9_884.0),
];

/// Latitude terms: multiples of D, M, M′, F, then Σb (1e-6 degree).
#[rustfmt::skip]
static LAT_TERMS: [(i8, i8, i8, i8, f64); 20] = [
    // D   M   M'  F      Σb
    (0,  0,  0,  1,  5_128_122.0),
    (0,  0,  1,  1,    280_602.0),
    (0,  0,  1, -1,    277_693.0),
    (2,  0,  0, -1,    173_237.0),
    (2,  0, -1,  1,     55_413.0),
    (2,  0, -1, -1,     46_271.0),
    (2,  0,  0,  1,     32_573.0),
    (0,  0,  2,  1,     17_198.0),
    (2,  0,  1, -1,      9_266.0),
    (0,  0,  2, -1,      8_822.0),
    (2, -1,  0, -1,      8_216.0),
    (2,  0, -2, -1,      4_324.0),
    (2,  0,  1,  1,      4_200.0),
    (2,  1,  0, -1,     -3_359.0),
    (2, -1, -1,  1,      2_463.0),
    (2, -1,  0,  1,      2_211.0),
    (2, -1, -1, -1,      2_065.0),
    (0,  1, -1, -1,     -1_870.0),
    (4,  0, -1, -1,      1_828.0),
    (0,  1,  0,  1,     -1_794.0),
];

/// Fundamental arguments in radians: `[L′, D, M, M′, F]`.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    [
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    ]
    .map(|deg| normalize_360(deg).to_radians())
}

/// Earth-orbit eccentricity factor applied to terms containing M.
fn eccentricity_factor(e: f64, m_multiple: i8) -> f64 {
    match m_multiple.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

/// Position of the Moon at `t` Julian centuries since J2000.0.
pub fn moon_position(t: f64) -> MoonPosition {
    let [lp, d, m, mp, f] = fundamental_arguments(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(nd, nm, nmp, nf, cl, cr) in &LON_DIST_TERMS {
        let arg = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
        let k = eccentricity_factor(e, nm);
        sum_l += cl * k * arg.sin();
        sum_r += cr * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(nd, nm, nmp, nf, cb) in &LAT_TERMS {
        let arg = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
        sum_b += cb * eccentricity_factor(e, nm) * arg.sin();
    }

    // Venus, Jupiter and flattening perturbations
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let lon_deg = normalize_360(lp.to_degrees() + sum_l / 1.0e6);
    let lat_deg = sum_b / 1.0e6;
    let distance_km = 385_000.56 + sum_r / 1000.0;
    let parallax_deg = (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees();

    let sun = sun_position(t);

    MoonPosition {
        ecliptic: EclipticCoords { lon_deg, lat_deg },
        distance_km,
        parallax_deg,
        equatorial: ecliptic_to_equatorial(lon_deg, lat_deg, mean_obliquity_deg(t)),
        elongation_deg: normalize_360(lon_deg - sun.ecliptic_lon_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD: λ = 133.162655°, β = −3.229126°,
        // Δ = 368409.7 km, π = 0.991990°
        let t = -0.077_221_081_451;
        let moon = moon_position(t);
        assert!((moon.ecliptic.lon_deg - 133.162_655).abs() < 0.03, "λ = {}", moon.ecliptic.lon_deg);
        assert!((moon.ecliptic.lat_deg + 3.229_126).abs() < 0.03, "β = {}", moon.ecliptic.lat_deg);
        assert!((moon.distance_km - 368_409.7).abs() < 100.0, "Δ = {}", moon.distance_km);
        assert!((moon.parallax_deg - 0.991_990).abs() < 4e-4, "π = {}", moon.parallax_deg);
    }

    #[test]
    fn distance_and_latitude_bounds() {
        for day in 0..400 {
            let moon = moon_position(0.24 + day as f64 / 36_525.0);
            assert!((355_000.0..=407_500.0).contains(&moon.distance_km), "Δ = {}", moon.distance_km);
            assert!(moon.ecliptic.lat_deg.abs() < 5.4);
            assert!((0.0..360.0).contains(&moon.elongation_deg));
        }
    }

    #[test]
    fn phase_angle_and_magnitude() {
        let mut moon = moon_position(0.0);
        moon.elongation_deg = 180.0;
        assert_eq!(moon.phase_angle_deg(), 0.0);
        assert!((moon.magnitude() + 12.73).abs() < 1e-12);
        moon.elongation_deg = 270.0;
        assert_eq!(moon.phase_angle_deg(), 90.0);
        assert!(moon.magnitude() > -12.73);
    }
}
