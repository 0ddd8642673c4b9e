//! Geocentric positions of the naked-eye planets from J2000 mean elements.
//!
//! Each planet's osculating-like elements are linear in T. The heliocentric
//! ecliptic position of the planet and of the Earth–Moon barycentre come from
//! a Kepler solve; their difference is the geocentric vector, which is
//! precessed to the ecliptic of date and rotated to the equator of date.
//! Valid 1800–2050 AD at the arcminute level (the Earth–Moon barycentre
//! stands in for the Earth).
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL SSD, Table 1). Magnitudes: Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 41, with the Mallama coefficients for
//! Mercury and Venus.

use gok_frames::{
    EclipticCoords, EquatorialCoords, cartesian_to_spherical, ecliptic_to_equatorial,
    mean_obliquity_deg, normalize_360, precess_ecliptic_longitude,
};
use tracing::debug;

use crate::error::EphemError;
use crate::kepler::solve_kepler;

/// A naked-eye planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All planets, in order of distance from the Sun.
pub const ALL_PLANETS: [Planet; 5] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    /// All planet variants in order of distance from the Sun.
    pub const fn all() -> &'static [Planet] {
        &ALL_PLANETS
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Mean elements at J2000.0 and their per-century rates.
    pub fn elements(self) -> &'static OrbitalElements {
        match self {
            Self::Mercury => &ELEMENTS[0],
            Self::Venus => &ELEMENTS[1],
            Self::Mars => &ELEMENTS[3],
            Self::Jupiter => &ELEMENTS[4],
            Self::Saturn => &ELEMENTS[5],
        }
    }

    /// Apparent visual magnitude from heliocentric distance `r`, geocentric
    /// distance `delta` (both AU) and phase angle `i` in degrees.
    pub fn magnitude(self, r: f64, delta: f64, i: f64) -> f64 {
        let distance_term = 5.0 * (r * delta).log10();
        let i2 = i * i;
        let i3 = i2 * i;
        match self {
            Self::Mercury => {
                -0.42 + distance_term + 0.0380 * i - 0.000_273 * i2 + 0.000_002 * i3
            }
            Self::Venus => {
                -4.40 + distance_term + 0.0009 * i + 0.000_239 * i2 - 0.000_000_65 * i3
            }
            Self::Mars => -1.52 + distance_term + 0.016 * i,
            Self::Jupiter => -9.40 + distance_term + 0.005 * i,
            // Ring tilt ignored
            Self::Saturn => -8.88 + distance_term,
        }
    }
}

/// Keplerian elements at J2000.0 plus per-century rates.
///
/// Angles in degrees, semi-major axis in AU. Reference frame: mean ecliptic
/// and equinox of J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis a and rate.
    pub a: (f64, f64),
    /// Eccentricity e and rate.
    pub e: (f64, f64),
    /// Inclination I and rate.
    pub inclination: (f64, f64),
    /// Mean longitude L and rate.
    pub mean_longitude: (f64, f64),
    /// Longitude of perihelion ϖ and rate.
    pub perihelion_longitude: (f64, f64),
    /// Longitude of the ascending node Ω and rate.
    pub node_longitude: (f64, f64),
}

impl OrbitalElements {
    /// Heliocentric ecliptic J2000 position in AU at `t` centuries.
    pub fn heliocentric_xyz(&self, t: f64) -> Result<[f64; 3], EphemError> {
        let at = |(value, rate): (f64, f64)| value + rate * t;

        let a = at(self.a);
        let e = at(self.e);
        if a <= 0.0 {
            return Err(EphemError::InvalidElements("semi-major axis must be positive"));
        }
        let incl = at(self.inclination).to_radians();
        let l = at(self.mean_longitude);
        let varpi = at(self.perihelion_longitude);
        let node = at(self.node_longitude);

        let omega = (varpi - node).to_radians();
        let mean_anomaly = normalize_360(l - varpi).to_radians();
        let ecc_anom = solve_kepler(mean_anomaly, e)?;

        // Orbital-plane coordinates, x' toward perihelion
        let xp = a * (ecc_anom.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

        let node = node.to_radians();
        let (sin_w, cos_w) = omega.sin_cos();
        let (sin_n, cos_n) = node.sin_cos();
        let (sin_i, cos_i) = incl.sin_cos();

        Ok([
            (cos_w * cos_n - sin_w * sin_n * cos_i) * xp
                + (-sin_w * cos_n - cos_w * sin_n * cos_i) * yp,
            (cos_w * sin_n + sin_w * cos_n * cos_i) * xp
                + (-sin_w * sin_n + cos_w * cos_n * cos_i) * yp,
            sin_w * sin_i * xp + cos_w * sin_i * yp,
        ])
    }
}

/// Standish Table 1: Mercury, Venus, Earth–Moon barycentre, Mars, Jupiter, Saturn.
static ELEMENTS: [OrbitalElements; 6] = [
    OrbitalElements {
        a: (0.387_099_27, 0.000_000_37),
        e: (0.205_635_93, 0.000_019_06),
        inclination: (7.004_979_02, -0.005_947_49),
        mean_longitude: (252.250_323_50, 149_472.674_111_75),
        perihelion_longitude: (77.457_796_28, 0.160_476_89),
        node_longitude: (48.330_765_93, -0.125_340_81),
    },
    OrbitalElements {
        a: (0.723_335_66, 0.000_003_90),
        e: (0.006_776_72, -0.000_041_07),
        inclination: (3.394_676_05, -0.000_788_90),
        mean_longitude: (181.979_099_50, 58_517.815_387_29),
        perihelion_longitude: (131.602_467_18, 0.002_683_29),
        node_longitude: (76.679_842_55, -0.277_694_18),
    },
    OrbitalElements {
        a: (1.000_002_61, 0.000_005_62),
        e: (0.016_711_23, -0.000_043_92),
        inclination: (-0.000_015_31, -0.012_946_68),
        mean_longitude: (100.464_571_66, 35_999.372_449_81),
        perihelion_longitude: (102.937_681_93, 0.323_273_64),
        node_longitude: (0.0, 0.0),
    },
    OrbitalElements {
        a: (1.523_710_34, 0.000_018_47),
        e: (0.093_394_10, 0.000_078_82),
        inclination: (1.849_691_42, -0.008_131_31),
        mean_longitude: (-4.553_432_05, 19_140.302_684_99),
        perihelion_longitude: (-23.943_629_59, 0.444_410_88),
        node_longitude: (49.559_538_91, -0.292_573_43),
    },
    OrbitalElements {
        a: (5.202_887_00, -0.000_116_07),
        e: (0.048_386_24, -0.000_132_53),
        inclination: (1.304_396_95, -0.001_837_14),
        mean_longitude: (34.396_440_51, 3_034.746_127_75),
        perihelion_longitude: (14.728_479_83, 0.212_526_68),
        node_longitude: (100.473_909_09, 0.204_691_06),
    },
    OrbitalElements {
        a: (9.536_675_94, -0.001_250_60),
        e: (0.053_861_79, -0.000_509_91),
        inclination: (2.485_991_87, 0.001_936_09),
        mean_longitude: (49.954_244_23, 1_222.493_622_01),
        perihelion_longitude: (92.598_878_31, -0.418_972_16),
        node_longitude: (113.662_424_48, -0.288_677_94),
    },
];

/// Earth–Moon barycentre elements, used as the observer's heliocentric position.
fn earth_elements() -> &'static OrbitalElements {
    &ELEMENTS[2]
}

/// Geocentric position and brightness of a planet at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Geocentric ecliptic coordinates, mean equinox of date.
    pub ecliptic: EclipticCoords,
    /// Right ascension / declination for the mean equator of date.
    pub equatorial: EquatorialCoords,
    /// Earth–planet distance in AU.
    pub distance_au: f64,
    /// Sun–planet distance in AU.
    pub heliocentric_distance_au: f64,
    /// Sun–planet–Earth angle in degrees [0, 180].
    pub phase_angle_deg: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
}

/// Position of `planet` at `t` Julian centuries since J2000.0.
///
/// Fails only if the Kepler solve does not converge, in which case the
/// error names the planet.
pub fn planet_position(planet: Planet, t: f64) -> Result<PlanetPosition, EphemError> {
    let helio = planet
        .elements()
        .heliocentric_xyz(t)
        .map_err(|e| e.for_planet(planet))?;
    let earth = earth_elements()
        .heliocentric_xyz(t)
        .map_err(|e| e.for_planet(planet))?;

    let geo = [helio[0] - earth[0], helio[1] - earth[1], helio[2] - earth[2]];
    let sph = cartesian_to_spherical(&geo);

    let r = norm(&helio);
    let delta = sph.distance;
    let big_r = norm(&earth);
    let cos_i = ((r * r + delta * delta - big_r * big_r) / (2.0 * r * delta)).clamp(-1.0, 1.0);
    let phase_angle_deg = cos_i.acos().to_degrees();

    let ecliptic = EclipticCoords {
        lon_deg: precess_ecliptic_longitude(sph.lon_deg, t),
        lat_deg: sph.lat_deg,
    };
    let equatorial = ecliptic_to_equatorial(ecliptic.lon_deg, ecliptic.lat_deg, mean_obliquity_deg(t));
    let magnitude = planet.magnitude(r, delta, phase_angle_deg);

    debug!(
        planet = planet.name(),
        ra_hours = equatorial.ra_hours,
        dec_deg = equatorial.dec_deg,
        distance_au = delta,
        magnitude,
        "planet position"
    );

    Ok(PlanetPosition {
        planet,
        ecliptic,
        equatorial,
        distance_au: delta,
        heliocentric_distance_au: r,
        phase_angle_deg,
        magnitude,
    })
}

fn norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
