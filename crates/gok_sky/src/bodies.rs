//! Horizontal positions of the Sun, Moon, planets and bright stars.
//!
//! Each body is computed independently. A planet whose Kepler solve fails
//! is left out of the result and reported at `warn` level; it never aborts
//! the batch. Bodies below the horizon are returned with negative altitude.

use gok_ephem::{
    ALL_PLANETS, EphemError, Planet, PlanetPosition, SUN_APPARENT_MAGNITUDE, moon_position,
    planet_position, sun_position,
};
use gok_frames::{HorizontalCoords, precess_equatorial_j2000};
use tracing::{debug, warn};

use crate::catalog::BRIGHT_STARS;
use crate::observer::ObserverFrame;

/// Category of a computed body. Fixes the distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyKind {
    Sun,
    Moon,
    Planet,
    Star,
}

impl BodyKind {
    /// Unit of [`CelestialBody::distance`] for this kind.
    pub const fn distance_unit(self) -> &'static str {
        match self {
            Self::Sun | Self::Planet => "AU",
            Self::Moon => "km",
            Self::Star => "ly",
        }
    }
}

/// A body as seen by the observer at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CelestialBody {
    pub name: &'static str,
    pub kind: BodyKind,
    /// Degrees [0, 360), North = 0, East = 90.
    pub azimuth_deg: f64,
    /// Degrees [-90, 90].
    pub altitude_deg: f64,
    /// Distance in the unit given by [`BodyKind::distance_unit`].
    pub distance: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
    /// Display color, `#RRGGBB`.
    pub color: &'static str,
}

impl CelestialBody {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

/// Options for body assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    /// Append the bright-star catalog after the solar-system bodies.
    /// Default: true.
    pub include_stars: bool,
    /// Lower the Moon's altitude by its horizontal parallax (topocentric
    /// correction, up to ~1°). Default: true.
    pub moon_parallax: bool,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            include_stars: true,
            moon_parallax: true,
        }
    }
}

/// Display color of a planet.
pub const fn planet_color(planet: Planet) -> &'static str {
    match planet {
        Planet::Mercury => "#B1ADAD",
        Planet::Venus => "#EEDC82",
        Planet::Mars => "#E27B58",
        Planet::Jupiter => "#D8CA9D",
        Planet::Saturn => "#E3C16F",
    }
}

const SUN_COLOR: &str = "#FDB813";
const MOON_COLOR: &str = "#F4F6F0";

/// Sun, Moon, the five naked-eye planets and (optionally) the bright stars,
/// in that order.
pub fn compute_bodies(frame: &ObserverFrame, config: &BodyConfig) -> Vec<CelestialBody> {
    let mut bodies = Vec::with_capacity(7 + BRIGHT_STARS.len());

    let sun = sun_position(frame.t);
    bodies.push(body(
        "Sun",
        BodyKind::Sun,
        frame.to_horizontal(&sun.equatorial),
        sun.distance_au,
        SUN_APPARENT_MAGNITUDE,
        SUN_COLOR,
    ));

    let moon = moon_position(frame.t);
    let mut moon_hz = frame.to_horizontal(&moon.equatorial);
    if config.moon_parallax {
        moon_hz.altitude_deg = topocentric_altitude(moon_hz.altitude_deg, moon.parallax_deg);
    }
    bodies.push(body(
        "Moon",
        BodyKind::Moon,
        moon_hz,
        moon.distance_km,
        moon.magnitude(),
        MOON_COLOR,
    ));

    bodies.extend(planet_bodies(frame, planet_position));

    if config.include_stars {
        for star in &BRIGHT_STARS {
            let eq = precess_equatorial_j2000(&star.position, frame.t);
            bodies.push(body(
                star.name,
                BodyKind::Star,
                frame.to_horizontal(&eq),
                star.distance_ly,
                star.magnitude,
                star.color,
            ));
        }
    }

    debug!(
        jd = frame.jd,
        count = bodies.len(),
        above_horizon = bodies.iter().filter(|b| b.is_above_horizon()).count(),
        "bodies computed"
    );
    bodies
}

/// Planets in catalog order, skipping any whose position cannot be computed.
fn planet_bodies<F>(frame: &ObserverFrame, position: F) -> Vec<CelestialBody>
where
    F: Fn(Planet, f64) -> Result<PlanetPosition, EphemError>,
{
    let mut planets = Vec::with_capacity(ALL_PLANETS.len());
    for &planet in &ALL_PLANETS {
        match position(planet, frame.t) {
            Ok(pos) => planets.push(body(
                planet.name(),
                BodyKind::Planet,
                frame.to_horizontal(&pos.equatorial),
                pos.distance_au,
                pos.magnitude,
                planet_color(planet),
            )),
            Err(e) => warn!(planet = planet.name(), error = %e, "planet omitted"),
        }
    }
    planets
}

fn body(
    name: &'static str,
    kind: BodyKind,
    hz: HorizontalCoords,
    distance: f64,
    magnitude: f64,
    color: &'static str,
) -> CelestialBody {
    CelestialBody {
        name,
        kind,
        azimuth_deg: hz.azimuth_deg,
        altitude_deg: hz.altitude_deg.clamp(-90.0, 90.0),
        distance: distance.max(0.0),
        magnitude,
        color,
    }
}

/// Geocentric → topocentric altitude: h' = h − π·cos h.
fn topocentric_altitude(altitude_deg: f64, parallax_deg: f64) -> f64 {
    (altitude_deg - parallax_deg * altitude_deg.to_radians().cos()).clamp(-90.0, 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::GeoLocation;
    use gok_time::UtcTime;

    fn frame() -> ObserverFrame {
        ObserverFrame::new(
            &UtcTime::new(2024, 8, 12, 21, 0, 0.0),
            &GeoLocation::from_lat_lon(41.145, 27.4081),
        )
        .unwrap()
    }

    #[test]
    fn default_order_and_count() {
        let bodies = compute_bodies(&frame(), &BodyConfig::default());
        assert_eq!(bodies.len(), 7 + BRIGHT_STARS.len());
        assert_eq!(bodies[0].kind, BodyKind::Sun);
        assert_eq!(bodies[1].kind, BodyKind::Moon);
        assert!(bodies[2..7].iter().all(|b| b.kind == BodyKind::Planet));
        assert!(bodies[7..].iter().all(|b| b.kind == BodyKind::Star));
    }

    #[test]
    fn stars_can_be_excluded() {
        let config = BodyConfig {
            include_stars: false,
            ..Default::default()
        };
        assert_eq!(compute_bodies(&frame(), &config).len(), 7);
    }

    #[test]
    fn parallax_lowers_the_moon() {
        let f = frame();
        let with = compute_bodies(&f, &BodyConfig::default());
        let without = compute_bodies(
            &f,
            &BodyConfig {
                moon_parallax: false,
                ..Default::default()
            },
        );
        let drop = without[1].altitude_deg - with[1].altitude_deg;
        assert!(drop > 0.0 && drop < 1.05, "drop = {drop}");
        assert_eq!(with[1].azimuth_deg, without[1].azimuth_deg);
    }

    #[test]
    fn sun_is_below_horizon_at_night() {
        let bodies = compute_bodies(&frame(), &BodyConfig::default());
        assert!(bodies[0].altitude_deg < -10.0, "sun alt {}", bodies[0].altitude_deg);
    }

    #[test]
    fn topocentric_correction_vanishes_at_zenith() {
        assert!((topocentric_altitude(90.0, 0.95) - 90.0).abs() < 1e-9);
        assert!((topocentric_altitude(0.0, 0.95) + 0.95).abs() < 1e-12);
    }

    #[test]
    fn non_converging_planet_is_omitted() {
        let f = frame();
        let planets = planet_bodies(&f, |planet, t| {
            if planet == Planet::Mars {
                Err(EphemError::NonConvergence {
                    planet: Some(planet),
                    iterations: gok_ephem::KEPLER_MAX_ITERATIONS,
                })
            } else {
                planet_position(planet, t)
            }
        });
        let names: Vec<&str> = planets.iter().map(|b| b.name).collect();
        assert_eq!(names, ["Mercury", "Venus", "Jupiter", "Saturn"]);

        let all = compute_bodies(&f, &BodyConfig::default());
        for p in &planets {
            assert!(all.contains(p), "{} differs from the full batch", p.name);
        }
    }

    #[test]
    fn every_planet_failing_leaves_an_empty_list() {
        let planets = planet_bodies(&frame(), |_, _| Err(EphemError::InvalidElements("e >= 1")));
        assert!(planets.is_empty());
    }

    #[test]
    fn batch_keeps_sun_and_moon_around_planets() {
        let bodies = compute_bodies(&frame(), &BodyConfig::default());
        let planets = planet_bodies(&frame(), planet_position);
        assert_eq!(&bodies[2..7], planets.as_slice());
        assert_eq!(bodies[0].name, "Sun");
        assert_eq!(bodies[1].name, "Moon");
    }

    #[test]
    fn distance_units() {
        assert_eq!(BodyKind::Moon.distance_unit(), "km");
        assert_eq!(BodyKind::Star.distance_unit(), "ly");
        assert_eq!(BodyKind::Planet.distance_unit(), "AU");
    }
}
