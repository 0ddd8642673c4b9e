//! Analytic position models for the Sun, the Moon and the naked-eye planets.
//!
//! Every model takes Julian centuries since J2000.0 (`T`) and returns
//! geocentric coordinates referred to the mean equinox and ecliptic of date,
//! together with equatorial RA/Dec obtained with the mean obliquity of date.
//! Accuracy is at the arcminute level, ample for naked-eye work.
//!
//! - [`sun`]: two-term equation-of-centre solar model
//! - [`moon`]: truncated periodic-term lunar theory
//! - [`planets`]: J2000 mean orbital elements + [`kepler`] solver

pub mod error;
pub mod kepler;
pub mod moon;
pub mod planets;
pub mod sun;

pub use error::EphemError;
pub use kepler::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_RAD, solve_kepler, solve_kepler_with};
pub use moon::{EARTH_EQUATORIAL_RADIUS_KM, MoonPosition, SYNODIC_MONTH_DAYS, moon_position};
pub use planets::{ALL_PLANETS, OrbitalElements, Planet, PlanetPosition, planet_position};
pub use sun::{SUN_APPARENT_MAGNITUDE, SunPosition, sun_position};
