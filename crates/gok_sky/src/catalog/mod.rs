//! Compiled-in static catalogs.
//!
//! All coordinates are J2000 equatorial. The tables are plain constants,
//! shared read-only by every computation.

mod cities;
mod constellations;
mod deep_sky;
mod showers;
mod stars;

pub use cities::{City, THRACE_CITIES, city_by_name};
pub use constellations::{CONSTELLATIONS, ConstellationCatalogEntry, StarCoordinate};
pub use deep_sky::COMMON_DEEP_SKY_OBJECTS;
pub use showers::{METEOR_SHOWERS, MeteorShower, MonthDay};
pub use stars::{BRIGHT_STARS, BrightStar};
