//! Sky assembly for naked-eye observing.
//!
//! Combines the position models of `gok_ephem` with the static catalogs of
//! this crate into the observer-facing results:
//! - horizontal positions of the Sun, Moon, planets and bright stars
//! - constellation stick figures projected to azimuth/altitude
//! - moon phase, illumination and age
//! - meteor-shower calendar matches
//! - sunrise, sunset and twilight times
//! - observation-journal statistics
//!
//! Everything is a pure function of (time, location, catalogs).

pub mod bodies;
pub mod catalog;
pub mod constellation;
pub mod error;
pub mod journal;
pub mod location;
pub mod moon_phase;
pub mod observer;
pub mod riseset;
pub mod riseset_types;
pub mod sky_events;

pub use bodies::{BodyConfig, BodyKind, CelestialBody, compute_bodies};
pub use catalog::{
    BRIGHT_STARS, BrightStar, COMMON_DEEP_SKY_OBJECTS, CONSTELLATIONS, City,
    ConstellationCatalogEntry, METEOR_SHOWERS, MeteorShower, MonthDay, StarCoordinate,
    THRACE_CITIES, city_by_name,
};
pub use constellation::{ConstellationLineState, ConstellationState, project_constellations};
pub use error::SkyError;
pub use journal::{
    CLARITY_SCALE, Observation, ObservationStats, clarity_label, observation_stats,
    suggestion_options,
};
pub use location::GeoLocation;
pub use moon_phase::{MoonData, MoonPhase, compute_moon_data, moon_data_from_elongation};
pub use observer::ObserverFrame;
pub use riseset::{approximate_local_noon_jd, compute_all_events, compute_rise_set};
pub use riseset_types::{ALL_EVENTS, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use sky_events::{
    SkyEvent, SkyEventConfig, SkyEventKind, detect_sky_events, radiant_max_altitude_deg,
};
