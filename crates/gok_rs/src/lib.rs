//! Convenience entry points for the gok positional astronomy engine.
//!
//! Every function takes a UTC timestamp and the observer's latitude and
//! longitude in degrees, validates them up front and returns plain values.
//! There is no global state: the same inputs always give bit-identical
//! results.
//!
//! # Quick start
//!
//! ```rust
//! use gok_rs::*;
//!
//! let time: UtcTime = "2024-08-12T21:00:00Z".parse().unwrap();
//! let corlu = city_by_name("Çorlu").unwrap();
//! let bodies = compute_bodies(time, corlu.latitude, corlu.longitude).unwrap();
//! let events = compute_sky_events(time, corlu.latitude, corlu.longitude).unwrap();
//! assert_eq!(bodies[0].name, "Sun");
//! assert!(events.iter().any(|e| e.starts_with("Perseids")));
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    SkyConfig, SkySnapshot, compute_bodies, compute_bodies_with, compute_constellations,
    compute_moon_phase, compute_sky, compute_sky_events, compute_sky_events_with,
    compute_sky_on_date, compute_twilight, compute_twilight_with,
};
pub use error::GokError;

// Re-export the types the entry points take and return, so callers need
// only this crate.
pub use gok_frames::HorizontalCoords;
pub use gok_sky::{
    BodyConfig, BodyKind, CLARITY_SCALE, CelestialBody, City, ConstellationLineState,
    ConstellationState, GeoLocation, MoonData, MoonPhase, Observation, ObservationStats,
    RiseSetConfig, RiseSetEvent, RiseSetResult, SkyEvent, SkyEventConfig, SkyEventKind,
    THRACE_CITIES, city_by_name, clarity_label, observation_stats, suggestion_options,
};
pub use gok_time::{TimeError, UtcTime};
