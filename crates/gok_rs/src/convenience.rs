//! Validated entry points taking a UTC timestamp and a latitude/longitude.

use gok_sky::{
    BodyConfig, CONSTELLATIONS, CelestialBody, ConstellationState, GeoLocation, METEOR_SHOWERS,
    MoonData, ObserverFrame, RiseSetConfig, RiseSetEvent, RiseSetResult, SkyEvent,
    SkyEventConfig, approximate_local_noon_jd, compute_all_events, compute_moon_data,
    detect_sky_events, project_constellations,
};
use gok_time::{UtcTime, calendar_to_jd};
use tracing::debug;

use crate::error::GokError;

/// Reject out-of-range coordinates before any computation.
fn checked_location(latitude: f64, longitude: f64) -> Result<GeoLocation, GokError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(GokError::InvalidInput(format!(
            "latitude {latitude} outside [-90, 90]"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(GokError::InvalidInput(format!(
            "longitude {longitude} outside [-180, 180]"
        )));
    }
    Ok(GeoLocation::from_lat_lon(latitude, longitude))
}

fn frame(time: UtcTime, latitude: f64, longitude: f64) -> Result<ObserverFrame, GokError> {
    let location = checked_location(latitude, longitude)?;
    Ok(ObserverFrame::new(&time, &location)?)
}

/// Horizontal positions of the Sun, Moon, planets and bright stars.
pub fn compute_bodies(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<CelestialBody>, GokError> {
    compute_bodies_with(time, latitude, longitude, &BodyConfig::default())
}

/// [`compute_bodies`] with explicit options.
pub fn compute_bodies_with(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
    config: &BodyConfig,
) -> Result<Vec<CelestialBody>, GokError> {
    let frame = frame(time, latitude, longitude)?;
    Ok(gok_sky::compute_bodies(&frame, config))
}

/// Constellation figures projected to azimuth/altitude, in catalog order.
pub fn compute_constellations(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<ConstellationState>, GokError> {
    let frame = frame(time, latitude, longitude)?;
    Ok(project_constellations(&frame, &CONSTELLATIONS))
}

/// Moon phase, illumination and age. Independent of the observer.
pub fn compute_moon_phase(time: UtcTime) -> Result<MoonData, GokError> {
    Ok(compute_moon_data(time.to_centuries()?))
}

/// Descriptions of the meteor showers active or peaking on `time`'s date.
pub fn compute_sky_events(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<String>, GokError> {
    let events = compute_sky_events_with(time, latitude, longitude, &SkyEventConfig::default())?;
    Ok(events.iter().map(ToString::to_string).collect())
}

/// Structured meteor-shower matches with look-ahead and radiant options.
pub fn compute_sky_events_with(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
    config: &SkyEventConfig,
) -> Result<Vec<SkyEvent>, GokError> {
    checked_location(latitude, longitude)?;
    Ok(detect_sky_events(&time, latitude, &METEOR_SHOWERS, config)?)
}

/// Options for [`compute_sky`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkyConfig {
    pub bodies: BodyConfig,
    pub events: SkyEventConfig,
}

/// Everything the engine computes for one instant and place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkySnapshot {
    pub time: UtcTime,
    pub jd: f64,
    /// Local mean sidereal time, degrees.
    pub lst_deg: f64,
    pub location: GeoLocation,
    pub bodies: Vec<CelestialBody>,
    pub constellations: Vec<ConstellationState>,
    pub moon: MoonData,
    pub events: Vec<SkyEvent>,
}

/// Bodies, constellations, moon phase and sky events in one pass over a
/// shared observer frame.
pub fn compute_sky(
    time: UtcTime,
    latitude: f64,
    longitude: f64,
    config: &SkyConfig,
) -> Result<SkySnapshot, GokError> {
    compute_sky_on_date(time, time, latitude, longitude, config)
}

/// [`compute_sky`] with the shower calendar matched on `local_date` instead
/// of the UTC date of `time`.
///
/// Positions use the instant `time`; only the month and day of `local_date`
/// are read. Observers east of Greenwich pass their civil date here so an
/// evening query is not attributed to the previous UTC day.
pub fn compute_sky_on_date(
    time: UtcTime,
    local_date: UtcTime,
    latitude: f64,
    longitude: f64,
    config: &SkyConfig,
) -> Result<SkySnapshot, GokError> {
    let frame = frame(time, latitude, longitude)?;
    let events = detect_sky_events(&local_date, latitude, &METEOR_SHOWERS, &config.events)?;
    let snapshot = SkySnapshot {
        time,
        jd: frame.jd,
        lst_deg: frame.lst_deg,
        location: frame.location,
        bodies: gok_sky::compute_bodies(&frame, &config.bodies),
        constellations: project_constellations(&frame, &CONSTELLATIONS),
        moon: compute_moon_data(frame.t),
        events,
    };
    debug!(
        jd = snapshot.jd,
        bodies = snapshot.bodies.len(),
        events = snapshot.events.len(),
        "sky snapshot"
    );
    Ok(snapshot)
}

/// Sunrise, sunset and twilight for the UTC calendar day of `date`.
///
/// The time-of-day fields of `date` are ignored.
pub fn compute_twilight(
    date: UtcTime,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<(RiseSetEvent, RiseSetResult)>, GokError> {
    let location = checked_location(latitude, longitude)?;
    compute_twilight_with(date, &location, &RiseSetConfig::default())
}

/// [`compute_twilight`] with observer altitude and refraction options.
pub fn compute_twilight_with(
    date: UtcTime,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<Vec<(RiseSetEvent, RiseSetResult)>, GokError> {
    date.validate()?;
    location.validate()?;
    let jd_midnight = calendar_to_jd(date.year, date.month, date.day as f64);
    let jd_noon = approximate_local_noon_jd(jd_midnight, location.longitude_deg);
    Ok(compute_all_events(location, jd_noon, config)?)
}
