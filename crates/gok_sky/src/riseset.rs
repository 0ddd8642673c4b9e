//! Sunrise/sunset computation with twilight variants.
//!
//! Iterative algorithm on the low-precision solar model: an estimate from
//! the hour angle at the target altitude is refined by recomputing the
//! Sun's position at the estimated instant until the correction drops
//! below ~0.1 s. Times are UTC Julian Dates (UT1 − UTC is ignored).
//!
//! Sources: standard spherical astronomy (Meeus ch. 15, USNO).

use std::f64::consts::{PI, TAU};

use gok_ephem::sun_position;
use gok_time::{jd_to_centuries, local_sidereal_time_for_jd};
use tracing::debug;

use crate::error::SkyError;
use crate::location::GeoLocation;
use crate::riseset_types::{ALL_EVENTS, RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle rate, rad per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Sun RA and Dec in radians at a UTC Julian Date.
fn sun_ra_dec(jd: f64) -> (f64, f64) {
    let eq = sun_position(jd_to_centuries(jd)).equatorial;
    (eq.ra_deg().to_radians(), eq.dec_deg.to_radians())
}

/// Local hour angle of the Sun in radians, (−π, π].
fn sun_hour_angle(jd: f64, ra: f64, longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_for_jd(jd, longitude_deg).to_radians();
    let ha = (lst - ra).rem_euclid(TAU);
    if ha > PI { ha - TAU } else { ha }
}

/// Cosine of the hour angle at which the Sun reaches `h0`.
fn cos_hour_angle(h0: f64, phi: f64, dec: f64) -> f64 {
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Compute a single rise/set event for the Sun.
///
/// # Arguments
/// * `location`: observer geographic location
/// * `event`: the event type (sunrise, sunset, twilight variant)
/// * `jd_utc_noon`: approximate local noon on the desired date (UTC JD).
///   Use [`approximate_local_noon_jd`] to compute it from the date and longitude.
/// * `config`: refraction, limb, and altitude parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time as a UTC JD
/// * `RiseSetResult::NeverRises` if the Sun stays below the target altitude
/// * `RiseSetResult::NeverSets` if the Sun stays above the target altitude
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, SkyError> {
    location.validate()?;
    let phi = location.latitude_rad();
    let h0 = config
        .target_altitude_deg(event, location.altitude_m)
        .to_radians();

    let (ra, dec) = sun_ra_dec(jd_utc_noon);
    let cos_h0 = cos_hour_angle(h0, phi, dec);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit: correct noon by the Sun's hour angle at noon
    let ha_noon = sun_hour_angle(jd_utc_noon, ra, location.longitude_deg);
    let jd_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE;

    let h0_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = sun_ra_dec(jd_event);
        let cos_h_i = cos_hour_angle(h0, phi, dec_i);
        if cos_h_i > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h_i < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h_i.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let ha_actual = sun_hour_angle(jd_event, ra_i, location.longitude_deg);
        let mut dha = ha_target - ha_actual;
        if dha > PI {
            dha -= TAU;
        } else if dha < -PI {
            dha += TAU;
        }
        let correction = dha / SIDEREAL_RATE;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    debug!(event = event.name(), jd_utc = jd_event, "rise/set solved");
    Ok(RiseSetResult::Event {
        jd_utc: jd_event,
        event,
    })
}

/// Compute all eight rise/set events for a day.
///
/// Results follow [`ALL_EVENTS`] order: astronomical, nautical and civil
/// dawn, sunrise, sunset, civil, nautical and astronomical dusk. An event
/// that cannot occur is reported as `NeverRises`/`NeverSets` in its slot.
pub fn compute_all_events(
    location: &GeoLocation,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<Vec<(RiseSetEvent, RiseSetResult)>, SkyError> {
    ALL_EVENTS
        .iter()
        .map(|&evt| Ok((evt, compute_rise_set(location, evt, jd_utc_noon, config)?)))
        .collect()
}
