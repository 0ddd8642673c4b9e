//! End-to-end checks of the sky assembly against known events.

use gok_sky::{
    BodyConfig, CONSTELLATIONS, GeoLocation, METEOR_SHOWERS, MoonPhase, ObserverFrame,
    RiseSetConfig, RiseSetEvent, RiseSetResult, SkyEventConfig, SkyEventKind, THRACE_CITIES,
    approximate_local_noon_jd, compute_bodies, compute_moon_data, compute_rise_set,
    detect_sky_events, project_constellations,
};
use gok_time::{UtcTime, calendar_to_jd, jd_to_centuries};

fn utc(s: &str) -> UtcTime {
    s.parse().unwrap()
}

fn frame(s: &str, lat: f64, lon: f64) -> ObserverFrame {
    ObserverFrame::new(&utc(s), &GeoLocation::from_lat_lon(lat, lon)).unwrap()
}

fn sun_altitude(s: &str, lat: f64, lon: f64) -> f64 {
    let config = BodyConfig {
        include_stars: false,
        ..Default::default()
    };
    compute_bodies(&frame(s, lat, lon), &config)[0].altitude_deg
}

#[test]
fn full_moon_2024_01_25() {
    let t = jd_to_centuries(utc("2024-01-25T17:54:00Z").to_jd().unwrap());
    let moon = compute_moon_data(t);
    assert!(moon.illumination > 0.98, "illumination {}", moon.illumination);
    assert_eq!(moon.phase, MoonPhase::Full);
    assert_eq!(moon.phase_name, "Full Moon");
}

#[test]
fn equinox_local_noon_sun_altitude_corlu() {
    // Local apparent noon ≈ 10:18 UTC at 27.4°E on 2024-03-20
    let lat = 41.145;
    let alt = sun_altitude("2024-03-20T10:18:00Z", lat, 27.4081);
    assert!((alt - (90.0 - lat)).abs() < 0.5, "alt {alt}");
}

#[test]
fn equinox_local_noon_sun_altitude_southern() {
    // Sydney, local apparent noon ≈ 02:03 UTC
    let lat: f64 = -33.87;
    let alt = sun_altitude("2024-03-20T02:03:00Z", lat, 151.21);
    assert!((alt - (90.0 - lat.abs())).abs() < 0.5, "alt {alt}");
}

#[test]
fn perseids_detected_in_window_and_not_six_months_away() {
    let cfg = SkyEventConfig::default();
    let peak = detect_sky_events(&UtcTime::date(2024, 8, 12), 41.0, &METEOR_SHOWERS, &cfg).unwrap();
    assert!(
        peak.iter()
            .any(|e| e.shower == "Perseids" && e.kind == SkyEventKind::Peak)
    );

    let winter = detect_sky_events(&UtcTime::date(2025, 2, 12), 41.0, &METEOR_SHOWERS, &cfg).unwrap();
    assert!(winter.is_empty(), "{winter:?}");
}

#[test]
fn ursids_wrap_the_year() {
    let cfg = SkyEventConfig::default();
    for date in [UtcTime::date(2024, 12, 30), UtcTime::date(2025, 1, 2)] {
        let events = detect_sky_events(&date, 41.0, &METEOR_SHOWERS, &cfg).unwrap();
        assert!(
            events
                .iter()
                .any(|e| e.shower == "Ursids" && e.kind == SkyEventKind::Active),
            "{date}: {events:?}"
        );
    }
}

#[test]
fn polaris_tracks_latitude_everywhere_in_thrace() {
    let config = BodyConfig::default();
    for city in &THRACE_CITIES {
        let f = frame("2024-11-05T20:00:00Z", city.latitude, city.longitude);
        let bodies = compute_bodies(&f, &config);
        let polaris = bodies.iter().find(|b| b.name == "Polaris").unwrap();
        assert!(
            (polaris.altitude_deg - city.latitude).abs() < 1.0,
            "{}: {}",
            city.name,
            polaris.altitude_deg
        );
    }
}

#[test]
fn ursa_major_is_circumpolar_in_thrace() {
    // Dubhe/Merak stay above the horizon at 41°N all night
    let f = frame("2024-11-05T22:00:00Z", 41.145, 27.4081);
    let states = project_constellations(&f, &CONSTELLATIONS);
    let uma = states.iter().find(|s| s.name.starts_with("Ursa Major")).unwrap();
    assert!(uma.is_partly_visible());
    assert_eq!(states.len(), CONSTELLATIONS.len());
}

#[test]
fn sunset_precedes_dusk_precedes_darkness() {
    let loc = GeoLocation::from_lat_lon(41.145, 27.4081);
    let noon = approximate_local_noon_jd(calendar_to_jd(2024, 9, 1.0), loc.longitude_deg);
    let cfg = RiseSetConfig::default();
    let jd = |event| match compute_rise_set(&loc, event, noon, &cfg).unwrap() {
        RiseSetResult::Event { jd_utc, .. } => jd_utc,
        other => panic!("{other:?}"),
    };
    let sunset = jd(RiseSetEvent::Sunset);
    let civil = jd(RiseSetEvent::CivilDusk);
    let astro = jd(RiseSetEvent::AstronomicalDusk);
    assert!(sunset < civil && civil < astro);
    // Civil twilight lasts roughly half an hour at this latitude
    let civil_minutes = (civil - sunset) * 1440.0;
    assert!((20.0..45.0).contains(&civil_minutes), "{civil_minutes}");
}
