//! Types for sunrise/sunset and twilight calculations.

use std::f64::consts::PI;

/// Mean Earth radius in meters, for the geometric horizon dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears, refraction included.
    Sunrise,
    /// Upper limb of the Sun disappears.
    Sunset,
    /// Sun centre 6° below the horizon, morning.
    CivilDawn,
    /// Sun centre 6° below the horizon, evening.
    CivilDusk,
    /// Sun centre 12° below the horizon, morning.
    NauticalDawn,
    /// Sun centre 12° below the horizon, evening.
    NauticalDusk,
    /// Sun centre 18° below the horizon, morning.
    AstronomicalDawn,
    /// Sun centre 18° below the horizon, evening. Full darkness from here.
    AstronomicalDusk,
}

/// All events in chronological order through one day.
pub const ALL_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

impl RiseSetEvent {
    /// Twilight depression angle in degrees, or `None` for sunrise/sunset
    /// whose depression depends on [`RiseSetConfig`].
    pub fn twilight_depression_deg(self) -> Option<f64> {
        match self {
            Self::Sunrise | Self::Sunset => None,
            Self::CivilDawn | Self::CivilDusk => Some(6.0),
            Self::NauticalDawn | Self::NauticalDusk => Some(12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(18.0),
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDawn => "Civil dawn",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }

    /// Geometric altitude of the Sun's centre at the event, in degrees
    /// (negative = below the horizon).
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64) -> f64 {
        match event.twilight_depression_deg() {
            Some(depression) => -depression,
            None => -self.horizon_depression_deg(altitude_m),
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UTC).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun stays below the target altitude all day (polar night).
    NeverRises,
    /// Sun stays above the target altitude all day (midnight sun).
    NeverSets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twilight_depressions() {
        assert_eq!(RiseSetEvent::CivilDawn.twilight_depression_deg(), Some(6.0));
        assert_eq!(RiseSetEvent::NauticalDusk.twilight_depression_deg(), Some(12.0));
        assert_eq!(RiseSetEvent::AstronomicalDawn.twilight_depression_deg(), Some(18.0));
        assert_eq!(RiseSetEvent::Sunrise.twilight_depression_deg(), None);
    }

    #[test]
    fn is_rising_correct() {
        for e in ALL_EVENTS {
            let expect = matches!(
                e,
                RiseSetEvent::AstronomicalDawn
                    | RiseSetEvent::NauticalDawn
                    | RiseSetEvent::CivilDawn
                    | RiseSetEvent::Sunrise
            );
            assert_eq!(e.is_rising(), expect, "{}", e.name());
        }
    }

    #[test]
    fn depression_sea_level() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(0.0);
        assert!((d - 50.0 / 60.0).abs() < 1e-10, "sea level: {d}");
    }

    #[test]
    fn depression_1000m() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        let base = 50.0 / 60.0;
        // sqrt(2·1000/6371000) ≈ 0.01772 rad ≈ 1.015°
        assert!(d > base + 0.9 && d < base + 1.2, "1000m depression {d}");
    }

    #[test]
    fn depression_no_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        assert!((c.horizon_depression_deg(10_000.0) - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn target_altitudes() {
        let c = RiseSetConfig::default();
        assert_eq!(c.target_altitude_deg(RiseSetEvent::CivilDusk, 500.0), -6.0);
        assert!((c.target_altitude_deg(RiseSetEvent::Sunset, 0.0) + 50.0 / 60.0).abs() < 1e-12);
    }
}
