//! Meteor-shower calendar matching.
//!
//! A pure calendar lookup: only the month and day of the supplied date are
//! matched against the shower windows (the year matters only for the
//! look-ahead day count). Body positions are not consulted.

use std::fmt::{Display, Formatter};

use gok_time::{UtcTime, calendar_to_jd};
use tracing::debug;

use crate::catalog::{MeteorShower, MonthDay};
use crate::error::SkyError;

/// How a shower relates to the queried date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SkyEventKind {
    /// The date is the shower's peak day.
    Peak,
    /// The date is inside the window but not on the peak.
    Active,
    /// Outside the window; the peak is this many days ahead.
    Upcoming { days_until_peak: u32 },
}

/// A detected meteor-shower match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkyEvent {
    pub shower: &'static str,
    pub kind: SkyEventKind,
    pub start: MonthDay,
    pub end: MonthDay,
    pub peak: MonthDay,
    pub zhr: u32,
}

impl SkyEvent {
    fn new(shower: &MeteorShower, kind: SkyEventKind) -> Self {
        Self {
            shower: shower.name,
            kind,
            start: shower.start,
            end: shower.end,
            peak: shower.peak,
            zhr: shower.zhr,
        }
    }
}

impl Display for SkyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SkyEventKind::Peak => write!(
                f,
                "{} meteor shower peaks tonight (up to {} meteors/hour, active {} to {})",
                self.shower, self.zhr, self.start, self.end
            ),
            SkyEventKind::Active => write!(
                f,
                "{} meteor shower is active ({} to {}, peak {})",
                self.shower, self.start, self.end, self.peak
            ),
            SkyEventKind::Upcoming { days_until_peak: 1 } => {
                write!(f, "{} meteor shower peaks tomorrow ({})", self.shower, self.peak)
            }
            SkyEventKind::Upcoming { days_until_peak } => write!(
                f,
                "{} meteor shower peaks in {days_until_peak} days ({})",
                self.shower, self.peak
            ),
        }
    }
}

/// Options for event detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyEventConfig {
    /// Report showers whose peak is at most this many days ahead as
    /// `Upcoming`. 0 disables look-ahead. Default: 0.
    pub lookahead_days: u32,
    /// Drop showers whose radiant never rises at the observer's latitude.
    /// Default: false.
    pub radiant_filter: bool,
}

impl Default for SkyEventConfig {
    fn default() -> Self {
        Self {
            lookahead_days: 0,
            radiant_filter: false,
        }
    }
}

/// Highest altitude a radiant at `dec_deg` reaches, seen from `latitude_deg`.
pub fn radiant_max_altitude_deg(latitude_deg: f64, dec_deg: f64) -> f64 {
    90.0 - (latitude_deg - dec_deg).abs()
}

/// Showers matching `date`, in catalog order.
pub fn detect_sky_events(
    date: &UtcTime,
    latitude_deg: f64,
    showers: &[MeteorShower],
    config: &SkyEventConfig,
) -> Result<Vec<SkyEvent>, SkyError> {
    date.validate()?;
    let today = MonthDay::new(date.month, date.day);

    let mut events = Vec::new();
    for shower in showers {
        if config.radiant_filter
            && radiant_max_altitude_deg(latitude_deg, shower.radiant_dec_deg) <= 0.0
        {
            continue;
        }

        if today == shower.peak {
            events.push(SkyEvent::new(shower, SkyEventKind::Peak));
        } else if shower.contains(today) {
            events.push(SkyEvent::new(shower, SkyEventKind::Active));
        } else if config.lookahead_days > 0 {
            let days = days_until(date.year, today, shower.peak);
            if days <= config.lookahead_days {
                events.push(SkyEvent::new(
                    shower,
                    SkyEventKind::Upcoming {
                        days_until_peak: days,
                    },
                ));
            }
        }
    }

    debug!(date = %today, count = events.len(), "sky events");
    Ok(events)
}

/// Whole days from `today` to the next occurrence of `target` (0 if equal).
fn days_until(year: i32, today: MonthDay, target: MonthDay) -> u32 {
    let from = calendar_to_jd(year, today.month, today.day as f64);
    let target_year = if target < today { year + 1 } else { year };
    let to = calendar_to_jd(target_year, target.month, target.day as f64);
    (to - from).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::METEOR_SHOWERS;

    fn events(date: UtcTime, config: &SkyEventConfig) -> Vec<SkyEvent> {
        detect_sky_events(&date, 41.1, &METEOR_SHOWERS, config).unwrap()
    }

    #[test]
    fn perseid_peak_is_flagged() {
        let ev = events(UtcTime::date(2024, 8, 12), &SkyEventConfig::default());
        let perseids = ev.iter().find(|e| e.shower == "Perseids").unwrap();
        assert_eq!(perseids.kind, SkyEventKind::Peak);
        assert!(perseids.to_string().contains("Perseids"));
        assert!(perseids.to_string().contains("peaks tonight"));
    }

    #[test]
    fn off_peak_is_active() {
        let ev = events(UtcTime::date(2024, 8, 1), &SkyEventConfig::default());
        let kinds: Vec<_> = ev.iter().map(|e| (e.shower, e.kind)).collect();
        assert!(kinds.contains(&("Perseids", SkyEventKind::Active)));
        assert!(kinds.contains(&("Delta Aquariids", SkyEventKind::Active)));
    }

    #[test]
    fn quiet_date_has_nothing() {
        assert!(events(UtcTime::date(2025, 2, 12), &SkyEventConfig::default()).is_empty());
        assert!(events(UtcTime::date(2024, 6, 15), &SkyEventConfig::default()).is_empty());
    }

    #[test]
    fn lookahead_reports_upcoming() {
        let config = SkyEventConfig {
            lookahead_days: 14,
            ..Default::default()
        };
        let ev = events(UtcTime::date(2024, 4, 10), &config);
        assert_eq!(ev.len(), 1);
        assert_eq!(ev[0].shower, "Lyrids");
        assert_eq!(ev[0].kind, SkyEventKind::Upcoming { days_until_peak: 12 });
        assert_eq!(ev[0].to_string(), "Lyrids meteor shower peaks in 12 days (04-22)");
    }

    #[test]
    fn lookahead_crosses_new_year() {
        let config = SkyEventConfig {
            lookahead_days: 5,
            ..Default::default()
        };
        // Quadrantid window opens Dec 28; on Dec 27 the Jan 3 peak is 7 days away
        let ev = events(UtcTime::date(2024, 12, 27), &config);
        assert!(!ev.iter().any(|e| e.shower == "Quadrantids"));
        assert_eq!(days_until(2024, MonthDay::new(12, 27), MonthDay::new(1, 3)), 7);
    }

    #[test]
    fn radiant_filter_drops_never_rising_radiants() {
        let config = SkyEventConfig {
            radiant_filter: true,
            ..Default::default()
        };
        // Ursids radiant at +75° never rises from 20°S
        let date = UtcTime::date(2024, 12, 22);
        let south = detect_sky_events(&date, -20.0, &METEOR_SHOWERS, &config).unwrap();
        assert!(!south.iter().any(|e| e.shower == "Ursids"));
        let north = detect_sky_events(&date, 41.1, &METEOR_SHOWERS, &config).unwrap();
        assert!(north.iter().any(|e| e.shower == "Ursids"));
    }

    #[test]
    fn invalid_date_rejected() {
        let err = detect_sky_events(
            &UtcTime::date(2024, 2, 30),
            41.0,
            &METEOR_SHOWERS,
            &SkyEventConfig::default(),
        );
        assert!(matches!(err, Err(SkyError::Time(_))));
    }
}
