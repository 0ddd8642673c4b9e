//! Moon phase, illumination and age from the Sun–Moon elongation.
//!
//! The elongation E = λ☾ − λ☉ in [0, 360) is split into eight 45° buckets
//! centred on the principal phases: New is centred on 0°, First Quarter on
//! 90°, Full on 180°, Last Quarter on 270°. A value exactly on a bucket
//! boundary belongs to the higher bucket; 337.5° and above wraps to New.

use gok_ephem::{SYNODIC_MONTH_DAYS, moon_position};
use gok_frames::normalize_360;
use tracing::debug;

/// The eight named lunar phases, in waxing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in bucket order.
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Bucket for an elongation in degrees (any range).
    pub fn from_elongation(elongation_deg: f64) -> Self {
        let e = normalize_360(elongation_deg);
        let index = ((e + 22.5) / 45.0).floor() as usize % 8;
        ALL_PHASES[index]
    }

    /// Bucket index, 0 = New … 7 = Waning Crescent.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

/// Lunar phase summary at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonData {
    pub phase: MoonPhase,
    pub phase_name: &'static str,
    /// Illuminated fraction of the disc, [0, 1].
    pub illumination: f64,
    /// Days since new moon, [0, synodic month).
    pub age_days: f64,
    pub emoji: &'static str,
    /// Moon − Sun ecliptic longitude in degrees [0, 360).
    pub elongation_deg: f64,
}

/// Phase summary from an elongation in degrees.
pub fn moon_data_from_elongation(elongation_deg: f64) -> MoonData {
    let e = normalize_360(elongation_deg);
    let phase = MoonPhase::from_elongation(e);
    let illumination = ((1.0 - e.to_radians().cos()) / 2.0).clamp(0.0, 1.0);
    let age_days = e / 360.0 * SYNODIC_MONTH_DAYS;
    // Rounding just below 360° can land exactly on the synodic month
    let age_days = if age_days >= SYNODIC_MONTH_DAYS { 0.0 } else { age_days };

    MoonData {
        phase,
        phase_name: phase.name(),
        illumination,
        age_days,
        emoji: phase.emoji(),
        elongation_deg: e,
    }
}

/// Phase summary at `t` Julian centuries since J2000.0.
pub fn compute_moon_data(t: f64) -> MoonData {
    let data = moon_data_from_elongation(moon_position(t).elongation_deg);
    debug!(
        phase = data.phase_name,
        illumination = data.illumination,
        age_days = data.age_days,
        "moon phase"
    );
    data
}
