//! Per-query observer frame: time scale values and local sidereal time
//! computed once and shared by every body and catalog transform.

use gok_frames::{EquatorialCoords, HorizontalCoords, equatorial_to_horizontal};
use gok_time::{UtcTime, jd_to_centuries, local_sidereal_time_for_jd};

use crate::error::SkyError;
use crate::location::GeoLocation;

/// Observer location at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverFrame {
    /// Julian Date of the instant.
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    /// Local mean sidereal time in degrees [0, 360).
    pub lst_deg: f64,
    /// Validated observer location.
    pub location: GeoLocation,
}

impl ObserverFrame {
    /// Validate the inputs and precompute the frame.
    pub fn new(time: &UtcTime, location: &GeoLocation) -> Result<Self, SkyError> {
        location.validate()?;
        Self::from_jd(time.to_jd()?, location)
    }

    /// Frame from a Julian Date.
    pub fn from_jd(jd: f64, location: &GeoLocation) -> Result<Self, SkyError> {
        location.validate()?;
        Ok(Self {
            jd,
            t: jd_to_centuries(jd),
            lst_deg: local_sidereal_time_for_jd(jd, location.longitude_deg),
            location: *location,
        })
    }

    /// Horizontal position of an equatorial point for this observer.
    pub fn to_horizontal(&self, eq: &EquatorialCoords) -> HorizontalCoords {
        equatorial_to_horizontal(eq.ra_hours, eq.dec_deg, self.lst_deg, self.location.latitude_deg)
    }
}
