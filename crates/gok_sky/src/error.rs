//! Error types for sky assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gok_ephem::EphemError;
use gok_time::TimeError;

/// Errors from sky computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SkyError {
    /// Invalid timestamp.
    Time(TimeError),
    /// Error from a position model.
    Ephem(EphemError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for SkyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for SkyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephem(e) => Some(e),
            Self::InvalidLocation(_) => None,
        }
    }
}

impl From<TimeError> for SkyError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemError> for SkyError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}
