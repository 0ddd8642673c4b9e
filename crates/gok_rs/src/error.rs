//! Unified error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gok_sky::SkyError;
use gok_time::TimeError;

/// Errors from the top-level entry points.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GokError {
    /// Malformed date, or latitude/longitude out of range. Rejected before
    /// any computation starts.
    InvalidInput(String),
    /// A computation failed after the inputs were accepted.
    Compute(SkyError),
}

impl Display for GokError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Compute(e) => write!(f, "computation error: {e}"),
        }
    }
}

impl Error for GokError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<TimeError> for GokError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<SkyError> for GokError {
    fn from(e: SkyError) -> Self {
        match e {
            SkyError::Time(t) => Self::from(t),
            e @ SkyError::InvalidLocation(_) => Self::InvalidInput(e.to_string()),
            other => Self::Compute(other),
        }
    }
}
