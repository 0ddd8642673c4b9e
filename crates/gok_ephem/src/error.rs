//! Error types for the ephemeris models.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::planets::Planet;

/// Errors from the position models.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Kepler's equation did not reach the tolerance within the iteration
    /// budget. `planet` is `None` when the solver was called directly.
    NonConvergence {
        planet: Option<Planet>,
        iterations: usize,
    },
    /// Orbital elements outside the elliptic domain (e ∉ [0, 1), a ≤ 0, ...).
    InvalidElements(&'static str),
}

impl EphemError {
    /// Attach the planet whose orbit failed to a solver error.
    pub fn for_planet(self, planet: Planet) -> Self {
        match self {
            Self::NonConvergence { iterations, .. } => Self::NonConvergence {
                planet: Some(planet),
                iterations,
            },
            other => other,
        }
    }
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonConvergence {
                planet: Some(p),
                iterations,
            } => write!(
                f,
                "Kepler solve for {} did not converge after {iterations} iterations",
                p.name()
            ),
            Self::NonConvergence {
                planet: None,
                iterations,
            } => write!(f, "Kepler solve did not converge after {iterations} iterations"),
            Self::InvalidElements(msg) => write!(f, "invalid orbital elements: {msg}"),
        }
    }
}

impl Error for EphemError {}
