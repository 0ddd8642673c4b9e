//! Constellation stick figures projected onto the observer's sky.
//!
//! Every segment endpoint is transformed on its own, so a figure that
//! straddles the horizon keeps its geometry. Figures entirely below the
//! horizon are still returned; hiding them is a display concern.

use gok_frames::{HorizontalCoords, precess_equatorial_j2000};
use tracing::debug;

use crate::catalog::{ConstellationCatalogEntry, StarCoordinate};
use crate::observer::ObserverFrame;

/// One projected line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstellationLineState {
    pub from: HorizontalCoords,
    pub to: HorizontalCoords,
}

/// A projected stick figure, segments in catalog order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstellationState {
    pub name: &'static str,
    pub lines: Vec<ConstellationLineState>,
}

impl ConstellationState {
    /// Whether at least one endpoint is above the horizon.
    pub fn is_partly_visible(&self) -> bool {
        self.lines
            .iter()
            .any(|l| l.from.is_above_horizon() || l.to.is_above_horizon())
    }
}

/// Project every entry of `catalog` for the observer in `frame`.
pub fn project_constellations(
    frame: &ObserverFrame,
    catalog: &[ConstellationCatalogEntry],
) -> Vec<ConstellationState> {
    let project = |star: &StarCoordinate| frame.to_horizontal(&precess_equatorial_j2000(star, frame.t));

    let states: Vec<ConstellationState> = catalog
        .iter()
        .map(|entry| ConstellationState {
            name: entry.name,
            lines: entry
                .lines
                .iter()
                .map(|(a, b)| ConstellationLineState {
                    from: project(a),
                    to: project(b),
                })
                .collect(),
        })
        .collect();

    debug!(
        jd = frame.jd,
        count = states.len(),
        visible = states.iter().filter(|s| s.is_partly_visible()).count(),
        "constellations projected"
    );
    states
}
