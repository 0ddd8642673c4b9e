//! The brightest naked-eye stars visible from mid-northern latitudes.
//!
//! Positions J2000, distances in light-years (Hipparcos-era values),
//! colors approximate the B−V tint for display.

use super::constellations::StarCoordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BrightStar {
    pub name: &'static str,
    pub position: StarCoordinate,
    /// Visual magnitude.
    pub magnitude: f64,
    pub distance_ly: f64,
    /// Display color, `#RRGGBB`.
    pub color: &'static str,
}

const fn bright(
    name: &'static str,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
    distance_ly: f64,
    color: &'static str,
) -> BrightStar {
    BrightStar {
        name,
        position: StarCoordinate::new(ra_hours, dec_deg),
        magnitude,
        distance_ly,
        color,
    }
}

#[rustfmt::skip]
pub const BRIGHT_STARS: [BrightStar; 16] = [
    //      name          RA h     Dec °    mag     ly       color
    bright("Sirius",      6.752, -16.716, -1.46,    8.6, "#CAD7FF"),
    bright("Canopus",     6.399, -52.696, -0.74,  310.0, "#F8F7FF"),
    bright("Arcturus",   14.261,  19.182, -0.05,   36.7, "#FFD2A1"),
    bright("Vega",       18.616,  38.784,  0.03,   25.0, "#CAD7FF"),
    bright("Capella",     5.278,  45.998,  0.08,   42.9, "#FFF4E8"),
    bright("Rigel",       5.242,  -8.202,  0.13,  860.0, "#AABFFF"),
    bright("Procyon",     7.655,   5.225,  0.34,   11.5, "#F8F7FF"),
    bright("Betelgeuse",  5.919,   7.407,  0.50,  548.0, "#FFAD51"),
    bright("Altair",     19.846,   8.868,  0.77,   16.7, "#F8F7FF"),
    bright("Aldebaran",   4.599,  16.509,  0.85,   65.0, "#FFC46F"),
    bright("Antares",    16.490, -26.432,  0.96,  550.0, "#FF9B57"),
    bright("Spica",      13.420, -11.161,  0.97,  250.0, "#AABFFF"),
    bright("Pollux",      7.755,  28.026,  1.14,   34.0, "#FFD2A1"),
    bright("Deneb",      20.690,  45.280,  1.25, 2600.0, "#F8F7FF"),
    bright("Regulus",    10.139,  11.967,  1.35,   79.0, "#CAD7FF"),
    bright("Polaris",     2.530,  89.264,  1.98,  433.0, "#FFF4E8"),
];
