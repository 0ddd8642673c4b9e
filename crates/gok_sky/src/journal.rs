//! Statistics over a caller-owned observation journal.
//!
//! Records are plain values; storing them is the host's business. The
//! helpers here only summarise what they are given.

use std::collections::BTreeSet;

use crate::bodies::CelestialBody;
use crate::catalog::COMMON_DEEP_SKY_OBJECTS;
use crate::constellation::ConstellationState;

/// Sky clarity scale, 1 (city lights) to 5 (pitch dark).
#[rustfmt::skip]
pub const CLARITY_SCALE: [(u8, &str); 5] = [
    (1, "Çok Kötü (Şehir Işıkları)"),
    (2, "Kötü"),
    (3, "Orta"),
    (4, "İyi"),
    (5, "Mükemmel (Zifiri Karanlık)"),
];

/// One logged observing session.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observation {
    /// Local date as entered, e.g. `2024-08-12`.
    pub date: String,
    /// Local time as entered, e.g. `22:30`.
    pub time: String,
    pub location: String,
    pub weather: String,
    /// Observed objects, separated by commas or newlines.
    pub objects: String,
    /// Clarity rating `"1"`..`"5"` on [`CLARITY_SCALE`].
    pub sky_clarity: String,
    pub notes: String,
}

impl Observation {
    /// Individual object names: split on `,` and newlines, trimmed, empties dropped.
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Numeric clarity; anything unparseable counts as 0.
    pub fn clarity_value(&self) -> f64 {
        self.sky_clarity
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Label for a clarity rating string, if it is on the scale.
pub fn clarity_label(rating: &str) -> Option<&'static str> {
    let value: u8 = rating.trim().parse().ok()?;
    CLARITY_SCALE
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Summary of a journal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObservationStats {
    pub total: usize,
    /// Mean clarity over all records, non-numeric ratings counted as 0.
    pub average_clarity: f64,
    /// Most often logged object (first letter capitalized) and its count.
    /// `None` when no record names an object.
    pub most_frequent: Option<(String, usize)>,
}

/// Summarise `observations`. Returns `None` for an empty journal.
///
/// Objects are counted case-insensitively. On a tie the object that was
/// first seen wins.
pub fn observation_stats(observations: &[Observation]) -> Option<ObservationStats> {
    if observations.is_empty() {
        return None;
    }

    let total = observations.len();
    let clarity_sum: f64 = observations.iter().map(Observation::clarity_value).sum();

    // Insertion-ordered counts; journals are small.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in observations.iter().flat_map(Observation::object_names) {
        let key = name.to_lowercase();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut most_frequent: Option<(&str, usize)> = None;
    for (key, count) in &counts {
        if most_frequent.is_none_or(|(_, best)| *count > best) {
            most_frequent = Some((key, *count));
        }
    }

    Some(ObservationStats {
        total,
        average_clarity: clarity_sum / total as f64,
        most_frequent: most_frequent.map(|(key, n)| (capitalize_first(key), n)),
    })
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Autocomplete list for the object field: current body names, constellation
/// names and the common deep-sky targets, sorted and de-duplicated.
pub fn suggestion_options(
    bodies: &[CelestialBody],
    constellations: &[ConstellationState],
) -> Vec<String> {
    let names: BTreeSet<&str> = bodies
        .iter()
        .map(|b| b.name)
        .chain(constellations.iter().map(|c| c.name))
        .chain(COMMON_DEEP_SKY_OBJECTS.iter().copied())
        .collect();
    names.into_iter().map(str::to_owned).collect()
}
