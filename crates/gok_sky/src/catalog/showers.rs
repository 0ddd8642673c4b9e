//! Annual meteor-shower calendar.
//!
//! Windows are month-day ranges applied to any year. A window whose start
//! is later in the year than its end crosses Dec 31 → Jan 1.

use std::fmt::{Display, Formatter};

/// A calendar day without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// A major annual meteor shower.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeteorShower {
    pub name: &'static str,
    pub start: MonthDay,
    pub end: MonthDay,
    pub peak: MonthDay,
    /// Radiant declination in degrees, for the visibility filter.
    pub radiant_dec_deg: f64,
    /// Zenithal hourly rate at peak.
    pub zhr: u32,
}

impl MeteorShower {
    /// Whether the window crosses the year boundary.
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    /// Whether `day` lies in the window, ends inclusive.
    pub fn contains(&self, day: MonthDay) -> bool {
        if self.wraps_year() {
            day >= self.start || day <= self.end
        } else {
            self.start <= day && day <= self.end
        }
    }
}

const fn md(month: u32, day: u32) -> MonthDay {
    MonthDay::new(month, day)
}

#[rustfmt::skip]
pub const METEOR_SHOWERS: [MeteorShower; 9] = [
    MeteorShower { name: "Quadrantids",     start: md(12, 28), end: md(1, 12),  peak: md(1, 3),   radiant_dec_deg:  49.0, zhr: 110 },
    MeteorShower { name: "Lyrids",          start: md(4, 16),  end: md(4, 25),  peak: md(4, 22),  radiant_dec_deg:  34.0, zhr: 18 },
    MeteorShower { name: "Eta Aquariids",   start: md(4, 19),  end: md(5, 28),  peak: md(5, 6),   radiant_dec_deg:  -1.0, zhr: 50 },
    MeteorShower { name: "Delta Aquariids", start: md(7, 12),  end: md(8, 23),  peak: md(7, 30),  radiant_dec_deg: -16.0, zhr: 25 },
    MeteorShower { name: "Perseids",        start: md(7, 17),  end: md(8, 24),  peak: md(8, 12),  radiant_dec_deg:  58.0, zhr: 100 },
    MeteorShower { name: "Orionids",        start: md(10, 2),  end: md(11, 7),  peak: md(10, 21), radiant_dec_deg:  16.0, zhr: 20 },
    MeteorShower { name: "Leonids",         start: md(11, 6),  end: md(11, 30), peak: md(11, 17), radiant_dec_deg:  22.0, zhr: 15 },
    MeteorShower { name: "Geminids",        start: md(12, 4),  end: md(12, 17), peak: md(12, 14), radiant_dec_deg:  33.0, zhr: 150 },
    MeteorShower { name: "Ursids",          start: md(12, 17), end: md(1, 2),   peak: md(12, 22), radiant_dec_deg:  75.0, zhr: 10 },
];
