//! Reference observing sites in Thrace.

/// A named observing site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    pub name: &'static str,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

impl City {
    /// Sea-level location of this city.
    pub fn location(&self) -> crate::location::GeoLocation {
        crate::location::GeoLocation::from_lat_lon(self.latitude, self.longitude)
    }
}

#[rustfmt::skip]
pub const THRACE_CITIES: [City; 6] = [
    City { name: "Çorlu", latitude: 41.1450, longitude: 27.4081 },
    City { name: "Tekirdağ", latitude: 40.3667, longitude: 27.4833 },
    City { name: "Edirne", latitude: 41.1357, longitude: 26.5561 },
    City { name: "Keşan", latitude: 41.3500, longitude: 26.4167 },
    City { name: "Lüleburgaz", latitude: 41.4167, longitude: 27.3667 },
    City { name: "Babaeski", latitude: 41.5000, longitude: 27.0167 },
];

/// Case-insensitive lookup in [`THRACE_CITIES`].
pub fn city_by_name(name: &str) -> Option<&'static City> {
    let wanted = name.trim().to_lowercase();
    THRACE_CITIES.iter().find(|c| c.name.to_lowercase() == wanted)
}
