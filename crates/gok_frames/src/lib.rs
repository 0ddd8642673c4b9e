//! Coordinate frames for naked-eye positional astronomy.
//!
//! Provides angle normalization, the obliquity of the ecliptic, precession
//! in ecliptic longitude, ecliptic ↔ equatorial rotation, the
//! equatorial → horizontal (azimuth/altitude) transform and
//! Cartesian ↔ spherical conversion.

pub mod angle;
pub mod horizontal;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use angle::{normalize_180, normalize_360};
pub use horizontal::{
    DEGENERATE_EPS, EquatorialCoords, HorizontalCoords, equatorial_to_horizontal, hour_angle_deg,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{
    general_precession_arcsec, general_precession_deg, precess_ecliptic_longitude,
    precess_equatorial_j2000,
};
pub use rotation::{
    EclipticCoords, ecliptic_to_equatorial, ecliptic_xyz_to_equatorial, equatorial_to_ecliptic,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
