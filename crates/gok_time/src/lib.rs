//! Civil calendar, Julian Date and sidereal time.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Date conversions
//! - Julian centuries since J2000.0
//! - A validated `UtcTime` civil timestamp with string parsing
//! - Low-precision Greenwich and local mean sidereal time
//!
//! No timezone resolution happens here: callers hand in a timestamp in the
//! civil convention they chose (normally UTC) and get back pure numbers.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries, unix_seconds_to_jd,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, local_sidereal_time_for_jd};
pub use utc_time::UtcTime;
