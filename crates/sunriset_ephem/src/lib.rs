//! Low-precision solar ephemeris for rise/set computations.
//!
//! This crate provides:
//! - Angle reduction to one revolution
//! - Calendar date → continuous day count since 2000 Jan 0.0 UT
//! - Greenwich sidereal time "at 0h UT" generalized to any instant
//! - The Sun's ecliptic and equatorial position from mean orbital elements
//!
//! Accuracy is about one arcminute, good enough for rise/set times to the
//! minute between 1801 and 2099. Everything here is a pure function of its
//! arguments.

pub mod angle;
pub mod epoch;
pub mod sidereal;
pub mod sun;

pub use angle::{reduce_to_revolution, reduce_to_signed_revolution};
pub use epoch::{CalendarDate, DayEpoch};
pub use sidereal::{local_sidereal_time_deg, sidereal_time_baseline};
pub use sun::{
    EclipticPosition, EquatorialPosition, apparent_radius_deg, equatorial_position,
    obliquity_of_ecliptic, solar_ecliptic_position,
};
