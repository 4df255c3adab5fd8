//! Sunrise/sunset, twilight and day-length computations.
//!
//! This crate provides:
//! - [`event_times`]: iterative rise/set instants for any altitude threshold,
//!   classified into one of nine [`EventStatus`] regimes
//! - [`day_length`]: closed-form time spent above a threshold
//! - [`daily_almanac`]: all four standard bands (rise/set, civil, nautical,
//!   astronomical) for one date and place
//!
//! All times are decimal hours UT on the requested date. Nothing here keeps
//! state; every function may be called from any thread.

pub mod almanac;
pub mod config;
pub mod daylen;
pub mod diurnal;
pub mod error;
pub mod riseset;
pub mod status;
pub mod types;

pub use almanac::{DailyAlmanac, daily_almanac, daily_almanac_with};
pub use config::SolverConfig;
pub use daylen::day_length;
pub use error::SolverError;
pub use riseset::{Branch, BranchReport, EventResult, event_times, event_times_with};
pub use status::{EventStatus, Regime};
pub use types::{AltitudeSpec, GeoCoordinate, Horizon, LimbMode};

// Re-export the date type so callers don't need to depend on sunriset_ephem.
pub use sunriset_ephem::CalendarDate;
