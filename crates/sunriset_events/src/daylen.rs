//! Closed-form length of the period the Sun spends above a threshold.
//!
//! The Sun is evaluated once, at local mean noon; its declination moves by
//! at most ~0.4° a day, so no refinement is attempted. The result agrees
//! with [`crate::event_times`] in classification but is not bit-identical.

use sunriset_ephem::{CalendarDate, DayEpoch, obliquity_of_ecliptic, solar_ecliptic_position};

use crate::diurnal::{HalfArc, half_arc};
use crate::types::{AltitudeSpec, GeoCoordinate};

/// Hours the Sun spends above `altitude` on `date`, in [0, 24].
///
/// Returns 0.0 when it never gets up to the threshold and 24.0 when it
/// never drops to it. Longitude only shifts the evaluation instant.
pub fn day_length(date: CalendarDate, coord: GeoCoordinate, altitude: AltitudeSpec) -> f64 {
    let epoch = DayEpoch::local_noon(date, coord.longitude_deg);
    let obliquity = obliquity_of_ecliptic(epoch).to_radians();
    let sun = solar_ecliptic_position(epoch);

    // Ecliptic latitude is zero, so sin δ = sin ε · sin λ
    let sin_dec = obliquity.sin() * sun.longitude_deg.to_radians().sin();
    let cos_dec = (1.0 - sin_dec * sin_dec).sqrt();

    let threshold = altitude.center_threshold_deg(sun.distance_au);
    match half_arc(threshold, coord.latitude_deg, sin_dec, cos_dec) {
        HalfArc::AlwaysBelow => 0.0,
        HalfArc::AlwaysAbove => 24.0,
        HalfArc::Crosses(h) => 2.0 * h / 15.0,
    }
}
