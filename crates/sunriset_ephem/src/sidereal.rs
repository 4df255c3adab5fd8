//! Greenwich sidereal time from the Sun's mean longitude.
//!
//! GMST0 is the sidereal time at Greenwich at 0h UT. Here it is generalized
//! to any instant as `GMST0 = GMST - UT`, which makes it grow by about four
//! minutes a day and equal the Sun's mean longitude plus 180° (ignoring
//! aberration, about 20″). Sidereal time at Greenwich is then simply
//! `GMST0 + 15·UT`.

use crate::angle::reduce_to_revolution;
use crate::epoch::DayEpoch;
use crate::sun::{MEAN_ANOMALY_AT_EPOCH, MEAN_ANOMALY_RATE, PERIHELION_AT_EPOCH, PERIHELION_RATE};

/// Greenwich mean sidereal time "at 0h UT" for an arbitrary instant, degrees.
///
/// Returns degrees in [0, 360).
pub fn sidereal_time_baseline(epoch: DayEpoch) -> f64 {
    let d = epoch.as_days();
    reduce_to_revolution(
        (180.0 + MEAN_ANOMALY_AT_EPOCH + PERIHELION_AT_EPOCH)
            + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d,
    )
}

/// Local sidereal time at 12h UT for an observer, degrees in [0, 360).
///
/// `LST = GMST0 + 180° + longitude_east`. The 180° is 12 hours of UT.
pub fn local_sidereal_time_deg(epoch: DayEpoch, longitude_east_deg: f64) -> f64 {
    reduce_to_revolution(sidereal_time_baseline(epoch) + 180.0 + longitude_east_deg)
}
