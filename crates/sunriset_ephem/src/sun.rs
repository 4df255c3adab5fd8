//! Geocentric position of the Sun from mean orbital elements.
//!
//! Earth's orbit is treated as a fixed Kepler ellipse with slowly drifting
//! perihelion and eccentricity. Kepler's equation gets a single first-order
//! correction instead of being iterated; for e ≈ 0.0167 the residual is
//! well under the arcminute budget of the rise/set solver. The Sun's
//! ecliptic latitude is taken as zero.

use crate::angle::{atan2d, cosd, reduce_to_revolution, sind};
use crate::epoch::DayEpoch;

/// Mean anomaly at d = 0, degrees.
pub(crate) const MEAN_ANOMALY_AT_EPOCH: f64 = 356.0470;
/// Mean anomaly rate, degrees/day.
pub(crate) const MEAN_ANOMALY_RATE: f64 = 0.985_600_258_5;
/// Longitude of perihelion at d = 0, degrees.
pub(crate) const PERIHELION_AT_EPOCH: f64 = 282.9404;
/// Drift of the longitude of perihelion, degrees/day.
pub(crate) const PERIHELION_RATE: f64 = 4.709_35e-5;

const ECCENTRICITY_AT_EPOCH: f64 = 0.016_709;
const ECCENTRICITY_RATE: f64 = -1.151e-9;

const OBLIQUITY_AT_EPOCH_DEG: f64 = 23.4393;
const OBLIQUITY_RATE_DEG: f64 = -3.563e-7;

/// Apparent angular radius of the Sun at 1 AU, degrees.
const SOLAR_RADIUS_AT_1AU_DEG: f64 = 0.2666;

/// Sun's ecliptic longitude and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// True ecliptic longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
}

/// Sun's equatorial coordinates and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, range [0, 360).
    pub right_ascension_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
}

/// Obliquity of the ecliptic in degrees, linear in time.
pub fn obliquity_of_ecliptic(epoch: DayEpoch) -> f64 {
    OBLIQUITY_AT_EPOCH_DEG + OBLIQUITY_RATE_DEG * epoch.as_days()
}

/// Sun's ecliptic longitude and distance at `epoch`.
pub fn solar_ecliptic_position(epoch: DayEpoch) -> EclipticPosition {
    let d = epoch.as_days();

    let mean_anomaly = reduce_to_revolution(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * d);
    let perihelion = PERIHELION_AT_EPOCH + PERIHELION_RATE * d;
    let e = ECCENTRICITY_AT_EPOCH + ECCENTRICITY_RATE * d;

    // E = M + e·sin M·(1 + e·cos M), with e scaled to degrees
    let eccentric_anomaly = mean_anomaly
        + e * 1.0_f64.to_degrees() * sind(mean_anomaly) * (1.0 + e * cosd(mean_anomaly));

    let x = cosd(eccentric_anomaly) - e;
    let y = (1.0 - e * e).sqrt() * sind(eccentric_anomaly);
    let true_anomaly = atan2d(y, x);

    EclipticPosition {
        longitude_deg: reduce_to_revolution(true_anomaly + perihelion),
        distance_au: (x * x + y * y).sqrt(),
    }
}

/// Sun's right ascension, declination and distance at `epoch`.
pub fn equatorial_position(epoch: DayEpoch) -> EquatorialPosition {
    let ecl = solar_ecliptic_position(epoch);
    let obliquity = obliquity_of_ecliptic(epoch);

    let x = ecl.distance_au * cosd(ecl.longitude_deg);
    let y_ecl = ecl.distance_au * sind(ecl.longitude_deg);

    // Rotate about the x axis by the obliquity
    let y = y_ecl * cosd(obliquity);
    let z = y_ecl * sind(obliquity);

    EquatorialPosition {
        right_ascension_deg: reduce_to_revolution(atan2d(y, x)),
        declination_deg: atan2d(z, (x * x + y * y).sqrt()),
        distance_au: ecl.distance_au,
    }
}

/// Apparent angular radius of the solar disk, degrees.
pub fn apparent_radius_deg(distance_au: f64) -> f64 {
    SOLAR_RADIUS_AT_1AU_DEG / distance_au
}
