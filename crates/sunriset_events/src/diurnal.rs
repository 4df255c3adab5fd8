//! Diurnal arc: how far from the meridian the Sun sits when it reaches a
//! given altitude.
//!
//! From the altitude equation of spherical astronomy,
//!
//! `cos H = (sin h − sin φ · sin δ) / (cos φ · cos δ)`
//!
//! where `h` is the altitude, `φ` the latitude and `δ` the declination.
//! `cos H ≥ 1` means the Sun never gets up to `h`; `cos H ≤ −1` means it
//! never gets down to it.

use crate::status::Regime;

/// Below this the denominator is treated as zero (observer at a pole).
const POLE_EPSILON: f64 = 1.0e-12;

/// Half of the diurnal arc above the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HalfArc {
    /// Sun below the threshold all day.
    AlwaysBelow,
    /// Sun above the threshold all day.
    AlwaysAbove,
    /// Sun crosses; hour angle of the crossing in degrees, in (0, 180).
    Crosses(f64),
}

impl HalfArc {
    pub fn regime(self) -> Regime {
        match self {
            Self::AlwaysBelow => Regime::AlwaysBelow,
            Self::AlwaysAbove => Regime::AlwaysAbove,
            Self::Crosses(_) => Regime::Crosses,
        }
    }
}

/// Solve the altitude equation for the crossing hour angle.
///
/// At a pole `cos φ · cos δ` vanishes; the Sun's altitude there equals its
/// declination, so the sign of the numerator alone decides the regime.
pub fn half_arc(
    threshold_deg: f64,
    latitude_deg: f64,
    sin_declination: f64,
    cos_declination: f64,
) -> HalfArc {
    let lat = latitude_deg.to_radians();
    let numerator = threshold_deg.to_radians().sin() - lat.sin() * sin_declination;
    let denominator = lat.cos() * cos_declination;

    if denominator.abs() < POLE_EPSILON {
        return if numerator > 0.0 {
            HalfArc::AlwaysBelow
        } else {
            HalfArc::AlwaysAbove
        };
    }

    let cos_h = numerator / denominator;
    if cos_h >= 1.0 {
        HalfArc::AlwaysBelow
    } else if cos_h <= -1.0 {
        HalfArc::AlwaysAbove
    } else {
        HalfArc::Crosses(cos_h.acos().to_degrees())
    }
}
