//! Angle reduction helpers.

const INV_360: f64 = 1.0 / 360.0;

/// Reduce an angle to [0, 360) degrees.
pub fn reduce_to_revolution(deg: f64) -> f64 {
    deg - 360.0 * (deg * INV_360).floor()
}

/// Reduce an angle to [-180, 180) degrees.
pub fn reduce_to_signed_revolution(deg: f64) -> f64 {
    deg - 360.0 * (deg * INV_360 + 0.5).floor()
}

/// Sine of an angle in degrees.
pub(crate) fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub(crate) fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Two-argument arctangent, in degrees.
pub(crate) fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}
