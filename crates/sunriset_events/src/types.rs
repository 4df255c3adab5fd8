//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides the observer location, the altitude threshold with its limb
//! convention, and the four standard horizon presets.

use sunriset_ephem::apparent_radius_deg;

/// Geographic position of the observer.
///
/// Not validated: |latitude| > 90° yields meaningless results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a coordinate from longitude then latitude, both in degrees.
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
        }
    }

    /// UT hours of 12h local mean solar time.
    pub fn local_noon_ut_hours(&self) -> f64 {
        12.0 - self.longitude_deg / 15.0
    }
}

/// Which point of the solar disk must reach the threshold altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimbMode {
    /// Top edge of the disk; the threshold is lowered by the apparent radius.
    UpperLimb,
    /// Geometric center of the disk.
    Center,
}

/// Altitude the Sun has to cross, and the limb it is measured on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSpec {
    /// Altitude in degrees, negative below the horizon.
    pub threshold_deg: f64,
    pub limb: LimbMode,
}

impl AltitudeSpec {
    /// Sunrise/sunset: upper limb 35′ below the horizon (refraction).
    pub const SUNRISE_SUNSET: Self = Self::new(-35.0 / 60.0, LimbMode::UpperLimb);
    /// Civil twilight: center 6° below the horizon.
    pub const CIVIL_TWILIGHT: Self = Self::new(-6.0, LimbMode::Center);
    /// Nautical twilight: center 12° below the horizon.
    pub const NAUTICAL_TWILIGHT: Self = Self::new(-12.0, LimbMode::Center);
    /// Astronomical twilight: center 18° below the horizon.
    pub const ASTRONOMICAL_TWILIGHT: Self = Self::new(-18.0, LimbMode::Center);

    pub const fn new(threshold_deg: f64, limb: LimbMode) -> Self {
        Self { threshold_deg, limb }
    }

    /// Threshold for the disk center, given the Sun's distance.
    ///
    /// For [`LimbMode::UpperLimb`] the center must sit one apparent radius
    /// (`0.2666° / r`) lower than the requested altitude.
    pub fn center_threshold_deg(&self, distance_au: f64) -> f64 {
        match self.limb {
            LimbMode::UpperLimb => self.threshold_deg - apparent_radius_deg(distance_au),
            LimbMode::Center => self.threshold_deg,
        }
    }
}

/// The four standard bands computed by [`crate::daily_almanac`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Sunrise and sunset.
    RiseSet,
    /// Start and end of civil twilight.
    Civil,
    /// Start and end of nautical twilight.
    Nautical,
    /// Start and end of astronomical twilight.
    Astronomical,
}

impl Horizon {
    /// All bands, brightest first.
    pub const ALL: [Horizon; 4] = [
        Horizon::RiseSet,
        Horizon::Civil,
        Horizon::Nautical,
        Horizon::Astronomical,
    ];

    /// Altitude preset for this band.
    pub fn altitude(self) -> AltitudeSpec {
        match self {
            Self::RiseSet => AltitudeSpec::SUNRISE_SUNSET,
            Self::Civil => AltitudeSpec::CIVIL_TWILIGHT,
            Self::Nautical => AltitudeSpec::NAUTICAL_TWILIGHT,
            Self::Astronomical => AltitudeSpec::ASTRONOMICAL_TWILIGHT,
        }
    }

    /// Position in [`Horizon::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::RiseSet => 0,
            Self::Civil => 1,
            Self::Nautical => 2,
            Self::Astronomical => 3,
        }
    }
}
