//! Day classification: does the Sun cross the threshold in the morning,
//! in the evening, both, or neither.
//!
//! Each branch of the solver ends in one of three [`Regime`]s. The pair
//! combines into an [`EventStatus`], whose signed code is
//! `3·morning + evening` with the sign convention below = −1, crosses = 0,
//! above = +1:
//!
//! | code | status              | meaning                                       |
//! |------|---------------------|-----------------------------------------------|
//! |  0   | `RiseAndSet`        | ordinary day: the Sun rises and sets          |
//! | +4   | `PolarDay`          | above the threshold all 24 hours              |
//! | −4   | `PolarNight`        | below the threshold all 24 hours              |
//! | +3   | `EntersPolarDay`    | rises but does not set                        |
//! | +1   | `LeavesPolarDay`    | does not rise but sets                        |
//! | +2   | `PolarDayToNight`   | polar day → polar night, short day+night      |
//! | −2   | `PolarNightToDay`   | polar night → polar day, short day+night      |
//! | −3   | `LeavesPolarNight`  | stays below in the morning, sets in the evening |
//! | −1   | `EntersPolarNight`  | rises, stays below in the evening             |
//!
//! The mixed codes show up only at extreme latitudes near the polar-day and
//! polar-night boundaries.

use std::fmt::{Display, Formatter};

/// Outcome of one solver branch against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Sun stays below the threshold; no crossing.
    AlwaysBelow,
    /// Sun crosses the threshold.
    Crosses,
    /// Sun stays above the threshold; no crossing.
    AlwaysAbove,
}

impl Regime {
    /// −1, 0 or +1.
    pub fn sign(self) -> i8 {
        match self {
            Self::AlwaysBelow => -1,
            Self::Crosses => 0,
            Self::AlwaysAbove => 1,
        }
    }

    fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            -1 => Some(Self::AlwaysBelow),
            0 => Some(Self::Crosses),
            1 => Some(Self::AlwaysAbove),
            _ => None,
        }
    }
}

/// Classification of a day for one altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    /// Code 0.
    RiseAndSet,
    /// Code +4.
    PolarDay,
    /// Code −4.
    PolarNight,
    /// Code +3.
    EntersPolarDay,
    /// Code +1.
    LeavesPolarDay,
    /// Code +2.
    PolarDayToNight,
    /// Code −2.
    PolarNightToDay,
    /// Code −3.
    LeavesPolarNight,
    /// Code −1.
    EntersPolarNight,
}

impl EventStatus {
    /// Every status, in code order from −4 to +4.
    pub const ALL: [EventStatus; 9] = [
        EventStatus::PolarNight,
        EventStatus::LeavesPolarNight,
        EventStatus::PolarNightToDay,
        EventStatus::EntersPolarNight,
        EventStatus::RiseAndSet,
        EventStatus::LeavesPolarDay,
        EventStatus::PolarDayToNight,
        EventStatus::EntersPolarDay,
        EventStatus::PolarDay,
    ];

    /// Combine the morning (rise) and evening (set) branch outcomes.
    pub fn from_regimes(morning: Regime, evening: Regime) -> Self {
        use Regime::{AlwaysAbove, AlwaysBelow, Crosses};
        match (morning, evening) {
            (Crosses, Crosses) => Self::RiseAndSet,
            (AlwaysAbove, AlwaysAbove) => Self::PolarDay,
            (AlwaysBelow, AlwaysBelow) => Self::PolarNight,
            (AlwaysAbove, Crosses) => Self::EntersPolarDay,
            (Crosses, AlwaysAbove) => Self::LeavesPolarDay,
            (AlwaysAbove, AlwaysBelow) => Self::PolarDayToNight,
            (AlwaysBelow, AlwaysAbove) => Self::PolarNightToDay,
            (AlwaysBelow, Crosses) => Self::LeavesPolarNight,
            (Crosses, AlwaysBelow) => Self::EntersPolarNight,
        }
    }

    /// Outcome of the rise branch.
    pub fn morning(self) -> Regime {
        match self {
            Self::RiseAndSet | Self::LeavesPolarDay | Self::EntersPolarNight => Regime::Crosses,
            Self::PolarDay | Self::EntersPolarDay | Self::PolarDayToNight => Regime::AlwaysAbove,
            Self::PolarNight | Self::PolarNightToDay | Self::LeavesPolarNight => {
                Regime::AlwaysBelow
            }
        }
    }

    /// Outcome of the set branch.
    pub fn evening(self) -> Regime {
        match self {
            Self::RiseAndSet | Self::EntersPolarDay | Self::LeavesPolarNight => Regime::Crosses,
            Self::PolarDay | Self::LeavesPolarDay | Self::PolarNightToDay => Regime::AlwaysAbove,
            Self::PolarNight | Self::PolarDayToNight | Self::EntersPolarNight => {
                Regime::AlwaysBelow
            }
        }
    }

    /// Signed composite code, `3·morning + evening`, in −4..=4.
    pub fn code(self) -> i8 {
        3 * self.morning().sign() + self.evening().sign()
    }

    /// Inverse of [`EventStatus::code`].
    pub fn from_code(code: i8) -> Option<Self> {
        if !(-4..=4).contains(&code) {
            return None;
        }
        // Balanced ternary: evening is the low trit.
        let evening = (code + 4).rem_euclid(3) - 1;
        let morning = (code - evening) / 3;
        Some(Self::from_regimes(
            Regime::from_sign(morning)?,
            Regime::from_sign(evening)?,
        ))
    }

    /// Both a rise and a set happen at the threshold.
    pub fn is_ordinary(self) -> bool {
        self == Self::RiseAndSet
    }

    /// Either branch found the Sun above the threshold all day.
    pub fn has_always_above(self) -> bool {
        self.morning() == Regime::AlwaysAbove || self.evening() == Regime::AlwaysAbove
    }

    /// Either branch found the Sun below the threshold all day.
    pub fn has_always_below(self) -> bool {
        self.morning() == Regime::AlwaysBelow || self.evening() == Regime::AlwaysBelow
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::RiseAndSet => "rises and sets",
            Self::PolarDay => "above the threshold all day",
            Self::PolarNight => "below the threshold all day",
            Self::EntersPolarDay => "rises but does not set",
            Self::LeavesPolarDay => "does not rise but sets",
            Self::PolarDayToNight => "polar day turning into polar night",
            Self::PolarNightToDay => "polar night turning into polar day",
            Self::LeavesPolarNight => "stays below in the morning, sets in the evening",
            Self::EntersPolarNight => "rises, stays below in the evening",
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:+})", self.description(), self.code())
    }
}
