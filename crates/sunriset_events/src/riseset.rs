//! Rise/set and twilight instants by fixed-point iteration.
//!
//! For each branch (rise, set) the event time is guessed at local mean noon
//! and refined: the Sun's position is re-evaluated at the current estimate,
//! the meridian transit and diurnal half-arc are recomputed, and the next
//! estimate is `transit ∓ half_arc`. The Sun's declination moves slowly, so
//! three or four rounds reach the millisecond level except right at the
//! edge of polar day or night.
//!
//! Sources: standard spherical astronomy (altitude equation, hour angle from
//! local sidereal time). Solar position from [`sunriset_ephem`].

use std::fmt::{Display, Formatter};

use sunriset_ephem::{
    CalendarDate, DayEpoch, equatorial_position, local_sidereal_time_deg,
    reduce_to_signed_revolution,
};
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::diurnal::{HalfArc, half_arc};
use crate::error::SolverError;
use crate::status::{EventStatus, Regime};
use crate::types::{AltitudeSpec, GeoCoordinate};

/// Degrees of hour angle the Sun covers per solar hour, relative to the
/// stars (360° × 366.2422/365.2422 / 24).
const HOUR_ANGLE_DEG_PER_HOUR: f64 = 15.04107;

/// Half-arc when the Sun never drops to the threshold, hours.
const FULL_HALF_DAY_HOURS: f64 = 12.0;

/// Seed for the change between iterations; anything above the tolerance.
const INITIAL_DELTA_HOURS: f64 = 99.0;

/// Which crossing a solver branch looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Morning crossing, Sun ascending.
    Rise,
    /// Evening crossing, Sun descending.
    Set,
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rise => f.write_str("rise"),
            Self::Set => f.write_str("set"),
        }
    }
}

/// Convergence record of one solver branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchReport {
    /// Iterations performed.
    pub iterations: u32,
    /// Change in the estimate during the last iteration, hours.
    pub last_delta_hours: f64,
    /// Whether the last change was within tolerance.
    pub converged: bool,
    /// Meridian transit computed in the last iteration, hours UT.
    pub transit_hours: f64,
}

/// Outcome of [`event_times`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventResult {
    /// A branch keeps any non-crossing regime one of its iterations saw, so
    /// near the polar edge this can flag a branch whose time below is still
    /// the crossing a later iteration found.
    pub status: EventStatus,
    /// Morning crossing, decimal hours UT from 0h of the requested date.
    ///
    /// If the last iteration finds no crossing this is the transit time minus 12 h
    /// (always above) or the transit time itself (always below).
    pub rise_hours: f64,
    /// Evening crossing, decimal hours UT from 0h of the requested date.
    ///
    /// If the last iteration finds no crossing this is the transit time plus 12 h
    /// (always above) or the transit time itself (always below).
    pub set_hours: f64,
    pub rise: BranchReport,
    pub set: BranchReport,
}

impl EventResult {
    /// Both branches reached tolerance within the iteration cap.
    pub fn converged(&self) -> bool {
        self.rise.converged && self.set.converged
    }

    /// Time the Sun crosses the local meridian, hours UT.
    ///
    /// Averages the transit each branch settled on. This is not the
    /// midpoint of rise and set: with one branch crossing and the other
    /// not, the two times sit at different distances from the meridian.
    pub fn south_transit_hours(&self) -> f64 {
        (self.rise.transit_hours + self.set.transit_hours) / 2.0
    }

    /// Time between rise and set, hours.
    pub fn duration_hours(&self) -> f64 {
        self.set_hours - self.rise_hours
    }

    /// Turn a convergence failure into an error.
    pub fn ensure_converged(self) -> Result<Self, SolverError> {
        for (branch, report) in [(Branch::Rise, self.rise), (Branch::Set, self.set)] {
            if !report.converged {
                return Err(SolverError::NoConvergence {
                    branch,
                    iterations: report.iterations,
                    delta_hours: report.last_delta_hours,
                });
            }
        }
        Ok(self)
    }
}

/// Final state of one branch.
struct BranchSolution {
    hours: f64,
    regime: Regime,
    report: BranchReport,
}

/// Meridian transit of the Sun, hours UT, nearest local mean noon.
///
/// The hour angle at 12h UT is `lst − RA`; the transit is 12h UT minus that
/// angle in hours. The angle is taken modulo 360° around the observer's own
/// longitude so the transit stays continuous for observers near ±180°.
fn south_transit_hours(
    epoch: DayEpoch,
    coord: &GeoCoordinate,
    right_ascension_deg: f64,
) -> f64 {
    let lst = local_sidereal_time_deg(epoch, coord.longitude_deg);
    let hour_angle = lst - right_ascension_deg;
    coord.local_noon_ut_hours()
        + reduce_to_signed_revolution(coord.longitude_deg - hour_angle) / 15.0
}

fn solve_branch(
    date: CalendarDate,
    coord: &GeoCoordinate,
    altitude: &AltitudeSpec,
    branch: Branch,
    config: &SolverConfig,
) -> BranchSolution {
    let mut estimate = coord.local_noon_ut_hours();
    let mut transit = estimate;
    let mut delta = INITIAL_DELTA_HOURS;
    let mut regime = Regime::Crosses;
    let mut iterations = 0;

    while iterations < config.max_iterations() && delta > config.tolerance_hours() {
        let epoch = DayEpoch::from_date_and_ut_hours(date, estimate);
        let sun = equatorial_position(epoch);
        transit = south_transit_hours(epoch, coord, sun.right_ascension_deg);

        let threshold = altitude.center_threshold_deg(sun.distance_au);
        let dec = sun.declination_deg.to_radians();
        let arc = half_arc(threshold, coord.latitude_deg, dec.sin(), dec.cos());
        // A branch that ever missed the threshold keeps that regime
        if arc.regime() != Regime::Crosses {
            regime = arc.regime();
        }

        let arc_hours = match arc {
            HalfArc::AlwaysBelow => 0.0,
            HalfArc::AlwaysAbove => FULL_HALF_DAY_HOURS,
            HalfArc::Crosses(h) => h / HOUR_ANGLE_DEG_PER_HOUR,
        };
        let next = match branch {
            Branch::Rise => transit - arc_hours,
            Branch::Set => transit + arc_hours,
        };

        delta = (next - estimate).abs();
        estimate = next;
        iterations += 1;

        trace!(
            %branch,
            iterations,
            threshold,
            transit,
            arc_hours,
            estimate,
            delta,
            "refined event time"
        );
    }

    let converged = delta <= config.tolerance_hours();
    if !converged {
        debug!(%branch, iterations, delta, "event time did not converge");
    }

    BranchSolution {
        hours: estimate,
        regime,
        report: BranchReport {
            iterations,
            last_delta_hours: delta,
            converged,
            transit_hours: transit,
        },
    }
}

/// Rise and set instants for `altitude` with the default [`SolverConfig`].
///
/// # Arguments
/// * `date` - calendar date; meaningful for 1801-2099
/// * `coord` - observer longitude (east +) and latitude (north +)
/// * `altitude` - threshold and limb; see [`AltitudeSpec`] presets
///
/// Never fails: a branch that hits the iteration cap keeps its last
/// estimate and is flagged in [`EventResult::rise`]/[`EventResult::set`].
pub fn event_times(date: CalendarDate, coord: GeoCoordinate, altitude: AltitudeSpec) -> EventResult {
    event_times_with(date, coord, altitude, &SolverConfig::default())
}

/// Rise and set instants for `altitude` with explicit iteration limits.
pub fn event_times_with(
    date: CalendarDate,
    coord: GeoCoordinate,
    altitude: AltitudeSpec,
    config: &SolverConfig,
) -> EventResult {
    let rise = solve_branch(date, &coord, &altitude, Branch::Rise, config);
    let set = solve_branch(date, &coord, &altitude, Branch::Set, config);

    EventResult {
        status: EventStatus::from_regimes(rise.regime, set.regime),
        rise_hours: rise.hours,
        set_hours: set.hours,
        rise: rise.report,
        set: set.report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d)
    }

    #[test]
    fn transit_near_local_noon() {
        // Equation of time stays within ±17 minutes
        for lon in [-179.5, -120.0, 0.0, 18.0, 90.0, 179.5] {
            let coord = GeoCoordinate::new(lon, 45.0);
            for m in 1..=12 {
                let epoch = DayEpoch::from_date_and_ut_hours(date(2020, m, 10), 12.0);
                let sun = equatorial_position(epoch);
                let t = south_transit_hours(epoch, &coord, sun.right_ascension_deg);
                let offset = t - coord.local_noon_ut_hours();
                assert!(offset.abs() < 0.3, "lon {lon} month {m}: offset {offset}");
            }
        }
    }

    #[test]
    fn ordinary_day_converges() {
        let r = event_times(
            date(2020, 6, 21),
            GeoCoordinate::new(18.0, 59.0),
            AltitudeSpec::SUNRISE_SUNSET,
        );
        assert_eq!(r.status, EventStatus::RiseAndSet);
        assert!(r.converged());
        assert!(r.rise.iterations <= 5 && r.set.iterations <= 5, "{r:?}");
        assert!(r.rise_hours < r.set_hours);
    }

    #[test]
    fn polar_night_times_collapse_to_transit() {
        let r = event_times(
            date(2020, 12, 21),
            GeoCoordinate::new(18.0, 78.0),
            AltitudeSpec::SUNRISE_SUNSET,
        );
        assert_eq!(r.status, EventStatus::PolarNight);
        assert!((r.rise_hours - r.set_hours).abs() < 1e-5, "{r:?}");
        assert!((r.south_transit_hours() - 10.77).abs() < 0.05, "{r:?}");
    }

    #[test]
    fn polar_day_times_span_24h() {
        let r = event_times(
            date(2020, 6, 21),
            GeoCoordinate::new(18.0, 78.0),
            AltitudeSpec::SUNRISE_SUNSET,
        );
        assert_eq!(r.status, EventStatus::PolarDay);
        assert!((r.duration_hours() - 24.0).abs() < 0.01, "{r:?}");
    }

    #[test]
    fn single_iteration_cap_reports_failure() {
        let config = SolverConfig::new(1, 1.0e-6).unwrap();
        let r = event_times_with(
            date(2020, 6, 21),
            GeoCoordinate::new(18.0, 59.0),
            AltitudeSpec::SUNRISE_SUNSET,
            &config,
        );
        assert_eq!(r.rise.iterations, 1);
        assert!(!r.converged());
        let err = r.ensure_converged().unwrap_err();
        assert!(matches!(
            err,
            SolverError::NoConvergence { branch: Branch::Rise, iterations: 1, .. }
        ));
    }

    #[test]
    fn ensure_converged_passes_through() {
        let r = event_times(
            date(2021, 4, 1),
            GeoCoordinate::new(0.0, 51.5),
            AltitudeSpec::CIVIL_TWILIGHT,
        );
        assert_eq!(r.ensure_converged(), Ok(r));
    }

    #[test]
    fn regime_seen_early_is_kept() {
        // 74°N, 2019-11-09: the noon seed sees the Sun below the horizon and
        // later iterations find a brief crossing; day_length says 0 h.
        let d = date(2019, 11, 9);
        let coord = GeoCoordinate::new(0.0, 74.0);
        let r = event_times(d, coord, AltitudeSpec::SUNRISE_SUNSET);
        assert_eq!(r.status, EventStatus::PolarNight);
        assert!(r.converged(), "{r:?}");
        assert_eq!(crate::daylen::day_length(d, coord, AltitudeSpec::SUNRISE_SUNSET), 0.0);
    }

    #[test]
    fn transit_independent_of_mixed_regime_times() {
        // 85°N astronomical twilight in mid-February: the set branch
        // crosses, the rise branch reports transit − 12 h
        let r = event_times(
            date(2020, 2, 14),
            GeoCoordinate::new(0.0, 85.0),
            AltitudeSpec::ASTRONOMICAL_TWILIGHT,
        );
        assert_eq!(r.status, EventStatus::LeavesPolarDay);
        let transit = r.south_transit_hours();
        assert!((transit - 12.24).abs() < 0.05, "transit {transit}");
        let midpoint = (r.rise_hours + r.set_hours) / 2.0;
        assert!((midpoint - transit).abs() > 0.5, "midpoint {midpoint}");
        assert!((r.rise.transit_hours - r.set.transit_hours).abs() < 0.01);
    }

    #[test]
    fn every_config_runs_at_least_one_iteration() {
        let coord = GeoCoordinate::new(18.0, 59.0);
        for config in [SolverConfig::default(), SolverConfig::new(1, 1.0).unwrap()] {
            let r = event_times_with(
                date(2020, 6, 21),
                coord,
                AltitudeSpec::SUNRISE_SUNSET,
                &config,
            );
            assert!(r.rise.iterations >= 1 && r.set.iterations >= 1, "{r:?}");
            assert!(r.rise_hours < coord.local_noon_ut_hours(), "{r:?}");
        }
    }

    #[test]
    fn branch_display() {
        assert_eq!(Branch::Rise.to_string(), "rise");
        assert_eq!(Branch::Set.to_string(), "set");
    }
}
