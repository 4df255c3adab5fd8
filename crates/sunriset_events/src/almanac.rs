//! All four standard bands for one date and place.

use sunriset_ephem::CalendarDate;

use crate::config::SolverConfig;
use crate::daylen::day_length;
use crate::riseset::{EventResult, event_times_with};
use crate::types::{GeoCoordinate, Horizon};

/// Rise/set and twilight events plus day lengths for a single date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAlmanac {
    pub date: CalendarDate,
    pub coordinate: GeoCoordinate,
    /// One result per band, indexed by [`Horizon::index`].
    pub events: [EventResult; 4],
    /// Closed-form hours above each band's threshold, same indexing.
    pub day_lengths: [f64; 4],
}

impl DailyAlmanac {
    /// Event result for one band.
    pub fn event(&self, horizon: Horizon) -> &EventResult {
        &self.events[horizon.index()]
    }

    /// Hours above the band's threshold.
    pub fn day_length(&self, horizon: Horizon) -> f64 {
        self.day_lengths[horizon.index()]
    }

    /// Length of one (morning or evening) twilight band, hours.
    ///
    /// Half the extra time the band's threshold adds over sunrise-to-sunset.
    /// Zero for [`Horizon::RiseSet`].
    pub fn twilight_duration_hours(&self, horizon: Horizon) -> f64 {
        (self.day_length(horizon) - self.day_length(Horizon::RiseSet)) / 2.0
    }

    /// Time the Sun crosses the meridian, hours UT.
    pub fn south_transit_hours(&self) -> f64 {
        self.event(Horizon::RiseSet).south_transit_hours()
    }

    /// Every band converged.
    pub fn converged(&self) -> bool {
        self.events.iter().all(EventResult::converged)
    }
}

/// Compute every band with the default [`SolverConfig`].
pub fn daily_almanac(date: CalendarDate, coord: GeoCoordinate) -> DailyAlmanac {
    daily_almanac_with(date, coord, &SolverConfig::default())
}

/// Compute every band with explicit iteration limits.
///
/// Each band is solved independently; a polar regime in one band does not
/// affect the others.
pub fn daily_almanac_with(
    date: CalendarDate,
    coord: GeoCoordinate,
    config: &SolverConfig,
) -> DailyAlmanac {
    let events = Horizon::ALL.map(|h| event_times_with(date, coord, h.altitude(), config));
    let day_lengths = Horizon::ALL.map(|h| day_length(date, coord, h.altitude()));
    DailyAlmanac {
        date,
        coordinate: coord,
        events,
        day_lengths,
    }
}
