//! Calendar dates and the continuous day count used by the ephemeris.
//!
//! The day count `d` is the number of days elapsed since 2000 Jan 0.0 UT
//! (= 1999 Dec 31, 0h UT). It is negative before that instant and carries
//! the time of day in its fractional part.

/// Proleptic Gregorian calendar date.
///
/// The fields are not validated: day 31 of February is accepted and simply
/// rolls into March through the day-count formula. The formula is meaningful
/// for years 1801-2099.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl CalendarDate {
    /// Create a new calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whole days from 2000 Jan 0.0 UT to 0h UT of this date.
    ///
    /// `367y - 7(y + (m+9)/12)/4 + 275m/9 + d - 730530` with truncating
    /// integer division.
    pub fn days_since_2000_jan_0(&self) -> i64 {
        let y = i64::from(self.year);
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - 730_530
    }
}

/// An instant expressed as days since 2000 Jan 0.0 UT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayEpoch {
    days: f64,
}

impl DayEpoch {
    /// Wrap a raw day count.
    pub fn from_days(days: f64) -> Self {
        Self { days }
    }

    /// 0h UT of `date`.
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            days: date.days_since_2000_jan_0() as f64,
        }
    }

    /// `ut_hours` after 0h UT of `date`. Hours outside [0, 24) are allowed.
    pub fn from_date_and_ut_hours(date: CalendarDate, ut_hours: f64) -> Self {
        Self {
            days: date.days_since_2000_jan_0() as f64 + ut_hours / 24.0,
        }
    }

    /// 12h local mean solar time on `date` at `longitude_deg` (east positive).
    pub fn local_noon(date: CalendarDate, longitude_deg: f64) -> Self {
        Self {
            days: date.days_since_2000_jan_0() as f64 + 0.5 - longitude_deg / 360.0,
        }
    }

    /// Days since 2000 Jan 0.0 UT.
    pub fn as_days(self) -> f64 {
        self.days
    }
}

impl From<CalendarDate> for DayEpoch {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_is_zero() {
        assert_eq!(CalendarDate::new(1999, 12, 31).days_since_2000_jan_0(), 0);
        assert_eq!(CalendarDate::new(2000, 1, 1).days_since_2000_jan_0(), 1);
    }

    #[test]
    fn leap_day_2000_counted() {
        // Jan (31) + Feb (29) = 60 days, so Mar 1 is day 61.
        assert_eq!(CalendarDate::new(2000, 3, 1).days_since_2000_jan_0(), 61);
    }

    #[test]
    fn range_endpoints() {
        assert_eq!(CalendarDate::new(1801, 1, 1).days_since_2000_jan_0(), -72_683);
        assert_eq!(CalendarDate::new(2099, 12, 31).days_since_2000_jan_0(), 36_525);
    }

    #[test]
    fn solstice_2020() {
        assert_eq!(CalendarDate::new(2020, 6, 21).days_since_2000_jan_0(), 7_478);
    }

    #[test]
    fn invalid_day_rolls_over() {
        let feb31 = CalendarDate::new(2021, 2, 31).days_since_2000_jan_0();
        let mar3 = CalendarDate::new(2021, 3, 3).days_since_2000_jan_0();
        assert_eq!(feb31, mar3);
    }

    #[test]
    fn ut_hours_fraction() {
        let date = CalendarDate::new(2000, 1, 1);
        let e = DayEpoch::from_date_and_ut_hours(date, 6.0);
        assert!((e.as_days() - 1.25).abs() < 1e-15);
    }

    #[test]
    fn local_noon_shifts_with_longitude() {
        let date = CalendarDate::new(2000, 1, 1);
        let greenwich = DayEpoch::local_noon(date, 0.0);
        let east = DayEpoch::local_noon(date, 90.0);
        let west = DayEpoch::local_noon(date, -90.0);
        assert!((greenwich.as_days() - 1.5).abs() < 1e-15);
        // 90° east: noon is 6 hours earlier in UT
        assert!((east.as_days() - 1.25).abs() < 1e-15);
        assert!((west.as_days() - 1.75).abs() < 1e-15);
    }

    #[test]
    fn from_date_matches_conversion() {
        let date = CalendarDate::new(2024, 3, 20);
        assert_eq!(DayEpoch::from(date), DayEpoch::from_date(date));
    }
}
