use core::fmt;

use csillesz_core::angle::normalize_zero_bounded;
use csillesz_core::constants::{
    DEGREES_PER_HOUR, DEGREES_PER_TURN, HOURS_PER_DAY, MINUTES_PER_HOUR, SIDEREAL_PER_SOLAR,
};
use csillesz_core::errors::ensure_finite;
use csillesz_core::{AstroResult, GeoPoint, HmsBreakdown};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gmst::gmst_at_midnight;
use crate::calendar::{CivilDate, CivilDateTime, MonthLengths};
use crate::dst::DaylightSavingRule;

/// A universal date and the time of day on it in decimal hours, `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniversalTime {
    pub date: CivilDate,
    pub hours: f64,
}

impl UniversalTime {
    pub fn hms(&self) -> HmsBreakdown {
        HmsBreakdown::from_hours(self.hours)
    }
}

impl fmt::Display for UniversalTime {
    // Rounded, not truncated: 23:59 local minus an offset is a hair under x:59.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.hours * MINUTES_PER_HOUR).round() as i64;
        write!(f, "{} {:02}:{:02} UT", self.date, minutes / 60, minutes % 60)
    }
}

/// Everything computed on the way to a local sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealTime {
    /// Local sidereal time in decimal hours, `[0, 24)`.
    pub local_sidereal_time: f64,
    pub lst: HmsBreakdown,
    /// Hours subtracted from local time to reach UT, daylight saving included.
    pub zone_offset_hours: i32,
    pub universal_time: UniversalTime,
    /// Greenwich mean sidereal time at 0h UT on the universal date, in hours.
    pub gmst: f64,
    pub greenwich: HmsBreakdown,
}

/// Local sidereal time from a civil wall-clock time and a longitude.
///
/// The local time zone is derived from the longitude alone: `floor(λ/15)`
/// hours east of Greenwich for `λ` in `[-180, 180)`, plus the daylight-saving
/// hour when the rule is active on the civil date. Subtracting it may move
/// the universal date one day back or forward.
///
/// ```
/// use csillesz_time::{CivilDateTime, SiderealTimeCalculator};
///
/// let calc = SiderealTimeCalculator::default();
/// // Budapest in summer is UT+2, so 00:30 local is 22:30 UT the day before.
/// let at = CivilDateTime::new(2024, 7, 1, 0, 30).unwrap();
/// let st = calc.local_sidereal_time_at_longitude(19.0402, &at).unwrap();
/// assert_eq!(st.universal_time.date.day(), 30);
/// assert_eq!(st.universal_time.hours, 22.5);
/// assert!((0.0..24.0).contains(&st.local_sidereal_time));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiderealTimeCalculator {
    month_lengths: MonthLengths,
    daylight_saving: DaylightSavingRule,
}

impl SiderealTimeCalculator {
    pub fn new(month_lengths: MonthLengths, daylight_saving: DaylightSavingRule) -> Self {
        Self {
            month_lengths,
            daylight_saving,
        }
    }

    pub fn with_daylight_saving(mut self, rule: DaylightSavingRule) -> Self {
        self.daylight_saving = rule;
        self
    }

    pub fn daylight_saving(&self) -> DaylightSavingRule {
        self.daylight_saving
    }

    pub fn month_lengths(&self) -> &MonthLengths {
        &self.month_lengths
    }

    /// Standard zone offset from the signed longitude plus the daylight-saving hour.
    pub fn zone_offset_hours(&self, longitude: f64, date: &CivilDate) -> i32 {
        let east = normalize_zero_bounded(longitude, DEGREES_PER_TURN);
        let signed = if east >= 180.0 { east - DEGREES_PER_TURN } else { east };
        (signed / DEGREES_PER_HOUR).floor() as i32 + self.daylight_saving.extra_hours(date)
    }

    /// Converts local wall-clock time at `longitude` to universal time.
    pub fn to_universal(&self, longitude: f64, at: &CivilDateTime) -> AstroResult<UniversalTime> {
        self.resolve(longitude, at).map(|(ut, _)| ut)
    }

    /// Local sidereal time for an observer.
    ///
    /// Only the longitude enters the result; the latitude is checked to be finite.
    pub fn local_sidereal_time(
        &self,
        observer: GeoPoint,
        at: &CivilDateTime,
    ) -> AstroResult<SiderealTime> {
        ensure_finite("local_sidereal_time", "latitude", observer.latitude)?;
        self.local_sidereal_time_at_longitude(observer.longitude, at)
    }

    /// Local sidereal time for a bare longitude, east positive, in degrees.
    pub fn local_sidereal_time_at_longitude(
        &self,
        longitude: f64,
        at: &CivilDateTime,
    ) -> AstroResult<SiderealTime> {
        let (universal_time, zone_offset_hours) = self.resolve(longitude, at)?;

        let gmst = gmst_at_midnight(&universal_time.date);
        let east = normalize_zero_bounded(longitude, DEGREES_PER_TURN);
        let lst = normalize_zero_bounded(
            gmst + east / DEGREES_PER_HOUR + SIDEREAL_PER_SOLAR * universal_time.hours,
            HOURS_PER_DAY,
        );

        tracing::debug!(%universal_time, gmst, lst, "local sidereal time");

        Ok(SiderealTime {
            local_sidereal_time: lst,
            lst: HmsBreakdown::from_hours(lst),
            zone_offset_hours,
            universal_time,
            gmst,
            greenwich: HmsBreakdown::from_hours(gmst),
        })
    }

    fn resolve(&self, longitude: f64, at: &CivilDateTime) -> AstroResult<(UniversalTime, i32)> {
        ensure_finite("to_universal", "longitude", longitude)?;
        let local = at.date();
        let date = CivilDate::with_month_lengths(
            local.year(),
            local.month(),
            local.day(),
            &self.month_lengths,
        )?;
        // Deserialized values skip the constructor.
        CivilDateTime::from_date(date, at.hour(), at.minute())?;

        let offset = self.zone_offset_hours(longitude, &date);
        let hours = at.decimal_hours() - f64::from(offset);

        let ut = if hours < 0.0 {
            let date = date.previous_day(&self.month_lengths);
            tracing::debug!(local = %at, offset, ut_date = %date, "universal date rolled back");
            UniversalTime {
                date,
                hours: hours + HOURS_PER_DAY,
            }
        } else if hours >= HOURS_PER_DAY {
            let date = date.next_day(&self.month_lengths);
            tracing::debug!(local = %at, offset, ut_date = %date, "universal date rolled forward");
            UniversalTime {
                date,
                hours: hours - HOURS_PER_DAY,
            }
        } else {
            UniversalTime { date, hours }
        };

        Ok((ut, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csillesz_core::test_helpers::{assert_close, assert_close_cyclic};
    use csillesz_core::AstroError;

    fn at(y: i32, mo: u8, d: u8, h: u8, mi: u8) -> CivilDateTime {
        CivilDateTime::new(y, mo, d, h, mi).unwrap()
    }

    fn date(y: i32, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn zone_offsets() {
        let calc = SiderealTimeCalculator::default();
        let winter = date(2024, 1, 15);
        let summer = date(2024, 7, 15);
        assert_eq!(calc.zone_offset_hours(19.0402, &winter), 1);
        assert_eq!(calc.zone_offset_hours(19.0402, &summer), 2);
        assert_eq!(calc.zone_offset_hours(-74.0060, &winter), -5);
        assert_eq!(calc.zone_offset_hours(-74.0060, &summer), -4);
        assert_eq!(calc.zone_offset_hours(139.6917, &winter), 9);
        // 285.994 east is the same place as 74.006 west.
        assert_eq!(calc.zone_offset_hours(285.994, &winter), -5);
    }

    #[test]
    fn rollover_back_with_offset_two() {
        let calc = SiderealTimeCalculator::default();
        let ut = calc.to_universal(19.0402, &at(2024, 7, 1, 0, 30)).unwrap();
        assert_eq!(ut.date, date(2024, 6, 30));
        assert_eq!(ut.hours, 22.5);
    }

    #[test]
    fn rollover_back_across_year() {
        let calc = SiderealTimeCalculator::default();
        let ut = calc.to_universal(19.0402, &at(2024, 1, 1, 0, 30)).unwrap();
        assert_eq!(ut.date, date(2023, 12, 31));
        assert_eq!(ut.hours, 23.5);
    }

    #[test]
    fn rollover_forward_across_year() {
        let calc = SiderealTimeCalculator::default();
        let ut = calc.to_universal(-74.0060, &at(2023, 12, 31, 21, 0)).unwrap();
        assert_eq!(ut.date, date(2024, 1, 1));
        assert_eq!(ut.hours, 2.0);
    }

    #[test]
    fn rollover_uses_preserved_leap_rule() {
        let calc = SiderealTimeCalculator::default();
        let ut = calc.to_universal(19.0402, &at(2000, 3, 1, 0, 30)).unwrap();
        assert_eq!(ut.date, date(2000, 2, 28));
        let ut = calc.to_universal(19.0402, &at(1900, 3, 1, 0, 30)).unwrap();
        assert_eq!(ut.date, date(1900, 2, 29));
    }

    #[test]
    fn greenwich_midnight_is_gmst() {
        let calc = SiderealTimeCalculator::default().with_daylight_saving(DaylightSavingRule::None);
        let st = calc
            .local_sidereal_time(GeoPoint::new(51.4779, 0.0), &at(2000, 1, 1, 0, 0))
            .unwrap();
        assert_eq!(st.zone_offset_hours, 0);
        assert_close(st.local_sidereal_time, st.gmst, 1e-12, "LST = GMST");
        assert_close(st.gmst, 6.664_519_645_8, 1e-9, "GMST");
        assert_eq!(st.greenwich, HmsBreakdown { hours: 6, minutes: 39, seconds: 52 });
    }

    #[test]
    fn variants_agree() {
        let calc = SiderealTimeCalculator::default();
        let when = at(2023, 10, 10, 21, 45);
        let a = calc
            .local_sidereal_time(GeoPoint::new(47.4979, 19.0402), &when)
            .unwrap();
        let b = calc.local_sidereal_time_at_longitude(19.0402, &when).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn longitude_term_is_one_hour_per_fifteen_degrees() {
        let calc = SiderealTimeCalculator::default().with_daylight_saving(DaylightSavingRule::None);
        // Same UT on both sides: 12:00 at 0°, 13:00 at 15°E.
        let g = calc.local_sidereal_time_at_longitude(0.0, &at(2024, 5, 5, 12, 0)).unwrap();
        let e = calc.local_sidereal_time_at_longitude(15.0, &at(2024, 5, 5, 13, 0)).unwrap();
        assert_eq!(g.universal_time, e.universal_time);
        assert_close_cyclic(e.local_sidereal_time - g.local_sidereal_time, 1.0, 24.0, 1e-12, "1h");
    }

    #[test]
    fn custom_month_lengths_are_enforced() {
        let short_december = MonthLengths::new(
            [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 30],
            [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 30],
        );
        let calc = SiderealTimeCalculator::new(short_december, DaylightSavingRule::None);
        let err = calc.to_universal(0.0, &at(2023, 12, 31, 12, 0)).unwrap_err();
        assert!(matches!(err, AstroError::InvalidDate { day: 31, .. }));

        // Rolling forward from the 30th now lands on New Year's Day.
        let ut = calc.to_universal(-30.0, &at(2023, 12, 30, 23, 0)).unwrap();
        assert_eq!(ut.date, date(2024, 1, 1));
    }

    #[test]
    fn universal_time_display_keeps_last_minute() {
        let calc = SiderealTimeCalculator::default();
        let ut = calc.to_universal(139.6917, &at(2023, 12, 31, 23, 59)).unwrap();
        assert_eq!(ut.to_string(), "2023-12-31 14:59 UT");
    }

    #[test]
    fn huge_longitude_keeps_universal_time_in_range() {
        let calc = SiderealTimeCalculator::default();
        let when = at(2024, 1, 15, 12, 0);
        let ut = calc.to_universal(2.63e19, &when).unwrap();
        assert!((0.0..24.0).contains(&ut.hours), "{:?}", ut);
        let offset = calc.zone_offset_hours(2.63e19, &when.date());
        assert!((-12..=13).contains(&offset), "{}", offset);
    }

    #[test]
    fn accessors_expose_validated_fields() {
        let when = at(2024, 1, 15, 23, 59);
        assert_eq!(when.date(), date(2024, 1, 15));
        assert_eq!((when.hour(), when.minute()), (23, 59));
        assert_eq!(when.decimal_hours(), 23.0 + 59.0 / 60.0);
    }

    #[test]
    fn non_finite_longitude() {
        let calc = SiderealTimeCalculator::default();
        assert!(calc
            .local_sidereal_time_at_longitude(f64::NAN, &at(2024, 1, 1, 0, 0))
            .is_err());
    }
}
