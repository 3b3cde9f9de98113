//! This module implements `JalaaliDateTime` and any directly related algorithms.

use crate::{
    civil::{CivilDate, CivilDateTime, CivilTime},
    time::EpochNanoseconds,
    utils::{self, CalendarKind},
    JalaaliResult, NS_PER_SECOND,
};

use super::{AmPm, DayTime, Month, TimeDuration, TimeZone, Weekday};


/// A Jalaali (Solar Hijri) calendar date and wall clock time in a fixed
/// offset zone.
///
/// Every `JalaaliDateTime` holds valid fields: construction carries
/// overflowing fields into the next larger unit and setters clamp to the
/// nearest legal value, so no operation on the value itself can fail.
///
/// The [`Default`] value is the zero value, reported by
/// [`JalaaliDateTime::is_zero`]. Changing any of its fields, the zone
/// included, makes it an ordinary value.
///
/// ```rust
/// use jalaali_rs::{JalaaliDateTime, Month, TimeZone, Weekday};
///
/// // Esfand 30 does not exist in 1402, so the day carries into 1403.
/// let dt = JalaaliDateTime::new(1402, Month::Esfand, 30, 10, 0, 0, 0, Some(TimeZone::tehran()));
/// assert_eq!(dt.date(), (1403, Month::Farvardin, 1));
/// assert_eq!(dt.weekday(), Weekday::Charshanbeh);
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct JalaaliDateTime {
    year: i32,
    month: Month,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    zone: TimeZone,
    weekday: Weekday,
}

// ==== Private API ====

/// Moves whole multiples of `base` from `low` into `high`, leaving `low` in `0..base`.
#[inline]
fn carry(high: i64, low: i64, base: i64) -> (i64, i64) {
    (high.saturating_add(low.div_euclid(base)), low.rem_euclid(base))
}

impl JalaaliDateTime {
    /// Balances possibly overflowing fields into a valid value.
    ///
    /// Nanoseconds carry into seconds, then minutes, hours and days. The zero
    /// based month carries into the year, and days walk the leap aware month
    /// lengths in both directions, so day zero is the last day of the month
    /// before.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn balance(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
        zone: TimeZone,
    ) -> Self {
        let (second, nanosecond) = carry(second, nanosecond, NS_PER_SECOND as i64);
        let (minute, second) = carry(minute, second, 60);
        let (hour, minute) = carry(hour, minute, 60);
        let (day, hour) = carry(day, hour, 24);
        let (year, month0) = carry(year, month.saturating_sub(1), 12);

        let first_of_month = utils::to_day_number(
            CalendarKind::Jalaali,
            utils::saturate_year(year),
            month0 as u8 + 1,
            1,
        );
        let (year, month, day) = utils::from_day_number(
            CalendarKind::Jalaali,
            first_of_month.saturating_add(day.saturating_sub(1)),
        );

        Self::new_unchecked(
            year,
            Month::from_ordinal_clamped(month.into()),
            day,
            hour as u8,
            minute as u8,
            second as u8,
            nanosecond as u32,
            zone,
        )
    }

    /// Creates a value from fields that are already known to be valid.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_unchecked(
        year: i32,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        zone: TimeZone,
    ) -> Self {
        let mut result = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            zone,
            weekday: Weekday::default(),
        };
        result.refresh_weekday();
        result
    }

    /// Returns the Jalaali day number of this value's date.
    #[inline]
    pub(crate) fn day_number(&self) -> i64 {
        utils::to_day_number(
            CalendarKind::Jalaali,
            self.year,
            self.month.ordinal(),
            self.day,
        )
    }

    /// Replaces the zone, keeping every other field.
    #[inline]
    pub(crate) fn set_zone(&mut self, zone: TimeZone) {
        self.zone = zone;
    }

    #[inline]
    fn refresh_weekday(&mut self) {
        self.weekday = Weekday::from_index(utils::weekday_of_day_number(self.day_number()));
    }

    #[inline]
    fn month_length(&self) -> u8 {
        utils::days_in_month(self.year, self.month.ordinal())
    }

    /// Pulls the day back into the current month after the year or month changed.
    #[inline]
    fn clamp_day(&mut self) {
        self.day = self.day.clamp(1, self.month_length());
    }

    /// Weekday index of the first day of the current month.
    fn first_month_weekday(&self) -> u8 {
        utils::weekday_of_day_number(self.day_number() - i64::from(self.day) + 1)
    }

    /// Weekday index of 1 Farvardin of the current year.
    fn first_year_weekday(&self) -> u8 {
        utils::weekday_of_day_number(utils::to_day_number(
            CalendarKind::Jalaali,
            self.year,
            1,
            1,
        ))
    }
}

// ==== Public API ====

impl JalaaliDateTime {
    /// Creates a new `JalaaliDateTime` from possibly out of range fields.
    ///
    /// Overflowing fields carry into the next larger unit, for example
    /// `new(1403, 12, 31, ..)` is `1404-01-01` in a year where Esfand has 30
    /// days, and a negative minute borrows from the hour. When `zone` is
    /// `None` the local zone is used.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        year: i64,
        month: impl Into<i64>,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
        zone: Option<TimeZone>,
    ) -> Self {
        Self::balance(
            year,
            month.into(),
            day,
            hour,
            minute,
            second,
            nanosecond,
            zone.unwrap_or_else(TimeZone::local),
        )
    }

    /// Creates a new `JalaaliDateTime` reading the civil instant in its own zone.
    ///
    /// The zero civil instant maps to the zero value.
    #[must_use]
    pub fn from_civil(civil: &CivilDateTime) -> Self {
        if civil.is_zero() {
            return Self::default();
        }
        let (year, month, day) =
            utils::from_day_number(CalendarKind::Jalaali, civil.date.to_day_number());
        Self::new_unchecked(
            year,
            Month::from_ordinal_clamped(month.into()),
            day,
            civil.hour(),
            civil.minute(),
            civil.second(),
            civil.nanosecond(),
            civil.zone.clone(),
        )
    }

    /// Creates a new `JalaaliDateTime` from an instant read in `zone`, or in
    /// the local zone when `zone` is `None`.
    pub fn from_epoch_nanoseconds(
        epoch_nanoseconds: EpochNanoseconds,
        zone: Option<TimeZone>,
    ) -> JalaaliResult<Self> {
        let zone = zone.unwrap_or_else(TimeZone::local);
        CivilDateTime::from_epoch_nanoseconds(epoch_nanoseconds, zone)
            .map(|civil| Self::from_civil(&civil))
    }

    /// Creates a new `JalaaliDateTime` from Unix seconds and nanoseconds in the local zone.
    pub fn from_unix(seconds: i64, nanoseconds: i64) -> JalaaliResult<Self> {
        Self::from_epoch_nanoseconds(EpochNanoseconds::from_parts(seconds, nanoseconds), None)
    }

    /// Returns the current date and time in the local zone.
    ///
    /// Enable with the `sys` feature flag.
    #[cfg(feature = "sys")]
    pub fn now() -> JalaaliResult<Self> {
        crate::sys::Jalaali::local_now().jalaali_date_time(None)
    }

    /// Converts this value to the civil calendar, keeping the wall clock and zone.
    ///
    /// The zero value converts to the zero civil instant.
    #[must_use]
    pub fn to_civil(&self) -> CivilDateTime {
        if self.is_zero() {
            return CivilDateTime::default();
        }
        CivilDateTime::new_unchecked(
            CivilDate::from_day_number(self.day_number()),
            CivilTime::new_unchecked(self.hour, self.minute, self.second, self.nanosecond),
            self.zone.clone(),
        )
    }

    /// Returns this value as nanoseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        self.to_civil().epoch_nanoseconds()
    }

    /// Returns the whole seconds since the Unix epoch, saturating at the `i64` bounds.
    #[must_use]
    pub fn unix(&self) -> i64 {
        let seconds = self.epoch_nanoseconds().as_i128().div_euclid(NS_PER_SECOND);
        seconds.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Returns the nanoseconds since the Unix epoch.
    #[must_use]
    pub fn unix_nano(&self) -> i128 {
        self.epoch_nanoseconds().as_i128()
    }

    /// Returns the absolute distance to `other` in whole seconds.
    #[must_use]
    pub fn since(&self, other: &Self) -> TimeDuration {
        let seconds = (other.unix_nano().div_euclid(NS_PER_SECOND)
            - self.unix_nano().div_euclid(NS_PER_SECOND))
        .abs();
        TimeDuration::from_nanoseconds(seconds * NS_PER_SECOND)
    }

    /// Returns whether this is the zero value.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether this value's year is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap(&self) -> bool {
        utils::is_leap_year(self.year)
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the hour on a 12 hour clock. Midnight is `0` and noon is `12`.
    #[inline]
    #[must_use]
    pub fn hour12(&self) -> u8 {
        if self.hour > 12 {
            self.hour - 12
        } else {
            self.hour
        }
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[inline]
    #[must_use]
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// Returns the zone's name and its offset in seconds east of UTC.
    #[inline]
    #[must_use]
    pub fn zone_name_offset(&self) -> (&str, i32) {
        (self.zone.name(), self.zone.offset().seconds())
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> (i32, Month, u8) {
        (self.year, self.month, self.day)
    }

    #[inline]
    #[must_use]
    pub fn clock(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    /// Returns the one based day of the year.
    #[must_use]
    pub fn year_day(&self) -> u16 {
        utils::days_before_month(self.month.ordinal()) + u16::from(self.day)
    }

    /// Returns the days left in the year after this day.
    #[must_use]
    pub fn year_remain_days(&self) -> u16 {
        utils::days_in_year(self.year).saturating_sub(self.year_day())
    }

    /// Returns the days left in the month after this day.
    #[must_use]
    pub fn month_remain_days(&self) -> u8 {
        self.month_length().saturating_sub(self.day)
    }

    /// Returns the Saturday based week of the month, starting at `1`.
    #[must_use]
    pub fn month_week(&self) -> u8 {
        (self.day + self.first_month_weekday()).div_ceil(7)
    }

    /// Returns the Saturday based week of the year, starting at `1`.
    #[must_use]
    pub fn year_week(&self) -> u8 {
        (self.year_day() + u16::from(self.first_year_weekday())).div_ceil(7) as u8
    }

    /// Returns `52` minus [`JalaaliDateTime::year_week`].
    ///
    /// The year is always counted as 52 weeks long, so the last days of a
    /// year that spills into a 53rd week report `-1`.
    #[must_use]
    pub fn year_remain_weeks(&self) -> i32 {
        52 - i32::from(self.year_week())
    }

    /// Returns the 12 hour marker.
    ///
    /// Noon itself, `12:00:00`, is still `Am`; any time after it is `Pm`.
    #[must_use]
    pub fn am_pm(&self) -> AmPm {
        if self.hour > 12 || (self.hour == 12 && (self.minute > 0 || self.second > 0)) {
            AmPm::Pm
        } else {
            AmPm::Am
        }
    }

    #[inline]
    #[must_use]
    pub fn day_time(&self) -> DayTime {
        DayTime::from_hour(self.hour)
    }
}

// ==== Setters ====

impl JalaaliDateTime {
    /// Sets the year, then clamps the day to the month's length in that year.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.clamp_day();
        self.refresh_weekday();
    }

    /// Sets the month, clamped to `1..=12`, then clamps the day to its length.
    pub fn set_month(&mut self, month: impl Into<i64>) {
        self.month = Month::from_ordinal_clamped(month.into());
        self.clamp_day();
        self.refresh_weekday();
    }

    /// Sets the day, clamped to the current month.
    pub fn set_day(&mut self, day: i64) {
        self.day = day.clamp(1, i64::from(self.month_length())) as u8;
        self.refresh_weekday();
    }

    pub fn set_hour(&mut self, hour: i64) {
        self.hour = hour.clamp(0, 23) as u8;
    }

    pub fn set_minute(&mut self, minute: i64) {
        self.minute = minute.clamp(0, 59) as u8;
    }

    pub fn set_second(&mut self, second: i64) {
        self.second = second.clamp(0, 59) as u8;
    }

    pub fn set_nanosecond(&mut self, nanosecond: i64) {
        self.nanosecond = nanosecond.clamp(0, 999_999_999) as u32;
    }

    /// Sets the clock fields that are provided.
    ///
    /// `None` and negative values leave the field unchanged; the rest clamp.
    pub fn set_time(
        &mut self,
        hour: Option<i64>,
        minute: Option<i64>,
        second: Option<i64>,
        nanosecond: Option<i64>,
    ) {
        let provided = |value: Option<i64>| value.filter(|v| *v >= 0);
        if let Some(hour) = provided(hour) {
            self.set_hour(hour);
        }
        if let Some(minute) = provided(minute) {
            self.set_minute(minute);
        }
        if let Some(second) = provided(second) {
            self.set_second(second);
        }
        if let Some(nanosecond) = provided(nanosecond) {
            self.set_nanosecond(nanosecond);
        }
    }

    /// Sets the date fields that are provided.
    ///
    /// `None` and values below one leave the field unchanged; the rest clamp.
    pub fn set_date(&mut self, year: Option<i32>, month: Option<i64>, day: Option<i64>) {
        if let Some(year) = year.filter(|y| *y > 0) {
            self.set_year(year);
        }
        if let Some(month) = month.filter(|m| *m > 0) {
            self.set_month(month);
        }
        if let Some(day) = day.filter(|d| *d > 0) {
            self.set_day(day);
        }
    }

    /// Sets every provided field, following [`JalaaliDateTime::set_date`] and
    /// [`JalaaliDateTime::set_time`].
    #[allow(clippy::too_many_arguments)]
    pub fn set_datetime(
        &mut self,
        year: Option<i32>,
        month: Option<i64>,
        day: Option<i64>,
        hour: Option<i64>,
        minute: Option<i64>,
        second: Option<i64>,
        nanosecond: Option<i64>,
    ) {
        self.set_date(year, month, day);
        self.set_time(hour, minute, second, nanosecond);
    }
}
