//! This module implements the civil calendar interop types.
//!
//! The three types are:
//!   - `CivilDate`
//!   - `CivilTime`
//!   - `CivilDateTime`
//!
//! A `CivilDate` is a date of the historical civil calendar: Julian up to
//! 1582-10-04 and Gregorian from 1582-10-15 on.
//!
//! A `CivilDateTime` pairs a `CivilDate` and `CivilTime` with a shared
//! `TimeZone`, which makes it an instant: it can be turned into epoch
//! nanoseconds and clock durations can be added to it.

use num_traits::ToPrimitive;

use crate::{
    builtins::core::{TimeDuration, TimeZone, Weekday},
    error::ErrorMessage,
    jalaali_assert,
    time::EpochNanoseconds,
    utils::{self, CalendarKind},
    JalaaliError, JalaaliResult, JalaaliUnwrap, NS_MAX_INSTANT, NS_MIN_INSTANT, NS_PER_DAY,
    NS_PER_SECOND,
};

// ==== `CivilDate` section ====

/// `CivilDate` is the `year`, `month`, and `day` record of the civil calendar.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `CivilDate`.
    ///
    /// The ten days skipped by the Gregorian reform are rejected.
    pub fn try_new(year: i32, month: u8, day: u8) -> JalaaliResult<Self> {
        if !is_valid_civil_date(year, month, day) {
            return Err(JalaaliError::range().with_enum(ErrorMessage::CivilDateOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the civil date for a day number.
    #[must_use]
    pub fn from_day_number(day_number: i64) -> Self {
        let (year, month, day) = utils::from_day_number(CalendarKind::Civil, day_number);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the day number of this date.
    #[must_use]
    pub fn to_day_number(&self) -> i64 {
        utils::to_day_number(CalendarKind::Civil, self.year, self.month, self.day)
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(utils::weekday_of_day_number(self.to_day_number()))
    }
}

impl Default for CivilDate {
    fn default() -> Self {
        Self::new_unchecked(1, 1, 1)
    }
}

// ==== `CivilTime` section ====

/// A `CivilTime` record with the wall clock fields of a `CivilDateTime`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime {
    pub hour: u8,        // 0..=23
    pub minute: u8,      // 0..=59
    pub second: u8,      // 0..=59
    pub nanosecond: u32, // 0..=999_999_999
}

impl CivilTime {
    /// Creates a new `CivilTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new validated `CivilTime`.
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> JalaaliResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(JalaaliError::range().with_enum(ErrorMessage::CivilTimeOutOfRange));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    fn from_nanoseconds_of_day(nanos: i128) -> Self {
        let seconds = nanos / NS_PER_SECOND;
        Self::new_unchecked(
            (seconds / 3600) as u8,
            ((seconds / 60) % 60) as u8,
            (seconds % 60) as u8,
            (nanos % NS_PER_SECOND) as u32,
        )
    }

    fn to_nanoseconds_of_day(self) -> i128 {
        let seconds =
            i128::from(self.hour) * 3600 + i128::from(self.minute) * 60 + i128::from(self.second);
        seconds * NS_PER_SECOND + i128::from(self.nanosecond)
    }
}

// ==== `CivilDateTime` section ====

/// `CivilDateTime` is a civil date and wall clock time in a fixed offset zone.
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
    pub zone: TimeZone,
}

impl CivilDateTime {
    pub(crate) fn new_unchecked(date: CivilDate, time: CivilTime, zone: TimeZone) -> Self {
        Self { date, time, zone }
    }

    /// Creates a new `CivilDateTime` from already validated components.
    pub fn new(date: CivilDate, time: CivilTime, zone: TimeZone) -> Self {
        Self::new_unchecked(date, time, zone)
    }

    /// Creates a new `CivilDateTime` from raw fields, validating each of them.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        zone: TimeZone,
    ) -> JalaaliResult<Self> {
        let date = CivilDate::try_new(year, month, day)?;
        let time = CivilTime::try_new(hour, minute, second, nanosecond)?;
        Ok(Self::new_unchecked(date, time, zone))
    }

    /// Creates the wall clock reading of an instant in `zone`.
    pub fn from_epoch_nanoseconds(
        epoch_nanoseconds: EpochNanoseconds,
        zone: TimeZone,
    ) -> JalaaliResult<Self> {
        let nanos = epoch_nanoseconds.as_i128();
        if !(NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(&nanos) {
            return Err(JalaaliError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }

        let local = nanos + i128::from(zone.offset().seconds()) * NS_PER_SECOND;
        let epoch_days = local.div_euclid(NS_PER_DAY).to_i64().jalaali_unwrap()?;
        let nanos_of_day = local.rem_euclid(NS_PER_DAY);
        jalaali_assert!(nanos_of_day < NS_PER_DAY);

        let date = CivilDate::from_day_number(epoch_days + utils::UNIX_EPOCH_DAY);
        let time = CivilTime::from_nanoseconds_of_day(nanos_of_day);
        Ok(Self::new_unchecked(date, time, zone))
    }

    /// Returns this `CivilDateTime` as nanoseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        let epoch_days = i128::from(self.date.to_day_number() - utils::UNIX_EPOCH_DAY);
        let local = epoch_days * NS_PER_DAY + self.time.to_nanoseconds_of_day();
        EpochNanoseconds::from(local - i128::from(self.zone.offset().seconds()) * NS_PER_SECOND)
    }

    /// Adds a clock duration to this instant and reads the wall clock in the same zone.
    pub fn checked_add(&self, duration: TimeDuration) -> JalaaliResult<Self> {
        let result = self
            .epoch_nanoseconds()
            .checked_add(duration.as_nanoseconds())?;
        Self::from_epoch_nanoseconds(result, self.zone.clone())
    }

    /// Returns the same instant read in another zone.
    pub fn with_zone(&self, zone: TimeZone) -> JalaaliResult<Self> {
        Self::from_epoch_nanoseconds(self.epoch_nanoseconds(), zone)
    }

    /// Returns whether this is the zero civil instant, `0001-01-01T00:00:00` UTC.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.date.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.time.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.time.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.time.second
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond
    }

    #[inline]
    #[must_use]
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

// ==== `CivilDate` specific utility functions ====

#[inline]
fn civil_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_civil_leap_year(year) => 29,
        _ => 28,
    }
}

#[inline]
fn is_civil_leap_year(year: i32) -> bool {
    if year < 1582 {
        return year.rem_euclid(4) == 0;
    }
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
fn is_valid_civil_date(year: i32, month: u8, day: u8) -> bool {
    if !(1..=12).contains(&month) || day == 0 {
        return false;
    }
    // Thursday 1582-10-04 was followed by Friday 1582-10-15.
    if (year, month) == (1582, 10) && (5..=14).contains(&day) {
        return false;
    }
    day <= civil_days_in_month(year, month)
}
