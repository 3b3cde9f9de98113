//! Arithmetic and range operations of `JalaaliDateTime`.
//!
//! Clock arithmetic (`add`, `add_time`) goes through the civil instant, so it
//! counts elapsed time. Calendar arithmetic (`add_date`, `add_datetime`) adds
//! to the Jalaali fields and lets construction carry the result.

use crate::{utils, JalaaliResult};

use super::{JalaaliDateTime, Month, TimeDuration, TimeZone, Weekday};

impl JalaaliDateTime {
    /// Adds a clock duration to this instant.
    ///
    /// The zone is kept, so the result reads the new instant's wall clock in
    /// the same zone.
    pub fn add(&self, duration: TimeDuration) -> JalaaliResult<Self> {
        self.to_civil()
            .checked_add(duration)
            .map(|civil| Self::from_civil(&civil))
    }

    /// Adds the sum of the clock components to this instant.
    pub fn add_time(
        &self,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanoseconds: i64,
    ) -> JalaaliResult<Self> {
        self.add(TimeDuration::from_clock(hours, minutes, seconds, nanoseconds))
    }

    /// Adds years, months and days to the Jalaali fields.
    #[must_use]
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Self {
        self.add_datetime(years, months, days, 0, 0, 0, 0)
    }

    /// Adds to every Jalaali field and carries the overflow.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn add_datetime(
        &self,
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanoseconds: i64,
    ) -> Self {
        Self::balance(
            i64::from(self.year()).saturating_add(years),
            i64::from(self.month()).saturating_add(months),
            i64::from(self.day()).saturating_add(days),
            i64::from(self.hour()).saturating_add(hours),
            i64::from(self.minute()).saturating_add(minutes),
            i64::from(self.second()).saturating_add(seconds),
            i64::from(self.nanosecond()).saturating_add(nanoseconds),
            self.zone().clone(),
        )
    }

    #[must_use]
    pub fn yesterday(&self) -> Self {
        self.add_date(0, 0, -1)
    }

    #[must_use]
    pub fn tomorrow(&self) -> Self {
        self.add_date(0, 0, 1)
    }

    /// Returns the same fields in another zone. `None` keeps the current zone.
    ///
    /// This relabels the wall clock; it does not convert the instant.
    #[must_use]
    pub fn with_zone(&self, zone: Option<TimeZone>) -> Self {
        let mut result = self.clone();
        if let Some(zone) = zone {
            result.set_zone(zone);
        }
        result
    }

    // ==== Ranges ====

    /// Returns the same date at `00:00:00`.
    #[must_use]
    pub fn beginning_of_day(&self) -> Self {
        let mut result = self.clone();
        result.set_time(Some(0), Some(0), Some(0), Some(0));
        result
    }

    /// Returns the same date at `23:59:59.999999999`.
    #[must_use]
    pub fn end_of_day(&self) -> Self {
        let mut result = self.clone();
        result.set_time(Some(23), Some(59), Some(59), Some(999_999_999));
        result
    }

    /// Returns the Saturday of this week, keeping the clock.
    #[must_use]
    pub fn first_week_day(&self) -> Self {
        if self.weekday() == Weekday::Shanbeh {
            return self.clone();
        }
        self.add_date(0, 0, -i64::from(self.weekday().index()))
    }

    /// Returns the Friday of this week, keeping the clock.
    #[must_use]
    pub fn last_week_day(&self) -> Self {
        if self.weekday() == Weekday::Jomeh {
            return self.clone();
        }
        let jomeh = Weekday::Jomeh.index();
        self.add_date(0, 0, i64::from(jomeh - self.weekday().index()))
    }

    #[must_use]
    pub fn beginning_of_week(&self) -> Self {
        self.first_week_day().beginning_of_day()
    }

    #[must_use]
    pub fn end_of_week(&self) -> Self {
        self.last_week_day().end_of_day()
    }

    /// Returns the first day of this month, keeping the clock.
    #[must_use]
    pub fn first_month_day(&self) -> Self {
        if self.day() == 1 {
            return self.clone();
        }
        self.with_date(self.month(), 1)
    }

    /// Returns the last day of this month, keeping the clock.
    #[must_use]
    pub fn last_month_day(&self) -> Self {
        let last = utils::days_in_month(self.year(), self.month().ordinal());
        if self.day() == last {
            return self.clone();
        }
        self.with_date(self.month(), last)
    }

    #[must_use]
    pub fn beginning_of_month(&self) -> Self {
        self.first_month_day().beginning_of_day()
    }

    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.last_month_day().end_of_day()
    }

    /// Returns 1 Farvardin of this year, keeping the clock.
    #[must_use]
    pub fn first_year_day(&self) -> Self {
        if self.month() == Month::Farvardin && self.day() == 1 {
            return self.clone();
        }
        self.with_date(Month::Farvardin, 1)
    }

    /// Returns the last day of Esfand of this year, keeping the clock.
    #[must_use]
    pub fn last_year_day(&self) -> Self {
        let last = utils::days_in_month(self.year(), Month::Esfand.ordinal());
        if self.month() == Month::Esfand && self.day() == last {
            return self.clone();
        }
        self.with_date(Month::Esfand, last)
    }

    #[must_use]
    pub fn beginning_of_year(&self) -> Self {
        self.first_year_day().beginning_of_day()
    }

    #[must_use]
    pub fn end_of_year(&self) -> Self {
        self.last_year_day().end_of_day()
    }

    /// Rebuilds this value on another day of the same year.
    fn with_date(&self, month: Month, day: u8) -> Self {
        Self::balance(
            i64::from(self.year()),
            i64::from(month),
            i64::from(day),
            i64::from(self.hour()),
            i64::from(self.minute()),
            i64::from(self.second()),
            i64::from(self.nanosecond()),
            self.zone().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{JalaaliDateTime, Month, TimeDuration, TimeZone, Weekday};

    fn tehran(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> JalaaliDateTime {
        JalaaliDateTime::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            Some(TimeZone::tehran()),
        )
    }

    #[test]
    fn add_counts_elapsed_time() {
        let dt = tehran(1403, 12, 30, 23, 0, 0, 0);
        let next = dt.add(TimeDuration::from_hours(2)).unwrap();
        assert_eq!(next.date(), (1404, Month::Farvardin, 1));
        assert_eq!(next.clock(), (1, 0, 0));
        assert_eq!(next.zone(), &TimeZone::tehran());

        let back = dt.add_time(-23, 0, 0, -1).unwrap();
        assert_eq!(back.date(), (1403, Month::Esfand, 29));
        assert_eq!(back.clock(), (23, 59, 59));
        assert_eq!(back.nanosecond(), 999_999_999);
    }

    #[test]
    fn add_date_carries() {
        let dt = tehran(1403, 6, 31, 8, 0, 0, 0);
        // Mehr has 30 days, so day 31 carries into Aban.
        assert_eq!(dt.add_date(0, 1, 0).date(), (1403, Month::Aban, 1));
        assert_eq!(dt.add_date(0, -12, 0).date(), (1402, Month::Shahrivar, 31));
        assert_eq!(dt.add_date(0, 0, 1).date(), (1403, Month::Mehr, 1));
        assert_eq!(dt.add_date(0, 0, -31).date(), (1403, Month::Mordad, 31));
        assert_eq!(dt.add_date(0, 0, 366).date(), (1404, Month::Shahrivar, 31));

        let late = dt.add_datetime(0, 0, 0, 16, 0, 0, 0);
        assert_eq!(late.date(), (1403, Month::Mehr, 1));
        assert_eq!(late.hour(), 0);
    }

    #[test]
    fn yesterday_and_tomorrow() {
        let nowruz = tehran(1403, 1, 1, 12, 0, 0, 0);
        assert_eq!(nowruz.yesterday().date(), (1402, Month::Esfand, 29));
        assert_eq!(nowruz.tomorrow().date(), (1403, Month::Farvardin, 2));
        assert_eq!(nowruz.yesterday().tomorrow(), nowruz);
    }

    #[test]
    fn with_zone_keeps_fields() {
        let dt = tehran(1403, 1, 15, 20, 14, 0, 0);
        let kabul = dt.with_zone(Some(TimeZone::kabul()));
        assert_eq!(kabul.date(), dt.date());
        assert_eq!(kabul.clock(), dt.clock());
        assert_eq!(kabul.zone_name_offset(), ("Asia/Kabul", 16_200));
        assert_eq!(kabul.unix() - dt.unix(), -3600);

        assert_eq!(kabul.with_zone(None), kabul);
        assert_eq!(dt.with_zone(None).zone(), &TimeZone::tehran());
    }

    #[test]
    fn week_ranges() {
        // 1403-01-15 is a Wednesday.
        let dt = tehran(1403, 1, 15, 20, 14, 0, 0);
        assert_eq!(dt.weekday(), Weekday::Charshanbeh);

        let first = dt.first_week_day();
        assert_eq!(first.date(), (1403, Month::Farvardin, 11));
        assert_eq!(first.weekday(), Weekday::Shanbeh);
        assert_eq!(first.clock(), (20, 14, 0));

        let last = dt.last_week_day();
        assert_eq!(last.date(), (1403, Month::Farvardin, 17));
        assert_eq!(last.weekday(), Weekday::Jomeh);

        assert_eq!(dt.beginning_of_week().clock(), (0, 0, 0));
        let end = dt.end_of_week();
        assert_eq!(end.clock(), (23, 59, 59));
        assert_eq!(end.nanosecond(), 999_999_999);

        assert_eq!(first.first_week_day(), first);
        assert_eq!(last.last_week_day(), last);
    }

    #[test]
    fn month_and_year_ranges() {
        let dt = tehran(1403, 12, 10, 9, 30, 0, 5);
        assert_eq!(dt.first_month_day().date(), (1403, Month::Esfand, 1));
        assert_eq!(dt.last_month_day().date(), (1403, Month::Esfand, 30));
        assert_eq!(dt.last_month_day().nanosecond(), 5);
        assert_eq!(dt.first_year_day().date(), (1403, Month::Farvardin, 1));
        assert_eq!(dt.last_year_day().date(), (1403, Month::Esfand, 30));

        let common = tehran(1404, 12, 10, 9, 30, 0, 0);
        assert_eq!(common.last_year_day().date(), (1404, Month::Esfand, 29));

        let begin = dt.beginning_of_year();
        assert_eq!(begin.date(), (1403, Month::Farvardin, 1));
        assert_eq!((begin.clock(), begin.nanosecond()), ((0, 0, 0), 0));
        assert_eq!(begin.weekday(), Weekday::Charshanbeh);

        let end = dt.end_of_month();
        assert_eq!((end.clock(), end.nanosecond()), ((23, 59, 59), 999_999_999));
    }

    #[test]
    fn boundaries_are_idempotent() {
        let dt = tehran(1403, 7, 19, 13, 45, 10, 77);
        let ops: [fn(&JalaaliDateTime) -> JalaaliDateTime; 14] = [
            JalaaliDateTime::beginning_of_day,
            JalaaliDateTime::end_of_day,
            JalaaliDateTime::first_week_day,
            JalaaliDateTime::last_week_day,
            JalaaliDateTime::beginning_of_week,
            JalaaliDateTime::end_of_week,
            JalaaliDateTime::first_month_day,
            JalaaliDateTime::last_month_day,
            JalaaliDateTime::beginning_of_month,
            JalaaliDateTime::end_of_month,
            JalaaliDateTime::first_year_day,
            JalaaliDateTime::last_year_day,
            JalaaliDateTime::beginning_of_year,
            JalaaliDateTime::end_of_year,
        ];
        for op in ops {
            let once = op(&dt);
            assert_eq!(op(&once), once);
        }
    }

    #[test]
    fn since_is_absolute() {
        let a = tehran(1403, 1, 1, 0, 0, 0, 0);
        let b = tehran(1403, 1, 2, 0, 0, 1, 500);
        assert_eq!(a.since(&b), TimeDuration::from_seconds(86_401));
        assert_eq!(b.since(&a), a.since(&b));
    }
}
