//! Utility date equations for the Jalaali and civil calendars.
//!
//! Every conversion goes through a day number counted from the Julian
//! period epoch: Jalaali fields are turned into a day number and the day
//! number is turned into civil fields, never field to field.

/// The calendar a day number is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    /// The Jalaali (Solar Hijri) calendar.
    Jalaali,
    /// The civil calendar: Julian before the reform day, Gregorian after it.
    Civil,
}

/// Day number of 1 Farvardin 1.
pub(crate) const JALAALI_EPOCH_DAY: i64 = 1_948_320;

/// Day number of 1582-10-04 (Julian), the last day before the Gregorian reform.
pub const GREGORIAN_REFORM_DAY: i64 = 2_299_160;

/// Day number of 1970-01-01.
pub(crate) const UNIX_EPOCH_DAY: i64 = 2_440_588;

// ==== Begin Leap/Length Tables ====

/// `{common length, leap length, days before the month in a common year}`
/// indexed by `month - 1`.
pub(crate) const MONTH_META: [[u16; 3]; 12] = [
    [31, 31, 0],   // Farvardin
    [31, 31, 31],  // Ordibehesht
    [31, 31, 62],  // Khordad
    [31, 31, 93],  // Tir
    [31, 31, 124], // Mordad
    [31, 31, 155], // Shahrivar
    [30, 30, 186], // Mehr
    [30, 30, 216], // Aban
    [30, 30, 246], // Azar
    [30, 30, 276], // Dey
    [30, 30, 306], // Bahman
    [29, 30, 336], // Esfand
];

#[inline]
fn month_index(month: i64) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

/// Returns whether `year` is a Jalaali leap year.
///
/// Uses the 33 year arithmetic cycle, which agrees with the astronomical
/// calendar for every year between 1178 and 1633.
#[inline]
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

/// Returns the number of days in `month` of `year`.
///
/// Out of range months are clamped to `1..=12`.
#[inline]
#[must_use]
pub fn days_in_month(year: i32, month: u8) -> u8 {
    month_length(year, i64::from(month)) as u8
}

#[inline]
pub(crate) fn month_length(year: i32, month: i64) -> i64 {
    let meta = MONTH_META[month_index(month)];
    i64::from(meta[usize::from(is_leap_year(year))])
}

/// Returns the number of days before `month` starts in any year.
#[inline]
pub(crate) fn days_before_month(month: u8) -> u16 {
    MONTH_META[month_index(i64::from(month))][2]
}

/// Returns the number of days in `year`.
#[inline]
#[must_use]
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ==== End Leap/Length Tables ====

// ==== Begin Jalaali Equations ====

/// Leap days in the years before `year`, offset so that year 1 starts at zero.
#[inline]
fn leap_days_before(year: i64) -> i64 {
    (8 * year + 21).div_euclid(33)
}

fn jalaali_to_day_number(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    JALAALI_EPOCH_DAY
        + 365 * (year - 1)
        + leap_days_before(year)
        + i64::from(days_before_month(month))
        + i64::from(day)
        - 1
}

fn day_number_to_jalaali(day_number: i64) -> (i32, u8, u8) {
    let day_number = day_number.clamp(
        jalaali_to_day_number(i32::MIN, 1, 1),
        jalaali_to_day_number(i32::MAX, 12, 29),
    );
    // roughly calculate the year from the mean year length of the cycle,
    // then check and refine the year.
    let mut year = saturate_year((33 * (day_number - JALAALI_EPOCH_DAY) + 3).div_euclid(12053) + 1);
    while year > i32::MIN && jalaali_to_day_number(year, 1, 1) > day_number {
        year -= 1;
    }
    while year < i32::MAX && jalaali_to_day_number(year + 1, 1, 1) <= day_number {
        year += 1;
    }

    let day_of_year = day_number - jalaali_to_day_number(year, 1, 1);
    let month = match day_of_year {
        0..=185 => day_of_year / 31 + 1,
        186..=335 => (day_of_year - 186) / 30 + 7,
        _ => 12,
    };
    let day = day_of_year - i64::from(days_before_month(month as u8)) + 1;

    (year, month as u8, day as u8)
}

// ==== End Jalaali Equations ====

// ==== Begin Civil Equations ====

/// Returns whether a civil date falls on or after 1582-10-15, the first
/// Gregorian day.
#[inline]
#[must_use]
pub fn is_after_reform(year: i32, month: u8, day: u8) -> bool {
    (year, month, day) > (1582, 10, 14)
}

#[inline]
fn march_based(year: i32, month: u8) -> (i64, i64) {
    let a = (14 - i64::from(month)).div_euclid(12);
    (i64::from(year) + 4800 - a, i64::from(month) + 12 * a - 3)
}

fn gregorian_to_day_number(year: i32, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

fn julian_to_day_number(year: i32, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

fn day_number_to_gregorian(day_number: i64) -> (i32, u8, u8) {
    let a = day_number + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    march_based_to_fields(b, c)
}

fn day_number_to_julian(day_number: i64) -> (i32, u8, u8) {
    march_based_to_fields(0, day_number + 32082)
}

fn march_based_to_fields(centuries: i64, days: i64) -> (i32, u8, u8) {
    let d = (4 * days + 3).div_euclid(1461);
    let e = days - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * centuries + d - 4800 + m.div_euclid(10);
    (saturate_year(year), month as u8, day as u8)
}

// ==== End Civil Equations ====

/// Returns the day number of a date in the given calendar.
#[must_use]
pub fn to_day_number(calendar: CalendarKind, year: i32, month: u8, day: u8) -> i64 {
    match calendar {
        CalendarKind::Jalaali => jalaali_to_day_number(year, month, day),
        CalendarKind::Civil if is_after_reform(year, month, day) => {
            gregorian_to_day_number(year, month, day)
        }
        CalendarKind::Civil => julian_to_day_number(year, month, day),
    }
}

/// Returns the `(year, month, day)` of a day number in the given calendar.
#[must_use]
pub fn from_day_number(calendar: CalendarKind, day_number: i64) -> (i32, u8, u8) {
    match calendar {
        CalendarKind::Jalaali => day_number_to_jalaali(day_number),
        CalendarKind::Civil if day_number > GREGORIAN_REFORM_DAY => {
            day_number_to_gregorian(day_number)
        }
        CalendarKind::Civil => day_number_to_julian(day_number),
    }
}

/// Returns the weekday of a day number where 0 is Saturday.
#[inline]
pub(crate) fn weekday_of_day_number(day_number: i64) -> u8 {
    (day_number + 2).rem_euclid(7) as u8
}

#[inline]
pub(crate) fn saturate_year(year: i64) -> i32 {
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_esfand_length() {
        let leaps: Vec<i32> = (1390..1410).filter(|y| is_leap_year(*y)).collect();
        assert_eq!(leaps, [1391, 1395, 1399, 1403, 1408]);

        for year in 1300..1500 {
            let esfand = days_in_month(year, 12);
            assert_eq!(is_leap_year(year), esfand == 30, "year {year}");
            assert_eq!(days_in_year(year), if esfand == 30 { 366 } else { 365 });
            for month in 1..=6 {
                assert_eq!(days_in_month(year, month), 31);
            }
            for month in 7..=11 {
                assert_eq!(days_in_month(year, month), 30);
            }
        }
    }

    #[test]
    fn nowruz_matches_gregorian_dates() {
        let cases = [
            (1300, (1921, 3, 21)),
            (1354, (1975, 3, 21)),
            (1375, (1996, 3, 20)),
            (1399, (2020, 3, 20)),
            (1400, (2021, 3, 21)),
            (1403, (2024, 3, 20)),
            (1404, (2025, 3, 21)),
        ];
        for (year, civil) in cases {
            let n = to_day_number(CalendarKind::Jalaali, year, 1, 1);
            assert_eq!(from_day_number(CalendarKind::Civil, n), civil, "year {year}");
        }
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(to_day_number(CalendarKind::Civil, 1970, 1, 1), UNIX_EPOCH_DAY);
        assert_eq!(to_day_number(CalendarKind::Civil, 2024, 3, 20), 2_460_390);
        assert_eq!(to_day_number(CalendarKind::Jalaali, 1403, 1, 1), 2_460_390);
        assert_eq!(to_day_number(CalendarKind::Jalaali, 1, 1, 1), JALAALI_EPOCH_DAY);
    }

    #[test]
    fn reform_boundary() {
        assert!(!is_after_reform(1582, 10, 4));
        assert!(is_after_reform(1582, 10, 15));

        assert_eq!(
            to_day_number(CalendarKind::Civil, 1582, 10, 4),
            GREGORIAN_REFORM_DAY
        );
        assert_eq!(
            to_day_number(CalendarKind::Civil, 1582, 10, 15),
            GREGORIAN_REFORM_DAY + 1
        );
        assert_eq!(
            from_day_number(CalendarKind::Civil, GREGORIAN_REFORM_DAY),
            (1582, 10, 4)
        );
        assert_eq!(
            from_day_number(CalendarKind::Civil, GREGORIAN_REFORM_DAY + 1),
            (1582, 10, 15)
        );
    }

    #[test]
    fn day_number_round_trips() {
        // Covers roughly 2700 BCE through 9700 CE, on both sides of the reform.
        for n in (700_000..5_000_000).step_by(997) {
            for calendar in [CalendarKind::Jalaali, CalendarKind::Civil] {
                let (y, m, d) = from_day_number(calendar, n);
                assert_eq!(to_day_number(calendar, y, m, d), n, "{calendar:?} {n}");
            }
        }

        for n in GREGORIAN_REFORM_DAY - 400..GREGORIAN_REFORM_DAY + 400 {
            let (y, m, d) = from_day_number(CalendarKind::Civil, n);
            assert_eq!(to_day_number(CalendarKind::Civil, y, m, d), n);
        }
    }

    #[test]
    fn jalaali_fields_round_trip() {
        for year in [-50, 1, 622, 1210, 1399, 1403, 1404, 3000] {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let n = to_day_number(CalendarKind::Jalaali, year, month, day);
                    assert_eq!(
                        from_day_number(CalendarKind::Jalaali, n),
                        (year, month, day)
                    );
                }
            }
        }
    }

    #[test]
    fn saturday_is_zero() {
        // 2000-01-01 was a Saturday, 2024-03-20 a Wednesday.
        let saturday = to_day_number(CalendarKind::Civil, 2000, 1, 1);
        assert_eq!(weekday_of_day_number(saturday), 0);
        let wednesday = to_day_number(CalendarKind::Civil, 2024, 3, 20);
        assert_eq!(weekday_of_day_number(wednesday), 4);
    }
}
