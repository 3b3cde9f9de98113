use jalaali_rs::{
    layout::{self, RFC3339, RFC3339_NANO},
    time::EpochNanoseconds,
    CivilDateTime, JalaaliDateTime, Month, TimeDuration, TimeZone, Weekday,
};

fn tehran(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> JalaaliDateTime {
    JalaaliDateTime::new(year, month, day, hour, minute, second, 0, Some(TimeZone::tehran()))
}

#[test]
fn display_is_rfc3339() {
    let dt = tehran(1403, 1, 15, 20, 14, 0);
    assert_eq!(dt.to_string(), "1403-01-15T20:14:00+03:30");
    assert_eq!(format!("{dt}"), dt.format(RFC3339));
}

#[test]
fn calendar_arithmetic() {
    let dt = JalaaliDateTime::new(1403, 1, 15, 20, 14, 0, 1, Some(TimeZone::tehran()));
    assert_eq!(dt.add_date(1, 1, 1).format(RFC3339), "1404-02-16T20:14:00+03:30");
    assert_eq!(
        dt.add_date(0, 0, 1).format(RFC3339_NANO),
        "1403-01-16T20:14:00.000000001+03:30"
    );
    assert_eq!(dt.add_date(0, 12, 0).date(), (1404, Month::Farvardin, 15));
    assert_eq!(dt.add_date(0, -1, 0).date(), (1402, Month::Esfand, 15));

    // Esfand 30 only exists in leap years.
    let last = tehran(1403, 12, 30, 0, 0, 0);
    assert_eq!(last.add_date(1, 0, 0).date(), (1405, Month::Farvardin, 1));
    assert_eq!(last.tomorrow().date(), (1404, Month::Farvardin, 1));
    assert_eq!(last.tomorrow().yesterday(), last);
}

#[test]
fn clock_arithmetic() {
    let dt = tehran(1403, 1, 15, 20, 14, 0);
    assert_eq!(
        dt.add_time(1, 30, 0, 0).unwrap().format(RFC3339),
        "1403-01-15T21:44:00+03:30"
    );
    assert_eq!(
        dt.add_time(4, 0, 0, 0).unwrap().format(RFC3339),
        "1403-01-16T00:14:00+03:30"
    );
    assert_eq!(
        dt.add(TimeDuration::from_hours(-24)).unwrap().date(),
        (1403, Month::Farvardin, 14)
    );

    let later = dt.add_time(0, 0, 90, 0).unwrap();
    assert_eq!(later.since(&dt), TimeDuration::from_seconds(90));
    assert_eq!(dt.since(&later), TimeDuration::from_seconds(90));
}

#[test]
fn setters_and_ranges() {
    let mut dt = tehran(1403, 1, 15, 20, 14, 0);
    dt.set_time(None, Some(30), Some(10), Some(10));
    assert_eq!(dt.format(RFC3339_NANO), "1403-01-15T20:30:10.000000010+03:30");

    assert_eq!(
        dt.beginning_of_month().format(RFC3339),
        "1403-01-01T00:00:00+03:30"
    );
    assert_eq!(
        dt.end_of_year().format(RFC3339_NANO),
        "1403-12-30T23:59:59.999999999+03:30"
    );

    // 1403-01-15 is a Wednesday.
    assert_eq!(dt.weekday(), Weekday::Charshanbeh);
    assert_eq!(dt.beginning_of_week().format(RFC3339), "1403-01-11T00:00:00+03:30");
    assert_eq!(dt.end_of_week().date(), (1403, Month::Farvardin, 17));
    assert_eq!(dt.end_of_week().weekday(), Weekday::Jomeh);
}

#[test]
fn kabul_values() {
    let dt = JalaaliDateTime::new(1403, 1, 15, 20, 14, 0, 9_841_223, Some(TimeZone::kabul()));
    assert_eq!(
        dt.end_of_month().format(RFC3339_NANO),
        "1403-01-31T23:59:59.999999999+04:30"
    );
    assert_eq!(dt.format(".999999 MST"), ".009841 Asia/Kabul");
    assert_eq!(dt.format("2 January"), "15 حمل");
}

#[test]
fn civil_interop() {
    let civil = CivilDateTime::try_new(2024, 3, 20, 6, 36, 26, 0, TimeZone::tehran()).unwrap();
    let dt = JalaaliDateTime::from_civil(&civil);
    assert_eq!(dt.date(), (1403, Month::Farvardin, 1));
    assert_eq!(dt.unix(), 1_710_903_986);
    assert_eq!(dt.to_civil(), civil);

    let from_unix = JalaaliDateTime::from_epoch_nanoseconds(
        EpochNanoseconds::from_parts(1_710_903_986, 0),
        Some(TimeZone::utc()),
    )
    .unwrap();
    assert_eq!(from_unix.clock(), (3, 6, 26));
    assert_eq!(from_unix.with_zone(Some(TimeZone::tehran())).clock(), (3, 6, 26));
}

#[test]
fn layout_round_trips() {
    let dt = JalaaliDateTime::parse("2006", "1403").unwrap();
    assert!(dt.is_leap());
    assert_eq!(dt.format("2006"), "1403");

    let dt = JalaaliDateTime::parse("MST", "UTC").unwrap();
    assert_eq!(dt.zone().name(), "UTC");
    assert_eq!(dt.format("Z07:00"), "Z");

    let dt = layout::parse(RFC3339_NANO, "1403-01-15T20:14:00.000000010+03:30").unwrap();
    assert_eq!(dt.nanosecond(), 10);
    assert_eq!(dt.format(RFC3339_NANO), "1403-01-15T20:14:00.000000010+03:30");
    assert_eq!(dt.unix(), tehran(1403, 1, 15, 20, 14, 0).unix());
}

#[test]
fn construction_carries() {
    for (month, day) in [(-30, 400), (0, 0), (24, -400), (13, 32)] {
        let dt = tehran(1403, month, day, 25, 61, 61);
        assert!(dt.day() <= jalaali_rs::days_in_month(dt.year(), dt.month().ordinal()));
        assert_eq!(dt.clock(), (2, 2, 1));
        let reparsed: JalaaliDateTime = dt.to_string().parse().unwrap();
        assert_eq!(reparsed.date(), dt.date());
    }
}

#[test]
fn host_free_now() {
    let dt = jalaali_rs::Now::new(()).jalaali_date_time(None).unwrap();
    assert_eq!(dt.format(RFC3339), "1348-10-11T00:00:00Z");
}
