//! Layout based formatting and parsing of `JalaaliDateTime`.
//!
//! A layout is text written in terms of the reference time
//! `2006-01-02 15:04:05.999999999 -0700 MST`. Scanning the layout from the
//! left, the first token of the table below that matches at the current
//! position is taken; any other character is literal text.
//!
//! | Token | Field |
//! |---|---|
//! | `2006`, `06` | year, four digits or the last two |
//! | `15` | hour on a 24 hour clock |
//! | `January`, `Jan` | month name, full or short |
//! | `01`, `1` | month number, zero padded or not |
//! | `02`, `_2`, `2` | day, zero padded, space padded, or not |
//! | `Monday`, `Mon` | weekday name, full or short |
//! | `03`, `3` | hour on a 12 hour clock |
//! | `04`, `4` | minute |
//! | `05`, `5` | second |
//! | `.999999999`, `.999999`, `.999` | fraction without trailing zeros |
//! | `.000000000`, `.000000`, `.000` | fraction with a fixed width |
//! | `Morning` | part of the day |
//! | `PM`, `pm` | 12 hour marker, full or short |
//! | `MST` | zone name |
//! | `Z070000` .. `Z07` | offset, `Z` for UTC |
//! | `-070000` .. `-07` | offset, `+00` for UTC |
//!
//! Month names are written with their Dari names for values in
//! [`TimeZone::kabul`][crate::TimeZone::kabul].

mod format;
mod parse;


pub use format::FormattedLayout;
pub use parse::parse;

/// RFC 3339, `1403-01-15T20:14:00+03:30`.
pub const RFC3339: &str = "2006-01-02T15:04:05Z07:00";
/// RFC 3339 with nanoseconds when they are not zero, `1403-01-15T20:14:00.5+03:30`.
pub const RFC3339_NANO: &str = "2006-01-02T15:04:05.999999999Z07:00";
pub const DATE_TIME: &str = "2006-01-02 15:04:05";
pub const DATE_ONLY: &str = "2006-01-02";
pub const TIME_ONLY: &str = "15:04:05";
pub const KITCHEN: &str = "3:04PM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum OffsetPrecision {
    Hours,
    Minutes,
    Seconds,
}

/// A layout token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    LongYear,
    ShortYear,
    Hour24,
    LongMonthName,
    ShortMonthName,
    ZeroMonth,
    Month,
    ZeroDay,
    SpaceDay,
    Day,
    LongWeekday,
    ShortWeekday,
    ZeroHour12,
    Hour12,
    ZeroMinute,
    Minute,
    ZeroSecond,
    Second,
    Fraction {
        digits: u8,
        trim: bool,
    },
    DayTime,
    LongAmPm,
    ShortAmPm,
    ZoneName,
    Offset {
        utc_z: bool,
        precision: OffsetPrecision,
        colon: bool,
    },
}

const fn offset(utc_z: bool, precision: OffsetPrecision, colon: bool) -> Token {
    Token::Offset {
        utc_z,
        precision,
        colon,
    }
}

/// Layout tokens in matching priority.
pub(crate) const TOKENS: [(&str, Token); 38] = [
    ("2006", Token::LongYear),
    ("06", Token::ShortYear),
    ("15", Token::Hour24),
    ("January", Token::LongMonthName),
    ("Jan", Token::ShortMonthName),
    ("01", Token::ZeroMonth),
    ("1", Token::Month),
    ("02", Token::ZeroDay),
    ("_2", Token::SpaceDay),
    ("2", Token::Day),
    ("Monday", Token::LongWeekday),
    ("Mon", Token::ShortWeekday),
    ("03", Token::ZeroHour12),
    ("3", Token::Hour12),
    ("04", Token::ZeroMinute),
    ("4", Token::Minute),
    ("05", Token::ZeroSecond),
    ("5", Token::Second),
    (".999999999", Token::Fraction { digits: 9, trim: true }),
    (".999999", Token::Fraction { digits: 6, trim: true }),
    (".999", Token::Fraction { digits: 3, trim: true }),
    (".000000000", Token::Fraction { digits: 9, trim: false }),
    (".000000", Token::Fraction { digits: 6, trim: false }),
    (".000", Token::Fraction { digits: 3, trim: false }),
    ("Morning", Token::DayTime),
    ("PM", Token::LongAmPm),
    ("pm", Token::ShortAmPm),
    ("MST", Token::ZoneName),
    ("Z070000", offset(true, OffsetPrecision::Seconds, false)),
    ("Z0700", offset(true, OffsetPrecision::Minutes, false)),
    ("Z07:00:00", offset(true, OffsetPrecision::Seconds, true)),
    ("Z07:00", offset(true, OffsetPrecision::Minutes, true)),
    ("Z07", offset(true, OffsetPrecision::Hours, false)),
    ("-070000", offset(false, OffsetPrecision::Seconds, false)),
    ("-0700", offset(false, OffsetPrecision::Minutes, false)),
    ("-07:00:00", offset(false, OffsetPrecision::Seconds, true)),
    ("-07:00", offset(false, OffsetPrecision::Minutes, true)),
    ("-07", offset(false, OffsetPrecision::Hours, false)),
];

impl Token {
    /// The name of this token's capture group when parsing.
    pub(crate) fn capture_name(self) -> &'static str {
        use OffsetPrecision::{Hours, Minutes, Seconds};
        match self {
            Self::LongYear => "long_year",
            Self::ShortYear => "short_year",
            Self::Hour24 => "hour24",
            Self::LongMonthName => "long_month_name",
            Self::ShortMonthName => "short_month_name",
            Self::ZeroMonth => "zero_month",
            Self::Month => "month",
            Self::ZeroDay => "zero_day",
            Self::SpaceDay => "space_day",
            Self::Day => "day",
            Self::LongWeekday => "long_weekday",
            Self::ShortWeekday => "short_weekday",
            Self::ZeroHour12 => "zero_hour12",
            Self::Hour12 => "hour12",
            Self::ZeroMinute => "zero_minute",
            Self::Minute => "minute",
            Self::ZeroSecond => "zero_second",
            Self::Second => "second",
            Self::Fraction { digits, trim } => match (digits, trim) {
                (9, true) => "trimmed_fraction9",
                (6, true) => "trimmed_fraction6",
                (_, true) => "trimmed_fraction3",
                (9, false) => "fraction9",
                (6, false) => "fraction6",
                (_, false) => "fraction3",
            },
            Self::DayTime => "day_time",
            Self::LongAmPm => "long_am_pm",
            Self::ShortAmPm => "short_am_pm",
            Self::ZoneName => "zone_name",
            Self::Offset {
                utc_z,
                precision,
                colon,
            } => match (utc_z, precision, colon) {
                (true, Seconds, false) => "z_offset_hms",
                (true, Minutes, false) => "z_offset_hm",
                (true, Seconds, true) => "z_offset_hms_colon",
                (true, Minutes, true) => "z_offset_hm_colon",
                (true, Hours, _) => "z_offset_h",
                (false, Seconds, false) => "offset_hms",
                (false, Minutes, false) => "offset_hm",
                (false, Seconds, true) => "offset_hms_colon",
                (false, Minutes, true) => "offset_hm_colon",
                (false, Hours, _) => "offset_h",
            },
        }
    }
}

/// A piece of a layout: literal text or a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Token(Token),
}

/// Splits a layout into literal text and tokens, in order.
pub(crate) fn tokenize(layout: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut position = 0;
    while let Some(rest) = layout.get(position..).filter(|rest| !rest.is_empty()) {
        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some((text, token)) => {
                if literal_start < position {
                    segments.push(Segment::Literal(&layout[literal_start..position]));
                }
                segments.push(Segment::Token(*token));
                position += text.len();
                literal_start = position;
            }
            None => position += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    if literal_start < layout.len() {
        segments.push(Segment::Literal(&layout[literal_start..]));
    }
    segments
}
