//! Reading a `JalaaliDateTime` with a layout.
//!
//! The layout is compiled into an anchored regular expression with one
//! named group per token, so the input has to match the whole layout.

use core::str::FromStr;
use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::{
    error::ErrorMessage, utils, AmPm, JalaaliDateTime, JalaaliError, JalaaliResult, Month, Sign,
    TimeZone, UtcOffset, Weekday,
};

use super::{tokenize, OffsetPrecision, Segment, Token, RFC3339_NANO, TOKENS};

// ==== Public API ====

/// Parses `input` with `layout`, see the [`layout`][crate::layout] module.
///
/// Fields missing from the layout take their defaults: year `0`, month and
/// day `1`, a midnight clock and the UTC zone. A two digit year is read as
/// `14YY`.
///
/// ```rust
/// use jalaali_rs::{layout, Month};
///
/// let dt = layout::parse("2006/01/02 15:04 -07:00", "1403/01/15 20:14 +03:30").unwrap();
/// assert_eq!(dt.date(), (1403, Month::Farvardin, 15));
/// assert_eq!(dt.zone().name(), "+03:30");
/// ```
pub fn parse(layout: &str, input: &str) -> JalaaliResult<JalaaliDateTime> {
    if layout.trim().is_empty() {
        return Err(failure(ErrorMessage::LayoutEmpty, layout));
    }
    if input.trim().is_empty() {
        return Err(failure(ErrorMessage::InputEmpty, layout));
    }

    let regex = Regex::new(&expression(layout))
        .map_err(|_| failure(ErrorMessage::LayoutInvalid, layout))?;
    let captures = regex
        .captures(input)
        .ok_or_else(|| failure(ErrorMessage::InputMismatch, layout))?;

    let fields = ParsedFields::from_captures(&captures);
    if !fields.is_valid() {
        return Err(failure(ErrorMessage::InvalidDate, layout));
    }
    Ok(fields.into_datetime())
}

impl JalaaliDateTime {
    /// Parses `input` with `layout`. This is [`parse`][crate::layout::parse].
    pub fn parse(layout: &str, input: &str) -> JalaaliResult<Self> {
        parse(layout, input)
    }
}

/// Parses RFC 3339 text, with or without a fraction.
impl FromStr for JalaaliDateTime {
    type Err = JalaaliError;

    fn from_str(s: &str) -> JalaaliResult<Self> {
        parse(RFC3339_NANO, s)
    }
}

// ==== Expression ====

fn expression(layout: &str) -> String {
    let mut pattern = String::from("^");
    for segment in tokenize(layout) {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Token(Token::Fraction { digits, trim }) => {
                let name = Token::Fraction { digits, trim }.capture_name();
                let repeat = if trim {
                    format!("1,{digits}")
                } else {
                    digits.to_string()
                };
                pattern.push_str(&format!(r"(?P<{name}>\.[0-9]{{{repeat}}})?"));
            }
            Segment::Token(token) => {
                pattern.push_str(&format!(
                    "(?P<{}>{})",
                    token.capture_name(),
                    token_pattern(token)
                ));
            }
        }
    }
    pattern.push('$');
    pattern
}

fn alternation(names: impl Iterator<Item = &'static str>) -> String {
    names
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join("|")
}

fn token_pattern(token: Token) -> Cow<'static, str> {
    match token {
        Token::LongYear => "-?[0-9]{4}".into(),
        Token::ShortYear
        | Token::Hour24
        | Token::ZeroMonth
        | Token::ZeroDay
        | Token::ZeroHour12
        | Token::ZeroMinute
        | Token::ZeroSecond => "[0-9]{2}".into(),
        Token::Month | Token::Day | Token::Hour12 | Token::Minute | Token::Second => {
            "[0-9]{1,2}".into()
        }
        Token::SpaceDay => r"\s[0-9]|[0-9]{2}".into(),
        Token::LongMonthName => alternation(Month::all_names()).into(),
        Token::ShortMonthName => alternation(Month::all_short_names()).into(),
        Token::LongWeekday => alternation(Weekday::all_names()).into(),
        Token::ShortWeekday => alternation(Weekday::all_short_names()).into(),
        Token::DayTime => alternation(crate::DayTime::all_names()).into(),
        Token::LongAmPm => alternation(AmPm::all_names()).into(),
        Token::ShortAmPm => alternation(AmPm::all_short_names()).into(),
        Token::ZoneName => "[A-Za-z/_]+|[-+][0-9]{4}".into(),
        Token::Fraction { digits, .. } => format!(r"\.[0-9]{{1,{digits}}}").into(),
        Token::Offset {
            utc_z,
            precision,
            colon,
        } => {
            let body = match (precision, colon) {
                (OffsetPrecision::Hours, _) => "[0-9]{2}",
                (OffsetPrecision::Minutes, false) => "[0-9]{4}",
                (OffsetPrecision::Seconds, false) => "[0-9]{6}",
                (OffsetPrecision::Minutes, true) => "[0-9]{2}:[0-9]{2}",
                (OffsetPrecision::Seconds, true) => "[0-9]{2}:[0-9]{2}:[0-9]{2}",
            };
            if utc_z {
                format!("Z|[-+]{body}").into()
            } else {
                format!("[-+]{body}").into()
            }
        }
    }
}

// ==== Interpretation ====

/// Field values read from the captures, before validation.
#[derive(Debug)]
struct ParsedFields {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: i64,
    zone: TimeZone,
}

impl ParsedFields {
    fn from_captures(captures: &Captures<'_>) -> Self {
        let text = |token: Token| captures.name(token.capture_name()).map(|m| m.as_str());
        let number = |token: Token| text(token).and_then(|s| s.trim().parse::<i64>().ok());

        let year = number(Token::LongYear)
            .or_else(|| number(Token::ShortYear).map(|year| 1400 + year))
            .unwrap_or(0);

        let month = number(Token::ZeroMonth)
            .or_else(|| number(Token::Month))
            .or_else(|| {
                text(Token::LongMonthName)
                    .or_else(|| text(Token::ShortMonthName))
                    .and_then(Month::from_name)
                    .map(i64::from)
            })
            .unwrap_or(1);

        let day = number(Token::ZeroDay)
            .or_else(|| number(Token::SpaceDay))
            .or_else(|| number(Token::Day))
            .unwrap_or(1);

        let is_pm = text(Token::LongAmPm)
            .or_else(|| text(Token::ShortAmPm))
            .and_then(AmPm::from_name)
            == Some(AmPm::Pm);
        let hour = match number(Token::Hour24) {
            Some(hour) => hour,
            None => match number(Token::ZeroHour12).or_else(|| number(Token::Hour12)) {
                Some(hour) if is_pm && hour < 12 => hour + 12,
                Some(hour) => hour,
                None => 0,
            },
        };

        let minute = number(Token::ZeroMinute)
            .or_else(|| number(Token::Minute))
            .unwrap_or(0);
        let second = number(Token::ZeroSecond)
            .or_else(|| number(Token::Second))
            .unwrap_or(0);

        let nanosecond = TOKENS
            .iter()
            .filter(|(_, token)| matches!(token, Token::Fraction { .. }))
            .find_map(|(_, token)| text(*token))
            .map_or(0, parse_fraction);

        let zone = TOKENS
            .iter()
            .filter(|(_, token)| matches!(token, Token::Offset { .. }))
            .find_map(|(_, token)| text(*token))
            .map(|offset| parse_offset(offset).unwrap_or_else(TimeZone::utc))
            .or_else(|| text(Token::ZoneName).and_then(parse_zone_name))
            .unwrap_or_else(TimeZone::utc);

        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            zone,
        }
    }

    fn is_valid(&self) -> bool {
        if !(1..=12).contains(&self.month) {
            return false;
        }
        let days = utils::days_in_month(utils::saturate_year(self.year), self.month as u8);
        (1..=i64::from(days)).contains(&self.day)
            && (0..=23).contains(&self.hour)
            && (0..=59).contains(&self.minute)
            && (0..=59).contains(&self.second)
    }

    fn into_datetime(self) -> JalaaliDateTime {
        JalaaliDateTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
            Some(self.zone),
        )
    }
}

/// Reads `.d`, `.dd`, .. as nanoseconds.
fn parse_fraction(fraction: &str) -> i64 {
    let digits = fraction.trim_start_matches('.');
    format!("{digits:0<9}").parse().unwrap_or(0)
}

/// Reads `Z`, `±HH`, `±HHMM`, `±HHMMSS` and their colon separated forms.
///
/// `Z` is UTC. Other offsets become a zone named `±HH:MM`, with `:SS`
/// appended only when the seconds are not zero.
fn parse_offset(offset: &str) -> Option<TimeZone> {
    if offset == "Z" {
        return Some(TimeZone::utc());
    }
    let (sign, rest) = match offset.as_bytes().first()? {
        b'+' => (Sign::Positive, &offset[1..]),
        b'-' => (Sign::Negative, &offset[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !matches!(digits.len(), 2 | 4 | 6) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let field = |start: usize| {
        digits
            .get(start..start + 2)
            .and_then(|s| s.parse::<u8>().ok())
            .unwrap_or(0)
    };
    let (hour, minute, second) = (field(0), field(2), field(4));

    let sign_char = if sign == Sign::Negative { '-' } else { '+' };
    let mut name = format!("{sign_char}{hour:02}:{minute:02}");
    if second > 0 {
        name.push_str(&format!(":{second:02}"));
    }
    Some(TimeZone::fixed(
        &name,
        UtcOffset::from_components(sign, hour, minute, second),
    ))
}

/// Resolves a captured zone name when no offset was captured.
fn parse_zone_name(name: &str) -> Option<TimeZone> {
    TimeZone::from_known_identifier(name).or_else(|| parse_offset(name))
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
fn failure(message: ErrorMessage, layout: &str) -> JalaaliError {
    let error = match message {
        ErrorMessage::InvalidDate => JalaaliError::range(),
        _ => JalaaliError::syntax(),
    }
    .with_enum(message);
    #[cfg(feature = "log")]
    log::debug!("parsing with layout {layout:?} failed: {}", message.as_str());
    error
}
