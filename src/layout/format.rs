//! Writing a `JalaaliDateTime` with a layout.

use core::fmt::Write;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{JalaaliDateTime, Sign, UtcOffset};

use super::{tokenize, OffsetPrecision, Segment, Token, RFC3339, RFC3339_NANO};

/// A `JalaaliDateTime` paired with the layout it is written with.
#[derive(Debug)]
pub struct FormattedLayout<'a> {
    datetime: &'a JalaaliDateTime,
    layout: &'a str,
}

impl Writeable for FormattedLayout<'_> {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        // RFC 3339 layouts skip the token scan.
        if self.layout == RFC3339 || self.layout == RFC3339_NANO {
            return write_rfc3339(self.datetime, self.layout == RFC3339_NANO, sink);
        }
        for segment in tokenize(self.layout) {
            match segment {
                Segment::Literal(text) => sink.write_str(text)?,
                Segment::Token(token) => write_token(self.datetime, token, sink)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::at_least(self.layout.len())
    }
}

impl_display_with_writeable!(FormattedLayout<'_>);

impl JalaaliDateTime {
    /// Returns a [`Writeable`] view of this value written with `layout`.
    #[must_use]
    pub fn format_layout<'a>(&'a self, layout: &'a str) -> FormattedLayout<'a> {
        FormattedLayout {
            datetime: self,
            layout,
        }
    }

    /// Writes this value with `layout`, see the [`layout`][crate::layout] module.
    ///
    /// ```rust
    /// use jalaali_rs::{JalaaliDateTime, TimeZone};
    ///
    /// let dt = JalaaliDateTime::new(1403, 6, 3, 0, 0, 0, 0, Some(TimeZone::tehran()));
    /// assert_eq!(dt.format("Monday 2 January 2006"), "شنبه 3 شهریور 1403");
    /// ```
    #[must_use]
    pub fn format(&self, layout: &str) -> String {
        self.format_layout(layout).write_to_string().into_owned()
    }
}

/// Writes `RFC3339` or, with `nano`, `RFC3339_NANO`.
impl Writeable for JalaaliDateTime {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_rfc3339(self, false, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::between(20, 25)
    }
}

impl_display_with_writeable!(JalaaliDateTime);

fn write_rfc3339<W: Write + ?Sized>(
    datetime: &JalaaliDateTime,
    nano: bool,
    sink: &mut W,
) -> core::fmt::Result {
    write_year(datetime.year(), sink)?;
    write!(
        sink,
        "-{:02}-{:02}T{:02}:{:02}:{:02}",
        datetime.month().ordinal(),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )?;
    if nano && datetime.nanosecond() > 0 {
        sink.write_char('.')?;
        let (digits, _) = u32_to_digits(datetime.nanosecond());
        write_digit_slice_to_precision(digits, 0, 9, sink)?;
    }
    write_offset(
        datetime.zone().offset(),
        true,
        OffsetPrecision::Minutes,
        true,
        sink,
    )
}

fn write_token<W: Write + ?Sized>(
    datetime: &JalaaliDateTime,
    token: Token,
    sink: &mut W,
) -> core::fmt::Result {
    let dari = datetime.zone().is_kabul();
    match token {
        Token::LongYear => write_year(datetime.year(), sink),
        Token::ShortYear => write_padded_u8(datetime.year().rem_euclid(100) as u8, sink),
        Token::Hour24 => write_padded_u8(datetime.hour(), sink),
        Token::LongMonthName if dari => sink.write_str(datetime.month().dari_name()),
        Token::LongMonthName => sink.write_str(datetime.month().name()),
        Token::ShortMonthName if dari => sink.write_str(datetime.month().dari_short_name()),
        Token::ShortMonthName => sink.write_str(datetime.month().short_name()),
        Token::ZeroMonth => write_padded_u8(datetime.month().ordinal(), sink),
        Token::Month => datetime.month().ordinal().write_to(sink),
        Token::ZeroDay => write_padded_u8(datetime.day(), sink),
        Token::SpaceDay => write!(sink, "{:>2}", datetime.day()),
        Token::Day => datetime.day().write_to(sink),
        Token::LongWeekday => sink.write_str(datetime.weekday().name()),
        Token::ShortWeekday => sink.write_str(datetime.weekday().short_name()),
        Token::ZeroHour12 => write_padded_u8(datetime.hour12(), sink),
        Token::Hour12 => datetime.hour12().write_to(sink),
        Token::ZeroMinute => write_padded_u8(datetime.minute(), sink),
        Token::Minute => datetime.minute().write_to(sink),
        Token::ZeroSecond => write_padded_u8(datetime.second(), sink),
        Token::Second => datetime.second().write_to(sink),
        Token::Fraction { digits, trim } => {
            write_fraction(datetime.nanosecond(), usize::from(digits), trim, sink)
        }
        Token::DayTime => sink.write_str(datetime.day_time().name()),
        Token::LongAmPm => sink.write_str(datetime.am_pm().name()),
        Token::ShortAmPm => sink.write_str(datetime.am_pm().short_name()),
        Token::ZoneName => {
            let name = datetime.zone().name();
            if name.is_empty() || name.eq_ignore_ascii_case("local") {
                write_offset(
                    datetime.zone().offset(),
                    false,
                    OffsetPrecision::Minutes,
                    false,
                    sink,
                )
            } else {
                sink.write_str(name)
            }
        }
        Token::Offset {
            utc_z,
            precision,
            colon,
        } => write_offset(datetime.zone().offset(), utc_z, precision, colon, sink),
    }
}

/// Writes a sign for negative years, then at least four digits.
fn write_year<W: Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if year < 0 {
        sink.write_char('-')?;
    }
    write!(sink, "{:04}", year.unsigned_abs())
}

/// Writes the first `length` fraction digits, or nothing when they are all zero.
fn write_fraction<W: Write + ?Sized>(
    nanosecond: u32,
    length: usize,
    trim: bool,
    sink: &mut W,
) -> core::fmt::Result {
    let (digits, _) = u32_to_digits(nanosecond.min(999_999_999));
    let Some(last) = digits[..length.min(9)].iter().rposition(|d| *d != 0) else {
        return Ok(());
    };
    let precision = if trim { last + 1 } else { length };
    sink.write_char('.')?;
    write_digit_slice_to_precision(digits, 0, precision, sink)
}

fn write_offset<W: Write + ?Sized>(
    offset: UtcOffset,
    utc_z: bool,
    precision: OffsetPrecision,
    colon: bool,
    sink: &mut W,
) -> core::fmt::Result {
    if utc_z && offset.is_zero() {
        return sink.write_char('Z');
    }
    let (sign, hour, minute, second) = offset.components();
    match sign {
        Sign::Negative => sink.write_char('-')?,
        _ => sink.write_char('+')?,
    }
    write!(sink, "{hour:02}")?;
    for (field, field_precision) in [
        (minute, OffsetPrecision::Minutes),
        (second, OffsetPrecision::Seconds),
    ] {
        if precision < field_precision {
            break;
        }
        if colon {
            sink.write_char(':')?;
        }
        write_padded_u8(field, sink)?;
    }
    Ok(())
}

fn write_padded_u8<W: Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Splits a nanosecond value into its nine fraction digits.
fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

fn write_digit_slice_to_precision<W: Write + ?Sized>(
    digits: [u8; 9],
    base: usize,
    precision: usize,
    sink: &mut W,
) -> core::fmt::Result {
    for digit in digits.iter().take(precision).skip(base) {
        digit.write_to(sink)?;
    }
    Ok(())
}
