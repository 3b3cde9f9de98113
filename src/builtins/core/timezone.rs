//! This module implements the fixed offset `TimeZone` and `UtcOffset`.

use std::sync::Arc;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::Sign;

const TEHRAN_OFFSET_SECONDS: i32 = 12_600;
const KABUL_OFFSET_SECONDS: i32 = 16_200;

/// A fixed offset from UTC, in seconds east of UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self(seconds)
    }

    /// Creates an offset from a sign and unsigned clock components.
    #[must_use]
    pub fn from_components(sign: Sign, hour: u8, minute: u8, second: u8) -> Self {
        let magnitude = i32::from(hour) * 3600 + i32::from(minute) * 60 + i32::from(second);
        Self(i32::from(sign.as_sign_multiplier()) * magnitude)
    }

    /// Returns the offset in seconds east of UTC.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the sign with the absolute hour, minute and second of this offset.
    #[must_use]
    pub fn components(&self) -> (Sign, u32, u8, u8) {
        let sign = if self.0 < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = self.0.unsigned_abs();
        (
            sign,
            magnitude / 3600,
            ((magnitude % 3600) / 60) as u8,
            (magnitude % 60) as u8,
        )
    }
}

/// Writes `±HH:MM`, with a trailing `:SS` only when seconds are present.
impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let (sign, hour, minute, second) = self.components();
        match sign {
            Sign::Negative => sink.write_char('-')?,
            _ => sink.write_char('+')?,
        }
        if hour < 10 {
            sink.write_char('0')?;
        }
        hour.write_to(sink)?;
        sink.write_char(':')?;
        write_padded(minute, sink)?;
        if second > 0 {
            sink.write_char(':')?;
            write_padded(second, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::between(6, 12)
    }
}

impl_display_with_writeable!(UtcOffset);

fn write_padded<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct ZoneRecord {
    name: Box<str>,
    offset: UtcOffset,
}

/// A named, fixed offset time zone.
///
/// `TimeZone` is a shared handle: cloning it is cheap and every clone
/// refers to the same record. Two zones are equal when both their names
/// and offsets are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone(Arc<ZoneRecord>);

impl TimeZone {
    /// Creates a zone with the given display name and offset.
    #[must_use]
    pub fn fixed(name: &str, offset: UtcOffset) -> Self {
        Self(Arc::new(ZoneRecord {
            name: name.into(),
            offset,
        }))
    }

    /// Creates a zone named after its normalized offset, for example `+03:30`.
    #[must_use]
    pub fn from_offset(offset: UtcOffset) -> Self {
        Self::fixed(&offset.write_to_string(), offset)
    }

    /// The `UTC` zone.
    #[must_use]
    pub fn utc() -> Self {
        Self::fixed("UTC", UtcOffset::default())
    }

    /// Tehran's fixed zone: `Asia/Tehran`, UTC+03:30.
    #[must_use]
    pub fn tehran() -> Self {
        Self::fixed("Asia/Tehran", UtcOffset::from_seconds(TEHRAN_OFFSET_SECONDS))
    }

    /// Kabul's fixed zone: `Asia/Kabul`, UTC+04:30.
    ///
    /// Values in this zone format month names with the Dari names.
    #[must_use]
    pub fn kabul() -> Self {
        Self::fixed("Asia/Kabul", UtcOffset::from_seconds(KABUL_OFFSET_SECONDS))
    }

    /// Returns the host's zone when the `sys` feature is enabled, otherwise UTC.
    #[must_use]
    pub fn local() -> Self {
        #[cfg(feature = "sys")]
        {
            crate::sys::get_system_timezone()
        }
        #[cfg(not(feature = "sys"))]
        {
            Self::utc()
        }
    }

    /// Resolves one of the fixed zones this crate knows by identifier.
    #[must_use]
    pub fn from_known_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "UTC" | "Etc/UTC" | "GMT" | "Etc/GMT" => Some(Self::utc()),
            "Asia/Tehran" | "Iran" => Some(Self::tehran()),
            "Asia/Kabul" => Some(Self::kabul()),
            _ => None,
        }
    }

    /// Returns the zone's display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.0.offset
    }

    /// Returns whether this zone is Kabul's zone.
    #[inline]
    pub(crate) fn is_kabul(&self) -> bool {
        self.0.offset.seconds() == KABUL_OFFSET_SECONDS && &*self.0.name == "Asia/Kabul"
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(value: UtcOffset) -> Self {
        Self::from_offset(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeZone, UtcOffset};
    use crate::Sign;

    #[test]
    fn offset_identifier() {
        assert_eq!(UtcOffset::from_seconds(12_600).to_string(), "+03:30");
        assert_eq!(UtcOffset::from_seconds(-12_600).to_string(), "-03:30");
        assert_eq!(UtcOffset::default().to_string(), "+00:00");
        assert_eq!(
            UtcOffset::from_components(Sign::Positive, 3, 30, 15).to_string(),
            "+03:30:15"
        );
        assert_eq!(
            UtcOffset::from_components(Sign::Negative, 1, 0, 0).seconds(),
            -3600
        );
    }

    #[test]
    fn city_zones() {
        let tehran = TimeZone::tehran();
        assert_eq!(tehran.name(), "Asia/Tehran");
        assert_eq!(tehran.offset().seconds(), 12_600);
        assert!(!tehran.is_kabul());

        let kabul = TimeZone::kabul();
        assert!(kabul.is_kabul());
        assert_eq!(kabul, kabul.clone());
        assert_ne!(kabul, TimeZone::fixed("Kabul", kabul.offset()));

        assert_eq!(TimeZone::from_offset(tehran.offset()).name(), "+03:30");
        assert_eq!(TimeZone::from_known_identifier("Etc/UTC"), Some(TimeZone::utc()));
        assert_eq!(TimeZone::from_known_identifier("Europe/Paris"), None);
    }
}
