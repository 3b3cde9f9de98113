//! This module implements `Month` and its Persian and Dari names.

use core::{fmt, str::FromStr};

use crate::{error::ErrorMessage, JalaaliError, JalaaliResult};

const NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const SHORT_NAMES: [&str; 12] = [
    "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
];

const DARI_NAMES: [&str; 12] = [
    "حمل",
    "ثور",
    "جوزا",
    "سرطان",
    "اسد",
    "سنبله",
    "میزان",
    "عقرب",
    "قوس",
    "جدی",
    "دلو",
    "حوت",
];

const DARI_SHORT_NAMES: [&str; 12] = [
    "حمل", "ثور", "جوز", "سرط", "اسد", "سنب", "میز", "عقر", "قوس", "جدی", "دلو", "حوت",
];

/// A month of the Jalaali year, starting from `Farvardin = 1`.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    #[default]
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl Month {
    /// Every month in year order.
    pub const ALL: [Month; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    // Dari names of the same months.
    pub const HAMAL: Month = Self::Farvardin;
    pub const SUR: Month = Self::Ordibehesht;
    pub const JAUZA: Month = Self::Khordad;
    pub const SARATAN: Month = Self::Tir;
    pub const ASAD: Month = Self::Mordad;
    pub const SONBOLEH: Month = Self::Shahrivar;
    pub const MIZAN: Month = Self::Mehr;
    pub const AQRAB: Month = Self::Aban;
    pub const QOS: Month = Self::Azar;
    pub const JADY: Month = Self::Dey;
    pub const DOLV: Month = Self::Bahman;
    pub const HUT: Month = Self::Esfand;

    /// Returns the month for an ordinal, clamping it to `1..=12`.
    #[must_use]
    pub fn from_ordinal_clamped(ordinal: i64) -> Self {
        Self::ALL[(ordinal.clamp(1, 12) - 1) as usize]
    }

    /// Returns the month for an ordinal in `1..=12`.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal).checked_sub(1)?).copied()
    }

    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    fn index(self) -> usize {
        usize::from(self.ordinal() - 1)
    }

    /// Returns the Persian name of the month.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Returns the Persian short name of the month.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.index()]
    }

    /// Returns the Dari name of the month.
    #[must_use]
    pub fn dari_name(self) -> &'static str {
        DARI_NAMES[self.index()]
    }

    /// Returns the Dari short name of the month.
    #[must_use]
    pub fn dari_short_name(self) -> &'static str {
        DARI_SHORT_NAMES[self.index()]
    }

    /// Looks a month up by any of its Persian or Dari, full or short names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [NAMES, SHORT_NAMES, DARI_NAMES, DARI_SHORT_NAMES]
            .iter()
            .find_map(|table| table.iter().position(|n| *n == name))
            .map(|index| Self::ALL[index])
    }

    /// Every full name, Persian first and Dari second.
    pub(crate) fn all_names() -> impl Iterator<Item = &'static str> {
        NAMES.into_iter().chain(DARI_NAMES)
    }

    /// Every short name, Persian first and Dari second.
    pub(crate) fn all_short_names() -> impl Iterator<Item = &'static str> {
        SHORT_NAMES.into_iter().chain(DARI_SHORT_NAMES)
    }
}

impl From<Month> for i64 {
    fn from(value: Month) -> Self {
        i64::from(value.ordinal())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = JalaaliError;

    fn from_str(s: &str) -> JalaaliResult<Self> {
        Self::from_name(s).ok_or(
            JalaaliError::syntax().with_enum(ErrorMessage::String("unknown month name")),
        )
    }
}
