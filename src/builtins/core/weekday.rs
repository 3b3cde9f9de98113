//! This module implements `Weekday`, the Saturday based day of the week.

use core::fmt;

const NAMES: [&str; 7] = [
    "شنبه",
    "یک\u{200c}شنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

const SHORT_NAMES: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// A day of the week starting from `Shanbeh = 0` (Saturday).
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    #[default]
    Shanbeh = 0,
    Yekshanbeh,
    Doshanbeh,
    Seshanbeh,
    Charshanbeh,
    Panjshanbeh,
    Jomeh,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Self::Shanbeh,
        Self::Yekshanbeh,
        Self::Doshanbeh,
        Self::Seshanbeh,
        Self::Charshanbeh,
        Self::Panjshanbeh,
        Self::Jomeh,
    ];

    /// Returns the weekday for a Saturday based index, clamping it to `0..=6`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index.min(6))]
    }

    /// The Saturday based index of this weekday.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Converts from the Sunday based numbering, `0` being Sunday.
    #[must_use]
    pub fn from_sunday_based(day: u8) -> Self {
        Self::from_index((day % 7 + 1) % 7)
    }

    /// Returns the Sunday based number of this weekday, `0` being Sunday.
    #[must_use]
    pub const fn to_sunday_based(self) -> u8 {
        (self as u8 + 6) % 7
    }

    /// Returns the Persian name of the weekday.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.index())]
    }

    /// Returns the Persian single letter name of the weekday.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[usize::from(self.index())]
    }

    pub(crate) fn all_names() -> impl Iterator<Item = &'static str> {
        NAMES.into_iter()
    }

    pub(crate) fn all_short_names() -> impl Iterator<Item = &'static str> {
        SHORT_NAMES.into_iter()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Weekday;

    #[test]
    fn sunday_based_mapping() {
        assert_eq!(Weekday::from_sunday_based(6), Weekday::Shanbeh);
        assert_eq!(Weekday::from_sunday_based(0), Weekday::Yekshanbeh);
        assert_eq!(Weekday::from_sunday_based(5), Weekday::Jomeh);
        for day in 0..7 {
            assert_eq!(Weekday::from_sunday_based(day).to_sunday_based(), day);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Shanbeh.to_string(), "شنبه");
        assert_eq!(Weekday::Yekshanbeh.name(), "یک\u{200c}شنبه");
        assert_eq!(Weekday::Jomeh.short_name(), "ج");
        assert_eq!(Weekday::from_index(9), Weekday::Jomeh);
    }
}
