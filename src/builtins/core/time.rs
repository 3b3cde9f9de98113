//! The 12 hour marker `AmPm` and the `DayTime` parts of the day.

use core::fmt;

const AM_PM_NAMES: [&str; 2] = ["قبل از ظهر", "بعد از ظهر"];
const AM_PM_SHORT_NAMES: [&str; 2] = ["ق.ظ", "ب.ظ"];

const DAY_TIME_NAMES: [&str; 8] = [
    "نیمه\u{200c}شب",
    "سحر",
    "صبح",
    "قبل از ظهر",
    "ظهر",
    "بعد از ظهر",
    "عصر",
    "شب",
];

/// The 12 hour clock marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmPm {
    #[default]
    Am = 0,
    Pm,
}

impl AmPm {
    /// Returns the Persian name of the marker.
    #[must_use]
    pub fn name(self) -> &'static str {
        AM_PM_NAMES[self as usize]
    }

    /// Returns the Persian abbreviation of the marker.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        AM_PM_SHORT_NAMES[self as usize]
    }

    /// Looks a marker up by its full or abbreviated name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "قبل از ظهر" | "ق.ظ" => Some(Self::Am),
            "بعد از ظهر" | "ب.ظ" => Some(Self::Pm),
            _ => None,
        }
    }

    pub(crate) fn all_names() -> impl Iterator<Item = &'static str> {
        AM_PM_NAMES.into_iter()
    }

    pub(crate) fn all_short_names() -> impl Iterator<Item = &'static str> {
        AM_PM_SHORT_NAMES.into_iter()
    }
}

impl fmt::Display for AmPm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A part of the day, in spans of three hours starting at midnight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayTime {
    #[default]
    Midnight = 0,
    Dawn,
    Morning,
    BeforeNoon,
    Noon,
    AfterNoon,
    Evening,
    Night,
}

impl DayTime {
    const ALL: [DayTime; 8] = [
        Self::Midnight,
        Self::Dawn,
        Self::Morning,
        Self::BeforeNoon,
        Self::Noon,
        Self::AfterNoon,
        Self::Evening,
        Self::Night,
    ];

    /// Returns the part of the day `hour` falls in.
    #[must_use]
    pub fn from_hour(hour: u8) -> Self {
        Self::ALL[usize::from((hour / 3).min(7))]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        DAY_TIME_NAMES[self as usize]
    }

    pub(crate) fn all_names() -> impl Iterator<Item = &'static str> {
        DAY_TIME_NAMES.into_iter()
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{AmPm, DayTime};

    #[test]
    fn day_time_spans() {
        assert_eq!(DayTime::from_hour(0), DayTime::Midnight);
        assert_eq!(DayTime::from_hour(2), DayTime::Midnight);
        assert_eq!(DayTime::from_hour(12), DayTime::Noon);
        assert_eq!(DayTime::from_hour(14), DayTime::Noon);
        assert_eq!(DayTime::from_hour(15).to_string(), "بعد از ظهر");
        assert_eq!(DayTime::from_hour(23), DayTime::Night);
    }

    #[test]
    fn am_pm_names() {
        assert_eq!(AmPm::Pm.to_string(), "بعد از ظهر");
        assert_eq!(AmPm::Am.short_name(), "ق.ظ");
        assert_eq!(AmPm::from_name("ب.ظ"), Some(AmPm::Pm));
        assert_eq!(AmPm::from_name("PM"), None);
    }
}
