//! An implementation of `TimeDuration` and it's methods.

use core::ops::{Add, Neg, Sub};

use crate::{Sign, NS_PER_SECOND};

const NS_PER_MINUTE: i128 = 60 * NS_PER_SECOND;
const NS_PER_HOUR: i128 = 60 * NS_PER_MINUTE;

/// `TimeDuration` is a signed span of clock time stored as nanoseconds.
///
/// It is the duration type accepted by the civil-delegated arithmetic,
/// `JalaaliDateTime::add` and `CivilDateTime::checked_add`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDuration(pub(crate) i128);

impl TimeDuration {
    /// A zero length duration.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i128) -> Self {
        Self(nanoseconds)
    }

    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds as i128 * NS_PER_SECOND)
    }

    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes as i128 * NS_PER_MINUTE)
    }

    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours as i128 * NS_PER_HOUR)
    }

    /// Creates a `TimeDuration` from clock components which may have mixed signs.
    #[must_use]
    pub const fn from_clock(hours: i64, minutes: i64, seconds: i64, nanoseconds: i64) -> Self {
        Self(
            hours as i128 * NS_PER_HOUR
                + minutes as i128 * NS_PER_MINUTE
                + seconds as i128 * NS_PER_SECOND
                + nanoseconds as i128,
        )
    }

    /// Returns the total nanoseconds of this duration.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i128 {
        self.0
    }

    /// Returns the whole seconds of this duration, truncated towards zero.
    #[inline]
    #[must_use]
    pub const fn whole_seconds(&self) -> i128 {
        self.0 / NS_PER_SECOND
    }

    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.0.signum() as i8)
    }

    #[inline]
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for TimeDuration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TimeDuration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for TimeDuration {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeDuration;
    use crate::Sign;

    #[test]
    fn clock_components_sum() {
        let d = TimeDuration::from_clock(1, 30, 0, 0);
        assert_eq!(d, TimeDuration::from_minutes(90));
        assert_eq!(d.whole_seconds(), 5400);

        let mixed = TimeDuration::from_clock(1, -30, 0, 0);
        assert_eq!(mixed, TimeDuration::from_minutes(30));

        let negative = -TimeDuration::from_hours(2) + TimeDuration::from_seconds(1);
        assert_eq!(negative.sign(), Sign::Negative);
        assert_eq!(negative.abs().whole_seconds(), 7199);
    }
}
