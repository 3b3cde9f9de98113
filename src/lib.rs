//! The `jalaali_rs` crate implements a Jalaali (Solar Hijri) date-time
//! value with conversions to and from the civil calendar, arithmetic, and
//! layout based formatting and parsing.
//!
//! ```rust
//! use jalaali_rs::{JalaaliDateTime, Month, TimeZone};
//!
//! let nowruz = JalaaliDateTime::new(1403, Month::Farvardin, 1, 0, 0, 0, 0, Some(TimeZone::tehran()));
//! let civil = nowruz.to_civil();
//! assert_eq!((civil.year(), civil.month(), civil.day()), (2024, 3, 20));
//!
//! assert_eq!(nowruz.format("Monday 02 January 2006"), "چهارشنبه 01 فروردین 1403");
//! assert_eq!(nowruz.to_string(), "1403-01-01T00:00:00+03:30");
//! ```
//!
//! Layouts use the reference time `2006-01-02 15:04:05.999999999 -0700 MST`:
//! every recognized fragment of the reference is a token that is replaced
//! by the matching field, and everything else is copied as is. The same
//! layouts drive [`JalaaliDateTime::parse`].
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in benchmarks.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,

    // Add temporarily - Needs addressing
    clippy::missing_panics_doc,
)]

pub mod civil;
pub mod error;
pub mod host;
pub mod layout;

#[cfg(feature = "sys")]
pub mod sys;

mod builtins;
mod epoch_nanoseconds;

#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::JalaaliError;

/// The `jalaali_rs` result type
pub type JalaaliResult<T> = Result<T, JalaaliError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::core::{
    AmPm, DayTime, JalaaliDateTime, Month, Now, TimeDuration, TimeZone, UtcOffset, Weekday,
};

pub use crate::civil::{CivilDate, CivilDateTime, CivilTime};

pub use crate::utils::{
    days_in_month, days_in_year, from_day_number, is_after_reform, is_leap_year, to_day_number,
    CalendarKind, GREGORIAN_REFORM_DAY,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait JalaaliUnwrap {
    type Output;

    /// `jalaali_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn jalaali_unwrap(self) -> JalaaliResult<Self::Output>;
}

impl<T> JalaaliUnwrap for Option<T> {
    type Output = T;

    fn jalaali_unwrap(self) -> JalaaliResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(JalaaliError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! jalaali_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err(JalaaliError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err(JalaaliError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Coerces the current `Sign` to be either negative or positive.
    pub(crate) fn as_sign_multiplier(&self) -> i8 {
        if matches!(self, Self::Zero) {
            return 1;
        }
        *self as i8
    }
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i128 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i128 = 86_400 * NS_PER_SECOND;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
