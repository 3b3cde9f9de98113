use num_traits::ToPrimitive;

use crate::{error::ErrorMessage, JalaaliError, JalaaliResult, NS_PER_SECOND};

/// Nanoseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    /// Creates an `EpochNanoseconds` from seconds and nanoseconds since the epoch.
    ///
    /// `nanoseconds` may be outside `0..1_000_000_000` and is balanced into seconds.
    pub fn from_parts(seconds: i64, nanoseconds: i64) -> Self {
        Self(i128::from(seconds) * NS_PER_SECOND + i128::from(nanoseconds))
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the whole seconds, rounded towards negative infinity.
    pub fn seconds(&self) -> JalaaliResult<i64> {
        self.0
            .div_euclid(NS_PER_SECOND)
            .to_i64()
            .ok_or(JalaaliError::range().with_enum(ErrorMessage::InstantOutOfRange))
    }

    /// Returns the nanoseconds since the epoch as an `i64`.
    pub fn nanoseconds(&self) -> JalaaliResult<i64> {
        self.0
            .to_i64()
            .ok_or(JalaaliError::range().with_enum(ErrorMessage::InstantOutOfRange))
    }

    pub(crate) fn checked_add(&self, nanos: i128) -> JalaaliResult<Self> {
        self.0
            .checked_add(nanos)
            .map(Self)
            .ok_or(JalaaliError::range().with_enum(ErrorMessage::InstantOutOfRange))
    }
}
