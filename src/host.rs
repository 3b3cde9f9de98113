//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::{time::EpochNanoseconds, JalaaliResult, TimeZone};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds>;
}

/// The `HostTimeZone` trait defines the host's time zone.
pub trait HostTimeZone {
    fn get_host_time_zone(&self) -> JalaaliResult<TimeZone>;
}

/// `HostHooks` marks whether a trait implements the required host hooks with some
/// system methods.
pub trait HostHooks: HostClock + HostTimeZone {
    fn get_system_epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds> {
        self.get_host_epoch_nanoseconds()
    }

    fn get_system_time_zone(&self) -> JalaaliResult<TimeZone> {
        self.get_host_time_zone()
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::from(0))
    }
}

impl HostTimeZone for () {
    fn get_host_time_zone(&self) -> JalaaliResult<TimeZone> {
        Ok(TimeZone::utc())
    }
}

impl HostHooks for () {}
