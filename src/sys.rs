use crate::builtins::core::Now;
use crate::host::HostClock;
use crate::host::HostHooks;
use crate::host::HostTimeZone;
use crate::JalaaliResult;

use crate::time::EpochNanoseconds;
use crate::JalaaliError;
use crate::TimeZone;
use web_time::{SystemTime, UNIX_EPOCH};

/// The entry point for reading the current time of the host system.
pub struct Jalaali;

impl Jalaali {
    /// Get a `Now` object with a [`LocalHostSystem`], which
    /// will use the host system's time zone as a fallback.
    pub fn local_now() -> Now<LocalHostSystem> {
        Now::new(LocalHostSystem)
    }
}

/// A local host system implementation that will return the current time
/// with the system time zone as a fallback.
///
/// This implementation is backed by [`web_time::SystemTime`] and [`iana_time_zone`]
pub struct LocalHostSystem;

impl HostHooks for LocalHostSystem {}

impl HostClock for LocalHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl HostTimeZone for LocalHostSystem {
    fn get_host_time_zone(&self) -> JalaaliResult<TimeZone> {
        Ok(get_system_timezone())
    }
}

/// Returns the host's zone, mapped onto the fixed zones this crate knows.
///
/// Unknown identifiers, and hosts where the identifier cannot be read, fall back to UTC.
#[inline]
pub(crate) fn get_system_timezone() -> TimeZone {
    match iana_time_zone::get_timezone() {
        Ok(identifier) => TimeZone::from_known_identifier(&identifier).unwrap_or_else(|| {
            #[cfg(feature = "log")]
            log::warn!("no fixed offset is known for host zone {identifier}, using UTC");
            TimeZone::utc()
        }),
        Err(_e) => {
            #[cfg(feature = "log")]
            log::warn!("could not read the host zone identifier: {_e}");
            TimeZone::utc()
        }
    }
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> JalaaliResult<EpochNanoseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| JalaaliError::general("Error fetching system time"))
        .map(|d| EpochNanoseconds::from(d.as_nanos() as i128))
}
