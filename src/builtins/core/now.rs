//! The `Now` component

use crate::civil::CivilDateTime;
use crate::host::HostHooks;
use crate::time::EpochNanoseconds;
use crate::JalaaliResult;

use super::{JalaaliDateTime, TimeZone};

/// The `Now` object, which reads the current time from a set of host hooks.
pub struct Now<H: HostHooks> {
    host_hooks: H,
}

impl<H: HostHooks> Now<H> {
    pub const fn new(host_hooks: H) -> Self {
        Self { host_hooks }
    }
}

impl<H: HostHooks> Now<H> {
    /// Returns the current instant as nanoseconds since the Unix epoch.
    pub fn epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds> {
        self.host_hooks.get_system_epoch_nanoseconds()
    }

    /// Returns the current host zone.
    pub fn time_zone(&self) -> JalaaliResult<TimeZone> {
        self.host_hooks.get_system_time_zone()
    }

    /// Returns the current civil date and time in `zone`, or in the host's
    /// zone when no zone is provided.
    ///
    /// ## Order of operations
    ///
    /// The zone is resolved before the host clock is read.
    pub fn civil_date_time(self, zone: Option<TimeZone>) -> JalaaliResult<CivilDateTime> {
        let zone = match zone {
            Some(zone) => zone,
            None => self.time_zone()?,
        };
        let epoch_nanoseconds = self.epoch_nanoseconds()?;
        CivilDateTime::from_epoch_nanoseconds(epoch_nanoseconds, zone)
    }

    /// Returns the current Jalaali date and time in `zone`, or in the host's
    /// zone when no zone is provided.
    pub fn jalaali_date_time(self, zone: Option<TimeZone>) -> JalaaliResult<JalaaliDateTime> {
        self.civil_date_time(zone)
            .map(|civil| JalaaliDateTime::from_civil(&civil))
    }
}

#[cfg(test)]
mod tests {
    use super::Now;
    use crate::{
        host::{HostClock, HostHooks, HostTimeZone},
        time::EpochNanoseconds,
        JalaaliResult, Month, TimeZone,
    };

    struct FixedHost;

    impl HostClock for FixedHost {
        fn get_host_epoch_nanoseconds(&self) -> JalaaliResult<EpochNanoseconds> {
            // 2024-03-20T03:06:26Z, the 1403 vernal equinox.
            Ok(EpochNanoseconds::from_parts(1_710_903_986, 0))
        }
    }

    impl HostTimeZone for FixedHost {
        fn get_host_time_zone(&self) -> JalaaliResult<TimeZone> {
            Ok(TimeZone::tehran())
        }
    }

    impl HostHooks for FixedHost {}

    #[test]
    fn mocked_now() {
        let now = Now::new(FixedHost).jalaali_date_time(None).unwrap();
        assert_eq!((now.year(), now.month(), now.day()), (1403, Month::Farvardin, 1));
        assert_eq!((now.hour(), now.minute(), now.second()), (6, 36, 26));
        assert_eq!(now.zone(), &TimeZone::tehran());

        let utc = Now::new(FixedHost)
            .civil_date_time(Some(TimeZone::utc()))
            .unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day(), utc.hour()), (2024, 3, 20, 3));
    }

    #[test]
    fn empty_host_is_the_epoch() {
        let now = Now::new(()).jalaali_date_time(None).unwrap();
        assert_eq!(now.to_string(), "1348-10-11T00:00:00Z");
    }
}
