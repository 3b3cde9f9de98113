//! The core built-in types of `jalaali_rs`.

mod datetime;
mod duration;
mod month;
mod now;
mod ops;
mod time;
mod weekday;

pub(crate) mod timezone;

#[doc(inline)]
pub use datetime::JalaaliDateTime;
#[doc(inline)]
pub use duration::TimeDuration;
#[doc(inline)]
pub use month::Month;
#[doc(inline)]
pub use now::Now;
#[doc(inline)]
pub use time::{AmPm, DayTime};
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
#[doc(inline)]
pub use weekday::Weekday;
