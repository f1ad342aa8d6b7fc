// This is a part of datecast.
// See README.md for details.

//! Wall-clock sources.
//!
//! The converter defaults missing fields from "now" and maps local
//! records to universal time, but it never talks to the operating system
//! directly. Both concerns go through the [`Clock`] trait so tests can
//! substitute a [`FixedClock`].

use crate::datetime::DateTime;
use crate::Error;

/// A source of the current local date and time, plus the local-time to
/// universal-time mapping that goes with it.
pub trait Clock {
    /// Returns the current date and time in the clock's local zone.
    fn now_local(&self) -> Result<DateTime, Error>;

    /// Reinterprets a record of local wall-clock fields as universal
    /// time. The result is canonical and carries a zero bias.
    fn local_to_universal(&self, local: DateTime) -> Result<DateTime, Error>;
}

/// A clock pinned to a fixed instant and a fixed UTC offset, for tests
/// and for callers that bring their own notion of "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    /// The instant reported by [`Clock::now_local`].
    pub now: DateTime,
    /// Minutes east of UTC for this clock's local zone.
    pub offset_minutes: i32,
}

impl FixedClock {
    /// A fixed clock whose local zone is UTC itself.
    pub const fn utc(now: DateTime) -> FixedClock {
        FixedClock { now, offset_minutes: 0 }
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> Result<DateTime, Error> {
        Ok(self.now)
    }

    fn local_to_universal(&self, local: DateTime) -> Result<DateTime, Error> {
        let mut dt = local;
        dt.minute -= self.offset_minutes;
        dt.bias = 0;
        dt.normalize();
        Ok(dt)
    }
}

/// The operating system's clock and local time zone, via `localtime_r`
/// and `mktime`.
#[cfg(all(feature = "clock", unix))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(all(feature = "clock", unix))]
impl Clock for SystemClock {
    fn now_local(&self) -> Result<DateTime, Error> {
        let now = unsafe { libc::time(core::ptr::null_mut()) };
        let mut tm = unsafe { core::mem::zeroed::<libc::tm>() };
        if unsafe { libc::localtime_r(&now, &mut tm) }.is_null() {
            return Err(Error::ClockUnavailable);
        }
        Ok(DateTime::new(
            tm.tm_year + 1900,
            tm.tm_mon + 1,
            tm.tm_mday,
            tm.tm_hour,
            tm.tm_min,
            tm.tm_sec,
        ))
    }

    fn local_to_universal(&self, local: DateTime) -> Result<DateTime, Error> {
        let mut dt = local;
        dt.normalize();
        let mut tm = unsafe { core::mem::zeroed::<libc::tm>() };
        tm.tm_year = dt.year - 1900;
        tm.tm_mon = dt.month - 1;
        tm.tm_mday = dt.day;
        tm.tm_hour = dt.hour;
        tm.tm_min = dt.minute;
        tm.tm_sec = dt.second;
        // let the C library pick the DST state for this instant
        tm.tm_isdst = -1;
        let secs = unsafe { libc::mktime(&mut tm) };
        if secs == -1 {
            return Err(Error::ClockUnavailable);
        }
        Ok(DateTime::from_unix_seconds(secs as i64))
    }
}
