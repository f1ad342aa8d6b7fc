// This is a part of datecast.
// See README.md for details.

//! The date/time record and its calendar arithmetic.
//!
//! A [`DateTime`] is a plain bundle of signed integer fields. Fields may
//! hold out-of-range values on purpose: arithmetic like "add 90 minutes"
//! is expressed by storing `minute + 90` and calling [`DateTime::normalize`],
//! which carries overflow and underflow between fields.

use num_integer::div_mod_floor;

/// Days per month in a common (non-leap) year, January first.
const MONTH_DAYS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true for Gregorian leap years.
///
/// ```
/// assert!(datecast::is_leap_year(2000));
/// assert!(!datecast::is_leap_year(1900));
/// ```
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month (1--12) of the given year.
///
/// # Panics
///
/// Panics when `month` is outside 1--12. Callers with a possibly
/// out-of-range month must bring it into range first, as
/// [`DateTime::normalize`] and [`DateTime::validate`] do.
#[inline]
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

/// A date and time broken into its component fields.
///
/// All fields are signed and unconstrained before normalization. The
/// canonical ranges after [`DateTime::normalize`] are `1..=12` for the
/// month, `1..=days_in_month` for the day, `0..24` for the hour and
/// `0..60` for the minute and second.
///
/// `bias` is a signed offset from UTC in minutes. It is carried alongside
/// the other fields rather than fused into them, and is only produced and
/// consumed by internet (RFC 822-style) date formats.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// Absolute year, e.g. 2024. Two-digit years are expanded with the
    /// century-cutoff rule before they are stored here.
    pub year: i32,
    /// Month of the year, nominally 1--12.
    pub month: i32,
    /// Day of the month, nominally 1 through the month's length.
    pub day: i32,
    /// Hour of the day, nominally 0--23.
    pub hour: i32,
    /// Minute of the hour, nominally 0--59.
    pub minute: i32,
    /// Second of the minute, nominally 0--59.
    pub second: i32,
    /// Offset from UTC in minutes.
    pub bias: i32,
}

impl DateTime {
    /// Makes a new record with the given fields and a zero bias.
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> DateTime {
        DateTime { year, month, day, hour, minute, second, bias: 0 }
    }

    /// Returns the day of the week for the date fields, 1 = Sunday through
    /// 7 = Saturday.
    ///
    /// Computed with Zeller's congruence, treating January and February as
    /// months 13 and 14 of the previous year. The record carries no
    /// weekday field of its own; this is always derived fresh.
    pub fn day_of_week(&self) -> i32 {
        let (mut m, mut y) = (self.month, self.year);
        if m < 3 {
            m += 12;
            y -= 1;
        }
        let k = y.rem_euclid(100);
        let j = y.div_euclid(100);
        // h = 0 is Saturday, h = 1 is Sunday and so on.
        let h = (self.day + 13 * (m + 1) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
        (h + 6) % 7 + 1
    }

    /// Canonicalizes out-of-range fields by carrying between them:
    /// seconds into minutes, minutes into hours, hours into days, then
    /// days through the variable-length months (leap-adjusted) into years.
    ///
    /// Normalizing an already-canonical record is a no-op.
    ///
    /// ```
    /// use datecast::DateTime;
    ///
    /// let mut dt = DateTime::new(2024, 2, 30, 0, 0, 0);
    /// dt.normalize();
    /// assert_eq!(dt, DateTime::new(2024, 3, 1, 0, 0, 0));
    /// ```
    pub fn normalize(&mut self) {
        let (carry, second) = div_mod_floor(self.second, 60);
        self.second = second;
        self.minute += carry;

        let (carry, minute) = div_mod_floor(self.minute, 60);
        self.minute = minute;
        self.hour += carry;

        let (carry, hour) = div_mod_floor(self.hour, 24);
        self.hour = hour;
        self.day += carry;

        // The month must be in range before the day loops can look up
        // month lengths.
        let (carry, month0) = div_mod_floor(self.month - 1, 12);
        self.month = month0 + 1;
        self.year += carry;

        while self.day < 1 {
            self.month -= 1;
            if self.month < 1 {
                self.month = 12;
                self.year -= 1;
            }
            self.day += days_in_month(self.year, self.month);
        }

        while self.day > MONTH_DAYS[(self.month - 1) as usize] {
            // Day 29 of a leap-year February stays put, even when the
            // overflow arrived here from a longer month.
            if self.month == 2 && self.day == 29 && is_leap_year(self.year) {
                break;
            }
            self.day -= days_in_month(self.year, self.month);
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }

    /// Checks every field against its canonical range without mutating.
    ///
    /// Returns false when the month is outside 1--12, the day does not
    /// exist in the (leap-adjusted) month, or the hour, minute or second
    /// is out of range. The bias is not constrained.
    pub fn validate(&self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour >= 0
            && self.hour < 24
            && self.minute >= 0
            && self.minute < 60
            && self.second >= 0
            && self.second < 60
    }

    /// Makes a record from seconds since the Unix epoch (UTC, zero bias).
    pub fn from_unix_seconds(secs: i64) -> DateTime {
        let (days, rem) = div_mod_floor(secs, 86_400);
        let (hour, rem) = div_mod_floor(rem, 3_600);
        let (minute, second) = div_mod_floor(rem, 60);
        let (year, month, day) = civil_from_days(days);
        DateTime {
            year,
            month,
            day,
            hour: hour as i32,
            minute: minute as i32,
            second: second as i32,
            bias: 0,
        }
    }

    /// Returns seconds since the Unix epoch for a canonical record,
    /// ignoring the bias.
    pub fn to_unix_seconds(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }
}

/// Converts days since the Unix epoch to a (year, month, day) triple.
fn civil_from_days(days: i64) -> (i32, i32, i32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as i32, day as i32)
}

/// Converts a (year, month, day) triple to days since the Unix epoch.
fn days_from_civil(year: i32, month: i32, day: i32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// A set of flags recording which [`DateTime`] fields a parse pass
/// actually populated.
///
/// The parser only writes back fields whose flag it reports, so a record
/// can be filled incrementally by parsing several formats against it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct ValidItems(u8);

impl ValidItems {
    /// The year field was populated.
    pub const YEAR: ValidItems = ValidItems(0b00_0001);
    /// The month field was populated.
    pub const MONTH: ValidItems = ValidItems(0b00_0010);
    /// The day field was populated.
    pub const DAY: ValidItems = ValidItems(0b00_0100);
    /// The hour field was populated.
    pub const HOUR: ValidItems = ValidItems(0b00_1000);
    /// The minute field was populated.
    pub const MINUTE: ValidItems = ValidItems(0b01_0000);
    /// The second field was populated.
    pub const SECOND: ValidItems = ValidItems(0b10_0000);
    /// A complete date: year, month and day.
    pub const DATE: ValidItems = ValidItems(0b00_0111);
    /// A complete time of day: hour and minute. Seconds are optional in
    /// every time format.
    pub const TIME: ValidItems = ValidItems(0b01_1000);

    /// The empty set.
    pub const fn empty() -> ValidItems {
        ValidItems(0)
    }

    /// Returns true when every flag in `other` is present in `self`.
    pub const fn contains(self, other: ValidItems) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true when at least one flag in `other` is present in `self`.
    pub const fn intersects(self, other: ValidItems) -> bool {
        self.0 & other.0 != 0
    }

    /// Adds the flags in `other` to `self`.
    pub fn insert(&mut self, other: ValidItems) {
        self.0 |= other.0;
    }
}

impl core::ops::BitOr for ValidItems {
    type Output = ValidItems;

    fn bitor(self, rhs: ValidItems) -> ValidItems {
        ValidItems(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for ValidItems {
    fn bitor_assign(&mut self, rhs: ValidItems) {
        self.0 |= rhs.0;
    }
}
