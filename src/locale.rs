// This is a part of datecast.
// See README.md for details.

//! Locale name tables and the canonical format-string catalog.
//!
//! A [`Locale`] is pure data: weekday and month names in full and
//! abbreviated form, the locale's preferred date and time format strings,
//! and its AM/PM markers. The engine only ever reads a locale; it is
//! either the built-in [`ENGLISH`] or supplied by the host platform.

/// Full and abbreviated weekday names, Sunday first.
pub type WeekdaysList = [&'static str; 7];

/// Full and abbreviated month names, January first.
pub type MonthsList = [&'static str; 12];

/// Internet (RFC 822-style) date format, e.g. `Fri, 15 Mar 2024 14:30:00 +0000`.
pub const INTERNET_DATE: &str = "!%a, %#d %b %Y %H:%M:%S %z";

/// Canonical comma-separated numeric encoding of a full record, for
/// lossless machine-to-machine exchange.
pub const DATE_ITEMS: &str = "!%#Y,%#m,%#d,%#H,%#M,%#S,%#w";

/// An immutable table of localized names and format strings.
///
/// All fields are read-only data; the `&'static str` lifetimes make a
/// fully constructed locale safe to share between threads without
/// synchronization.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    /// Full weekday names, Sunday first.
    pub long_weekdays: WeekdaysList,
    /// Abbreviated weekday names, Sunday first.
    pub short_weekdays: WeekdaysList,
    /// Full month names, January first.
    pub long_months: MonthsList,
    /// Abbreviated month names, January first.
    pub short_months: MonthsList,
    /// Long date format, e.g. `Friday, March 15, 2024`.
    pub long_date: &'static str,
    /// Abbreviated date format, e.g. `Fri, Mar 15, 2024`.
    pub abbrev_date: &'static str,
    /// Short numeric date format, e.g. `3/15/24`.
    pub short_date: &'static str,
    /// Short 12-hour time format, e.g. `2:30 PM`.
    pub short_time: &'static str,
    /// Long 12-hour time format, e.g. `2:30:00 PM`.
    pub long_time: &'static str,
    /// Short 24-hour time format, e.g. `14:30`.
    pub short_time24: &'static str,
    /// Long 24-hour time format, e.g. `14:30:00`.
    pub long_time24: &'static str,
    /// Morning suffix. May be empty, in which case its absence from input
    /// is tolerated when parsing `%p`.
    pub am: &'static str,
    /// Evening suffix.
    pub pm: &'static str,
}

/// The built-in English locale.
pub static ENGLISH: Locale = Locale {
    long_weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    short_weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    long_months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    long_date: "%A, %B %#d, %#Y",
    abbrev_date: "%a, %b %#d, %#Y",
    short_date: "^%#m/%#d/%y",
    short_time: "!%#I:%M %p",
    long_time: "!%#I:%M:%S %p",
    short_time24: "!%H:%M",
    long_time24: "!%H:%M:%S",
    am: "AM",
    pm: "PM",
};

impl Default for Locale {
    fn default() -> Locale {
        ENGLISH
    }
}
