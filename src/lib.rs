// This is a part of datecast.
// See README.md for details.

//! Locale-aware, bidirectional date and time formatting.
//!
//! `datecast` converts between a plain [`DateTime`] record and textual
//! representations driven by a compact `%`-specifier format language,
//! in both directions from the same format string. It was built for the
//! common "take whatever the user typed and show it back canonically"
//! loop, so the parser has a loose mode, a multi-format autodetection
//! cascade, and defaulting of missing fields from the current time.
//!
//! ```
//! use datecast::{Converter, FixedClock, DateTime, FormatId};
//!
//! let clock = FixedClock::utc(DateTime::new(2024, 3, 15, 0, 0, 0));
//! let converter = Converter::new(clock);
//! let out = converter
//!     .convert("3/15/24 2:30 PM", None, FormatId::InternetDate.into())
//!     .unwrap();
//! assert_eq!(out, "Fri, 15 Mar 2024 14:30:00 +0000");
//! ```
//!
//! The pieces compose bottom-up:
//!
//! - [`DateTime`] is a bag of signed integer fields with value
//!   semantics. Arithmetic is expressed by writing an out-of-range
//!   field and calling [`DateTime::normalize`], which carries between
//!   fields in both directions.
//! - [`format`] holds the format interpreter, parse and render
//!   directions, with the specifier language documented on the module.
//! - [`Locale`] supplies the name tables and per-locale format strings;
//!   [`ENGLISH`] is the built-in default.
//! - [`Clock`] is the boundary to the outside world: "now" and the
//!   local-to-universal mapping. [`FixedClock`] pins both for tests,
//!   `SystemClock` uses the operating system (behind the `clock`
//!   feature, on by default).
//! - [`Converter`] orchestrates parse, defaulting, validation and
//!   rendering.
//!
//! ## Crate features
//!
//! - `clock` (default): the OS-backed `SystemClock` on unix targets.
//! - `serde`: `Serialize`/`Deserialize` for [`DateTime`].

#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, missing_debug_implementations)]

mod clock;
mod convert;
mod datetime;
mod error;
pub mod format;
mod locale;

pub use clock::{Clock, FixedClock};
#[cfg(all(feature = "clock", unix))]
pub use clock::SystemClock;
pub use convert::{Converter, FormatId, FormatPair, DEFAULT_CENTURY_CUTOFF};
pub use datetime::{days_in_month, is_leap_year, DateTime, ValidItems};
pub use error::Error;
pub use locale::{Locale, MonthsList, WeekdaysList, DATE_ITEMS, ENGLISH, INTERNET_DATE};
