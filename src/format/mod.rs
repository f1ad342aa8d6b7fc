// This is a part of datecast.
// See README.md for details.

//! The bidirectional format interpreter.
//!
//! A format string is a run of literal text interleaved with `%`-prefixed
//! specifiers, optionally preceded by a leniency marker (`!` for strict,
//! `^` for loose). The same string drives both directions: [`parse`]
//! scans text into a [`DateTime`](crate::DateTime) plus a
//! [`ValidItems`](crate::ValidItems) mask of which fields were seen, and
//! [`format`] renders a record back to text.
//!
//! The following specifiers are understood. `%#X` renders `X` without
//! zero padding; when parsing, `#` is accepted and ignored.
//!
//! | Spec. | Example  | Description                                          |
//! |-------|----------|------------------------------------------------------|
//! | `%a`  | `Fri`    | Abbreviated weekday name.                            |
//! | `%A`  | `Friday` | Full weekday name.                                   |
//! | `%b`  | `Mar`    | Abbreviated month name.                              |
//! | `%B`  | `March`  | Full month name.                                     |
//! | `%w`  | `6`      | Weekday number, Sunday = 1 through Saturday = 7.     |
//! | `%d`  | `15`     | Day of the month.                                    |
//! | `%m`  | `03`     | Month number.                                        |
//! | `%y`  | `24`     | Two-digit year, subject to the century cutoff.       |
//! | `%Y`  | `2024`   | Full year.                                           |
//! | `%H`  | `14`     | Hour on the 24-hour clock.                           |
//! | `%I`  | `02`     | Hour on the 12-hour clock, midnight and noon as 12.  |
//! | `%J`  | `2`      | Hour on the 12-hour clock, midnight and noon as 0.   |
//! | `%M`  | `30`     | Minute.                                              |
//! | `%S`  | `00`     | Second.                                              |
//! | `%p`  | `PM`     | Half-of-day marker; a PM match adds twelve hours.    |
//! | `%z`  | `-0500`  | UTC offset as a signed `hhmm` number.                |
//! | `%%`  | `%`      | A literal `%`.                                       |

mod formatting;
mod parse;
mod scan;

pub use formatting::{format, format_into};
pub use parse::{parse, parse_format};
pub use scan::Cursor;
