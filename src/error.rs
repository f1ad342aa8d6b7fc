// This is a part of datecast.
// See README.md for details.

use core::fmt;

/// The error raised when a date/time conversion fails.
///
/// Every failure is local to the call that produced it; nothing in this
/// crate panics or retries on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The input does not match a required literal or numeric field of the
    /// format, or non-whitespace input remained after the format was
    /// exhausted.
    MalformedInput,
    /// The parsed fields form a combination the consistency rules forbid,
    /// such as a year without a month or a minute without an hour.
    InconsistentFields,
    /// A field is outside its canonical range after normalization, e.g. a
    /// day of month that does not exist in the given month and year.
    OutOfRange,
    /// The external clock provider could not supply the current time or
    /// perform a local-to-universal conversion.
    ClockUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput => write!(f, "input does not match the format"),
            Error::InconsistentFields => write!(f, "inconsistent date or time fields"),
            Error::OutOfRange => write!(f, "date or time field out of range"),
            Error::ClockUnavailable => write!(f, "system clock unavailable"),
        }
    }
}

impl std::error::Error for Error {}
