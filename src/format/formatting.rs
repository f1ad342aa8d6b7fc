// This is a part of datecast.
// See README.md for details.

//! The render direction of the format interpreter.

use core::fmt::Write;

use crate::datetime::DateTime;
use crate::locale::Locale;
use crate::Error;

/// Renders `record` with the given format string.
///
/// The record is expected to be canonical (see [`DateTime::normalize`]);
/// a month outside 1--12 fails with [`Error::OutOfRange`]. The weekday
/// for `%a`/`%A`/`%w` is always derived fresh from the date fields.
pub fn format(locale: &Locale, format: &str, record: &DateTime) -> Result<String, Error> {
    let mut out = String::with_capacity(format.len() + 16);
    format_into(&mut out, locale, format, record)?;
    Ok(out)
}

/// Same as [`format`], appending to a caller-provided buffer.
pub fn format_into(
    w: &mut String,
    locale: &Locale,
    format: &str,
    record: &DateTime,
) -> Result<(), Error> {
    let f = format.as_bytes();
    let mut i = 0;
    // leniency markers only matter when parsing
    if matches!(f.first(), Some(b'!') | Some(b'^')) {
        i = 1;
    }

    let weekday = record.day_of_week();

    while i < f.len() {
        if f[i] != b'%' {
            let start = i;
            while i < f.len() && f[i] != b'%' {
                i += 1;
            }
            w.push_str(&format[start..i]);
            continue;
        }

        let mut j = i + 1;
        let mut pad = true;
        if f.get(j) == Some(&b'#') {
            pad = false;
            j += 1;
        }
        let spec = match f.get(j) {
            Some(&spec) => spec,
            None => return Err(Error::MalformedInput),
        };

        match spec {
            b'a' => w.push_str(name(&locale.short_weekdays, weekday)?),
            b'A' => w.push_str(name(&locale.long_weekdays, weekday)?),
            b'b' => w.push_str(name(&locale.short_months, record.month)?),
            b'B' => w.push_str(name(&locale.long_months, record.month)?),
            b'w' => push_number(w, weekday, 1, pad),
            b'd' => push_number(w, record.day, 2, pad),
            b'm' => push_number(w, record.month, 2, pad),
            b'y' => push_number(w, record.year.rem_euclid(100), 2, pad),
            b'Y' => push_number(w, record.year, 4, pad),
            b'H' => push_number(w, record.hour, 2, pad),
            b'I' => {
                let mut hour = record.hour % 12;
                if hour == 0 {
                    hour = 12;
                }
                push_number(w, hour, 2, pad);
            }
            b'J' => push_number(w, record.hour % 12, 2, pad),
            b'M' => push_number(w, record.minute, 2, pad),
            b'S' => push_number(w, record.second, 2, pad),
            b'p' => w.push_str(if record.hour < 12 { locale.am } else { locale.pm }),
            b'z' => {
                let hhmm = (record.bias / 60) * 100 + record.bias % 60;
                let _ = write!(w, "{hhmm:+05}");
            }
            b'%' => w.push('%'),
            _ => return Err(Error::MalformedInput),
        }
        i = j + 1;
    }

    Ok(())
}

/// Looks up a 1-based index in a locale name table.
fn name(table: &[&'static str], index: i32) -> Result<&'static str, Error> {
    usize::try_from(index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| table.get(index))
        .copied()
        .ok_or(Error::OutOfRange)
}

/// Appends a decimal number, zero-padded to `width` unless suppressed.
fn push_number(w: &mut String, value: i32, width: usize, pad: bool) {
    // writing into a String cannot fail
    if pad {
        let _ = write!(w, "{value:0width$}");
    } else {
        let _ = write!(w, "{value}");
    }
}
