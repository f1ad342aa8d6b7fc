// This is a part of datecast.
// See README.md for details.

//! The parse direction of the format interpreter.
//!
//! [`parse_format`] walks a format string and the input in lock-step,
//! dispatching each `%` specifier to a primitive matcher and recording
//! which record fields it populated in a [`ValidItems`] mask. The cursor
//! advances only as far as the format reaches; callers that require the
//! whole input to be consumed check the remainder themselves.

use super::scan::{self, Cursor};
use crate::datetime::{DateTime, ValidItems};
use crate::locale::Locale;
use crate::Error;

/// Parses `input` against `format` in one pass, requiring that nothing
/// but whitespace remains, and returns the populated record together with
/// the mask of fields the format actually produced.
///
/// `loose` is the caller's leniency request; a leading `!` or `^` in the
/// format overrides it. `century_cutoff` expands two-digit years: values
/// below the cutoff land in 20xx, the rest in 19xx.
pub fn parse(
    locale: &Locale,
    format: &str,
    input: &str,
    loose: bool,
    century_cutoff: i32,
) -> Result<(DateTime, ValidItems), Error> {
    let mut cursor = Cursor::new(input);
    let mut record = DateTime::default();
    let items = parse_format(locale, century_cutoff, loose, format, &mut cursor, &mut record)?;
    if !cursor.rest_is_whitespace() {
        return Err(Error::MalformedInput);
    }
    Ok((record, items))
}

/// Parses one format against the input at `cursor`, writing populated
/// fields into `out` and returning the mask of what was found.
///
/// Fields absent from the mask are left untouched in `out`, so the same
/// record can accumulate fields across several calls with different
/// formats. On failure the cursor may have advanced partway; callers that
/// need to retry another format must save and restore its position.
pub fn parse_format(
    locale: &Locale,
    century_cutoff: i32,
    loose: bool,
    format: &str,
    cursor: &mut Cursor<'_>,
    out: &mut DateTime,
) -> Result<ValidItems, Error> {
    let f = format.as_bytes();
    let mut i = 0;
    let mut loose = loose;
    match f.first() {
        Some(b'!') => {
            loose = false;
            i = 1;
        }
        Some(b'^') => {
            loose = true;
            i = 1;
        }
        _ => {}
    }

    let mut items = ValidItems::empty();
    let (mut year, mut month, mut day) = (out.year, out.month, out.day);
    let (mut hour, mut minute, mut second) = (out.hour, out.minute, out.second);
    let mut bias = out.bias;
    let mut saw_bias = false;
    let mut afternoon = false;

    while i < f.len() {
        let c = f[i];

        if c == b'%' {
            let mut j = i + 1;
            if f.get(j) == Some(&b'#') {
                // padding suppression only matters when rendering
                j += 1;
            }
            let spec = match f.get(j) {
                Some(&spec) => spec,
                None => return Err(Error::MalformedInput),
            };

            cursor.skip_whitespace();

            match spec {
                b'a' | b'A' => {
                    let (natural, other): (&[&str], &[&str]) = if spec == b'a' {
                        (&locale.short_weekdays, &locale.long_weekdays)
                    } else {
                        (&locale.long_weekdays, &locale.short_weekdays)
                    };
                    let mut found = scan::match_prefix(natural, cursor).is_some();
                    if !found && loose {
                        found = scan::match_prefix(other, cursor).is_some();
                    }
                    if !found {
                        // A weekday is always optional. Jump ahead to the
                        // next field, assuming at most two separator
                        // characters in between; farther separators are
                        // left to the literal matching below.
                        if f.get(j + 2) == Some(&b'%') {
                            i = j + 2;
                        } else if f.get(j + 3) == Some(&b'%') {
                            i = j + 3;
                        } else {
                            i = j + 1;
                        }
                        cursor.skip_whitespace();
                        continue;
                    }
                    // matched weekday names are not kept: the record has
                    // no weekday field and rendering rederives it
                }
                b'b' | b'B' => {
                    let (natural, other): (&[&str], &[&str]) = if spec == b'b' {
                        (&locale.short_months, &locale.long_months)
                    } else {
                        (&locale.long_months, &locale.short_months)
                    };
                    let mut found = scan::match_prefix(natural, cursor);
                    if found.is_none() && loose {
                        found = scan::match_prefix(other, cursor);
                    }
                    match found {
                        Some(index) => {
                            month = index as i32;
                            items |= ValidItems::MONTH;
                        }
                        None => return Err(Error::MalformedInput),
                    }
                }
                b'w' => {
                    // day-of-week number; parsed but not stored
                    scan::match_number(cursor)?;
                }
                b'd' => {
                    day = scan::match_number(cursor)?;
                    items |= ValidItems::DAY;
                }
                b'm' => {
                    month = scan::match_number(cursor)?;
                    items |= ValidItems::MONTH;
                }
                b'y' | b'Y' => match scan::match_digits(cursor) {
                    Ok((value, ndigits)) => {
                        let mut value = value;
                        if ndigits <= 2 && value < 100 {
                            if value < century_cutoff {
                                value += 100;
                            }
                            value += 1900;
                        }
                        year = value;
                        items |= ValidItems::YEAR;
                    }
                    // in loose mode the year is optional
                    Err(e) if !loose => return Err(e),
                    Err(_) => {}
                },
                b'J' | b'H' => {
                    // %J is 12-hour with midnight = 0, %H is 24-hour;
                    // neither needs an adjustment here
                    hour = scan::match_number(cursor)?;
                    items |= ValidItems::HOUR;
                }
                b'I' => {
                    hour = scan::match_number(cursor)?;
                    if hour == 12 {
                        hour = 0;
                    }
                    items |= ValidItems::HOUR;
                }
                b'M' => {
                    minute = scan::match_number(cursor)?;
                    items |= ValidItems::MINUTE;
                }
                b'S' => {
                    second = scan::match_number(cursor)?;
                    items |= ValidItems::SECOND;
                }
                b'p' => {
                    if !locale.pm.is_empty() && scan::match_string(locale.pm, cursor) {
                        afternoon = true;
                    } else if !locale.am.is_empty() && !scan::match_string(locale.am, cursor) {
                        return Err(Error::MalformedInput);
                    }
                }
                b'z' => {
                    // accepts any signed integer, not just well-formed
                    // [+-]HHMM quantities
                    let value = scan::match_number(cursor)?;
                    bias = (value / 100) * 60 + value % 100;
                    saw_bias = true;
                }
                b'%' => {
                    if cursor.peek() == Some(b'%') {
                        cursor.advance(1);
                    } else if !loose {
                        cursor.advance(1);
                    }
                }
                _ => return Err(Error::MalformedInput),
            }
            i = j + 1;
            continue;
        }

        if c.is_ascii_whitespace() {
            // a run of format whitespace matches a run of input
            // whitespace, either possibly empty
            while i < f.len() && f[i].is_ascii_whitespace() {
                i += 1;
            }
            cursor.skip_whitespace();
            continue;
        }

        // literal format character
        match cursor.peek() {
            Some(b) if b == c => {
                cursor.advance(1);
                i += 1;
            }
            Some(_) => {
                if loose {
                    while i < f.len() && f[i] != b'%' {
                        i += 1;
                    }
                } else {
                    // tolerate one stray input character and retry the
                    // same format character
                    cursor.advance(1);
                }
            }
            None => {
                i += 1;
            }
        }
    }

    if items.contains(ValidItems::YEAR) && !items.contains(ValidItems::MONTH) {
        return Err(Error::InconsistentFields);
    }
    if items.intersects(ValidItems::MONTH | ValidItems::DAY)
        && !items.contains(ValidItems::MONTH | ValidItems::DAY)
    {
        return Err(Error::InconsistentFields);
    }
    if items.contains(ValidItems::SECOND) && !items.contains(ValidItems::MINUTE) {
        return Err(Error::InconsistentFields);
    }
    if items.intersects(ValidItems::HOUR | ValidItems::MINUTE)
        && !items.contains(ValidItems::HOUR | ValidItems::MINUTE)
    {
        return Err(Error::InconsistentFields);
    }

    if afternoon {
        hour += 12;
    }

    if items.contains(ValidItems::YEAR) {
        out.year = year;
    }
    if items.contains(ValidItems::MONTH) {
        out.month = month;
    }
    if items.contains(ValidItems::DAY) {
        out.day = day;
    }
    if items.contains(ValidItems::HOUR) {
        out.hour = hour;
    }
    if items.contains(ValidItems::MINUTE) {
        out.minute = minute;
    }
    if items.contains(ValidItems::SECOND) {
        out.second = second;
    }
    if saw_bias {
        out.bias = bias;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{DATE_ITEMS, ENGLISH, INTERNET_DATE};

    const CUTOFF: i32 = 70;

    fn parse_strict(format: &str, input: &str) -> Result<(DateTime, ValidItems), Error> {
        parse(&ENGLISH, format, input, false, CUTOFF)
    }

    fn parse_loose(format: &str, input: &str) -> Result<(DateTime, ValidItems), Error> {
        parse(&ENGLISH, format, input, true, CUTOFF)
    }

    #[test]
    fn test_date_items() {
        let (dt, items) = parse_strict(DATE_ITEMS, "2024,3,15,14,30,0,6").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
        assert!(items.contains(ValidItems::DATE));
        assert!(items.contains(ValidItems::TIME | ValidItems::SECOND));
    }

    #[test]
    fn test_internet_date() {
        let (dt, items) = parse_strict(INTERNET_DATE, "Fri, 15 Mar 2024 14:30:00 +0000").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
        assert_eq!(dt.bias, 0);
        assert!(items.contains(ValidItems::DATE | ValidItems::TIME | ValidItems::SECOND));

        let (dt, _) = parse_strict(INTERNET_DATE, "Fri, 15 Mar 2024 14:30:00 -0500").unwrap();
        assert_eq!(dt.bias, -300);

        // the weekday is optional even in strict mode
        let (dt, _) = parse_strict(INTERNET_DATE, "15 Mar 2024 14:30:00 +0000").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
    }

    #[test]
    fn test_bias_is_loose() {
        // any signed integer passes for %z; only the documented HHMM
        // split is applied
        let (dt, _) = parse_strict(INTERNET_DATE, "15 Mar 2024 14:30:00 +99").unwrap();
        assert_eq!(dt.bias, 99);
    }

    #[test]
    fn test_century_cutoff() {
        let (dt, _) = parse_loose("^%#m/%#d/%y", "3/15/69").unwrap();
        assert_eq!(dt.year, 2069);
        let (dt, _) = parse_loose("^%#m/%#d/%y", "3/15/70").unwrap();
        assert_eq!(dt.year, 1970);
        // three or more digits, or values >= 100, are absolute
        let (dt, _) = parse_loose("^%#m/%#d/%y", "3/15/2024").unwrap();
        assert_eq!(dt.year, 2024);
        let (dt, _) = parse_loose("^%#m/%#d/%y", "3/15/123").unwrap();
        assert_eq!(dt.year, 123);
    }

    #[test]
    fn test_weekday_name_skipped_when_absent() {
        let (dt, _) = parse_strict("%a, %b %#d, %#Y", "Mar 15, 2024").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 0, 0, 0));
    }

    #[test]
    fn test_name_table_fallback_in_loose_mode() {
        // loose mode lets %A/%B fall back to the abbreviated table
        let (dt, _) = parse_loose("%A, %B %#d, %#Y", "Fri, Mar 15, 2024").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 0, 0, 0));

        // the other direction never engages: every abbreviation is a
        // prefix of its full name, so "Mar" matches inside "March" and
        // the leftover "ch" breaks the day field, loose or strict
        assert_eq!(
            parse_loose("%b %#d, %#Y", "March 15, 2024"),
            Err(Error::MalformedInput)
        );
        assert_eq!(
            parse_strict("!%b %#d, %#Y", "March 15, 2024"),
            Err(Error::MalformedInput)
        );
    }

    #[test]
    fn test_month_name_failure_is_fatal() {
        assert_eq!(
            parse_loose("%a, %b %#d, %#Y", "Foo 15, 2024"),
            Err(Error::MalformedInput)
        );
    }

    #[test]
    fn test_hour_specifiers() {
        // %I: 12 o'clock maps to 0, then %p adds 12 in the afternoon
        let (dt, _) = parse_strict("!%#I:%M %p", "12:30 AM").unwrap();
        assert_eq!((dt.hour, dt.minute), (0, 30));
        let (dt, _) = parse_strict("!%#I:%M %p", "12:30 PM").unwrap();
        assert_eq!((dt.hour, dt.minute), (12, 30));
        let (dt, _) = parse_strict("!%#I:%M %p", "1:05 pm").unwrap();
        assert_eq!((dt.hour, dt.minute), (13, 5));

        // %J keeps midnight at 0 with no noon substitution
        let (dt, _) = parse_strict("!%#J:%M", "0:15").unwrap();
        assert_eq!((dt.hour, dt.minute), (0, 15));

        // %H is plain 24-hour
        let (dt, _) = parse_strict("!%H:%M", "23:59").unwrap();
        assert_eq!((dt.hour, dt.minute), (23, 59));
    }

    #[test]
    fn test_inconsistent_fields_rejected() {
        // year without month
        assert_eq!(parse_strict("%Y", "2024"), Err(Error::InconsistentFields));
        // day without month
        assert_eq!(parse_strict("%d", "15"), Err(Error::InconsistentFields));
        // month without day
        assert_eq!(parse_strict("%m", "3"), Err(Error::InconsistentFields));
        // minute without hour
        assert_eq!(parse_strict("%M", "30"), Err(Error::InconsistentFields));
        // second without minute
        assert_eq!(parse_strict("%H:%S", "10:30"), Err(Error::InconsistentFields));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert_eq!(
            parse_strict(DATE_ITEMS, "2024,3,15,14,30,0,6 junk"),
            Err(Error::MalformedInput)
        );
        // trailing whitespace is fine
        assert!(parse_strict(DATE_ITEMS, "2024,3,15,14,30,0,6  \t").is_ok());
    }

    #[test]
    fn test_leniency_markers_override_caller() {
        // '^' forces loose even when the caller asked for strict: a
        // mismatched separator skips ahead instead of resyncing bytewise
        let (dt, _) = parse(&ENGLISH, "^%#m/%#d/%y", "3 15 69", false, CUTOFF).unwrap();
        assert_eq!((dt.month, dt.day, dt.year), (3, 15, 2069));
    }

    #[test]
    fn test_missing_required_number_is_fatal() {
        assert_eq!(parse_strict("!%H:%M", "xx:30"), Err(Error::MalformedInput));
        assert_eq!(parse_strict("!%H:%M", "12:"), Err(Error::MalformedInput));
    }

    #[test]
    fn test_accumulates_across_calls() {
        let mut record = DateTime::default();
        let mut cursor = Cursor::new("3/15/2024 14:30");
        let date_items =
            parse_format(&ENGLISH, CUTOFF, true, ENGLISH.short_date, &mut cursor, &mut record)
                .unwrap();
        assert!(date_items.contains(ValidItems::DATE));
        cursor.skip_whitespace();
        let time_items =
            parse_format(&ENGLISH, CUTOFF, true, ENGLISH.short_time24, &mut cursor, &mut record)
                .unwrap();
        assert!(time_items.contains(ValidItems::TIME));
        assert_eq!(record, DateTime::new(2024, 3, 15, 14, 30, 0));
        assert!(cursor.rest_is_whitespace());
    }

    #[test]
    fn test_failed_fields_left_untouched() {
        let mut record = DateTime::new(2020, 1, 2, 3, 4, 5);
        let mut cursor = Cursor::new("garbage");
        assert!(parse_format(
            &ENGLISH,
            CUTOFF,
            false,
            ENGLISH.long_time24,
            &mut cursor,
            &mut record
        )
        .is_err());
        assert_eq!(record, DateTime::new(2020, 1, 2, 3, 4, 5));
    }
}
