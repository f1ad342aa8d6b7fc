// This is a part of datecast.
// See README.md for details.

//! Primitive matchers for the parser.
//!
//! All matching happens through a [`Cursor`], an index into an immutable
//! input slice. On failure the cursor position is only guaranteed
//! unchanged for [`match_prefix`] and [`match_string`]; [`match_number`]
//! may have consumed a leading sign.

use crate::Error;

/// A position within an immutable input string.
///
/// The cursor operates on bytes; names and literals are matched
/// ASCII-case-insensitively, and multi-byte text only ever crosses the
/// cursor as a whole matched name.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Makes a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Cursor<'a> {
        Cursor { input: input.as_bytes(), pos: 0 }
    }

    /// The current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Rewinds (or winds) the cursor to a previously saved offset.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Returns true when the input is exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next unconsumed byte, if any.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes `n` bytes, saturating at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consumes a run of ASCII whitespace, possibly empty.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Returns true when only whitespace (or nothing) remains.
    pub fn rest_is_whitespace(&self) -> bool {
        self.rest().iter().all(|b| b.is_ascii_whitespace())
    }
}

/// Case-insensitively matches the first entry of `table` that is a prefix
/// of the remaining input.
///
/// Returns the 1-based index of the matched entry and consumes it, or
/// returns `None` with the cursor unchanged.
pub fn match_prefix(table: &[&str], cursor: &mut Cursor<'_>) -> Option<usize> {
    let rest = cursor.rest();
    for (index, name) in table.iter().enumerate() {
        let name = name.as_bytes();
        if rest.len() >= name.len() && rest[..name.len()].eq_ignore_ascii_case(name) {
            cursor.advance(name.len());
            return Some(index + 1);
        }
    }
    None
}

/// Case-insensitively matches a single literal.
///
/// Consumes the literal and returns true, or returns false with the
/// cursor unchanged.
pub fn match_string(literal: &str, cursor: &mut Cursor<'_>) -> bool {
    let literal = literal.as_bytes();
    let rest = cursor.rest();
    if rest.len() >= literal.len() && rest[..literal.len()].eq_ignore_ascii_case(literal) {
        cursor.advance(literal.len());
        true
    } else {
        false
    }
}

/// Matches an optional `+`/`-` sign followed by one or more decimal
/// digits, consuming them and returning the signed value.
///
/// Fails with [`Error::MalformedInput`] when no digit follows (a lone
/// sign may have been consumed), and with [`Error::OutOfRange`] when the
/// value does not fit in an `i32`.
pub fn match_number(cursor: &mut Cursor<'_>) -> Result<i32, Error> {
    match_digits(cursor).map(|(value, _)| value)
}

/// Same as [`match_number`], but also reports how many digits were
/// consumed. The two-digit-year expansion needs the digit count.
pub fn match_digits(cursor: &mut Cursor<'_>) -> Result<(i32, usize), Error> {
    let negative = match cursor.peek() {
        Some(b'+') => {
            cursor.advance(1);
            false
        }
        Some(b'-') => {
            cursor.advance(1);
            true
        }
        _ => false,
    };

    let rest = cursor.rest();
    let ndigits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if ndigits == 0 {
        return Err(Error::MalformedInput);
    }

    let mut value: i64 = 0;
    for &b in &rest[..ndigits] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or(Error::OutOfRange)?;
    }
    if negative {
        value = -value;
    }
    cursor.advance(ndigits);
    i32::try_from(value).map(|v| (v, ndigits)).map_err(|_| Error::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_prefix() {
        const NAMES: [&str; 3] = ["Sun", "Mon", "Tue"];

        let mut cursor = Cursor::new("monday");
        assert_eq!(match_prefix(&NAMES, &mut cursor), Some(2));
        assert_eq!(cursor.rest(), b"day");

        let mut cursor = Cursor::new("TUESDAY");
        assert_eq!(match_prefix(&NAMES, &mut cursor), Some(3));

        // no match leaves the cursor alone
        let mut cursor = Cursor::new("Fri");
        assert_eq!(match_prefix(&NAMES, &mut cursor), None);
        assert_eq!(cursor.pos(), 0);

        // short input cannot match longer entries
        let mut cursor = Cursor::new("Mo");
        assert_eq!(match_prefix(&NAMES, &mut cursor), None);
    }

    #[test]
    fn test_match_prefix_prefers_first_entry() {
        // the first entry that fits wins, even if a later one also fits
        const NAMES: [&str; 2] = ["Ju", "June"];
        let mut cursor = Cursor::new("June");
        assert_eq!(match_prefix(&NAMES, &mut cursor), Some(1));
        assert_eq!(cursor.rest(), b"ne");
    }

    #[test]
    fn test_match_string() {
        let mut cursor = Cursor::new("pm!");
        assert!(match_string("PM", &mut cursor));
        assert_eq!(cursor.rest(), b"!");

        let mut cursor = Cursor::new("a.m.");
        assert!(!match_string("AM", &mut cursor));
        assert_eq!(cursor.pos(), 0);

        let mut cursor = Cursor::new("");
        assert!(!match_string("AM", &mut cursor));
    }

    #[test]
    fn test_match_number() {
        let mut cursor = Cursor::new("123x");
        assert_eq!(match_number(&mut cursor), Ok(123));
        assert_eq!(cursor.rest(), b"x");

        let mut cursor = Cursor::new("-42");
        assert_eq!(match_number(&mut cursor), Ok(-42));

        let mut cursor = Cursor::new("+0000 rest");
        assert_eq!(match_number(&mut cursor), Ok(0));
        assert_eq!(cursor.rest(), b" rest");

        let mut cursor = Cursor::new("abc");
        assert_eq!(match_number(&mut cursor), Err(Error::MalformedInput));
        assert_eq!(cursor.pos(), 0);

        let mut cursor = Cursor::new("");
        assert_eq!(match_number(&mut cursor), Err(Error::MalformedInput));

        // a lone sign fails, and the sign may stay consumed
        let mut cursor = Cursor::new("+x");
        assert_eq!(match_number(&mut cursor), Err(Error::MalformedInput));

        let mut cursor = Cursor::new("99999999999999999999");
        assert_eq!(match_number(&mut cursor), Err(Error::OutOfRange));
    }

    #[test]
    fn test_match_digits_counts() {
        let mut cursor = Cursor::new("69,");
        assert_eq!(match_digits(&mut cursor), Ok((69, 2)));

        let mut cursor = Cursor::new("2024");
        assert_eq!(match_digits(&mut cursor), Ok((2024, 4)));

        let mut cursor = Cursor::new("-05");
        assert_eq!(match_digits(&mut cursor), Ok((-5, 2)));
    }
}
