// This is a part of datecast.
// See README.md for details.

//! The conversion orchestrator.
//!
//! [`Converter`] ties the whole pipeline together: parse the input with
//! an explicit format pair or by autodetection, default the fields the
//! input left out from the clock's "now", validate, map local time to
//! universal time through the [`Clock`], and render with the requested
//! output format(s).

use crate::clock::Clock;
use crate::datetime::{DateTime, ValidItems};
use crate::format::{self, parse_format, Cursor};
use crate::locale::{Locale, DATE_ITEMS, ENGLISH, INTERNET_DATE};
use crate::Error;

/// The default two-digit-year boundary: "69" is 2069, "70" is 1970.
pub const DEFAULT_CENTURY_CUTOFF: i32 = 70;

/// Names one of the nine catalog formats.
///
/// The date and time formats resolve against a locale; the internet date
/// and the date-items encoding are locale-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatId {
    /// `Friday, March 15, 2024`
    LongDate,
    /// `Fri, Mar 15, 2024`
    AbbrevDate,
    /// `3/15/24`
    ShortDate,
    /// `2:30:00 PM`
    LongTime,
    /// `2:30 PM`
    ShortTime,
    /// `14:30:00`
    LongTime24,
    /// `14:30`
    ShortTime24,
    /// `Fri, 15 Mar 2024 14:30:00 +0000`
    InternetDate,
    /// `2024,3,15,14,30,0,6`
    DateItems,
}

/// The four time formats, in fallback priority order.
const TIME_CASCADE: [FormatId; 4] =
    [FormatId::LongTime, FormatId::ShortTime, FormatId::LongTime24, FormatId::ShortTime24];

/// The three date formats, in fallback priority order.
const DATE_CASCADE: [FormatId; 3] =
    [FormatId::LongDate, FormatId::AbbrevDate, FormatId::ShortDate];

impl FormatId {
    /// The format string this identifier stands for in the given locale.
    pub fn pattern(self, locale: &Locale) -> &'static str {
        match self {
            FormatId::LongDate => locale.long_date,
            FormatId::AbbrevDate => locale.abbrev_date,
            FormatId::ShortDate => locale.short_date,
            FormatId::LongTime => locale.long_time,
            FormatId::ShortTime => locale.short_time,
            FormatId::LongTime24 => locale.long_time24,
            FormatId::ShortTime24 => locale.short_time24,
            FormatId::InternetDate => INTERNET_DATE,
            FormatId::DateItems => DATE_ITEMS,
        }
    }

    /// True for the time-only formats, which parse through the
    /// English-first fallback cascade instead of a single attempt.
    pub fn is_time(self) -> bool {
        matches!(
            self,
            FormatId::LongTime | FormatId::ShortTime | FormatId::LongTime24 | FormatId::ShortTime24
        )
    }
}

/// A primary format with an optional secondary one following it in the
/// text, typically a date format paired with a time format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatPair {
    /// The format expected (or rendered) first.
    pub primary: FormatId,
    /// An optional format following the primary in the text.
    pub secondary: Option<FormatId>,
}

impl FormatPair {
    /// A pair of just the primary format.
    pub const fn new(primary: FormatId) -> FormatPair {
        FormatPair { primary, secondary: None }
    }

    /// A primary format followed by a secondary one.
    pub const fn with(primary: FormatId, secondary: FormatId) -> FormatPair {
        FormatPair { primary, secondary: Some(secondary) }
    }
}

impl From<FormatId> for FormatPair {
    fn from(primary: FormatId) -> FormatPair {
        FormatPair::new(primary)
    }
}

/// The conversion pipeline: a locale, a clock and a century cutoff.
#[derive(Clone, Copy, Debug)]
pub struct Converter<C> {
    locale: &'static Locale,
    clock: C,
    century_cutoff: i32,
}

impl<C: Clock> Converter<C> {
    /// A converter over the English locale with the default century
    /// cutoff.
    pub fn new(clock: C) -> Converter<C> {
        Converter { locale: &ENGLISH, clock, century_cutoff: DEFAULT_CENTURY_CUTOFF }
    }

    /// Replaces the locale used for name tables and format strings.
    pub fn with_locale(mut self, locale: &'static Locale) -> Converter<C> {
        self.locale = locale;
        self
    }

    /// Replaces the two-digit-year boundary.
    pub fn with_century_cutoff(mut self, cutoff: i32) -> Converter<C> {
        self.century_cutoff = cutoff;
        self
    }

    /// Parses `input` and renders it back with `to`. Equivalent to
    /// [`parse`](Converter::parse) followed by
    /// [`render`](Converter::render).
    pub fn convert(
        &self,
        input: &str,
        from: Option<FormatPair>,
        to: FormatPair,
    ) -> Result<String, Error> {
        let record = self.parse(input, from)?;
        self.render(&record, to)
    }

    /// Parses `input` into a canonical universal-time record.
    ///
    /// With `from` given, the input must consist of the named format(s);
    /// with `None` the catalog is tried in priority order: the date-items
    /// encoding, the internet date, then an interleaved scan for a date
    /// and a time in free order. Missing fields default from the clock's
    /// current local time (date fields independently) or to zero (time
    /// fields).
    pub fn parse(&self, input: &str, from: Option<FormatPair>) -> Result<DateTime, Error> {
        match from {
            Some(pair) => self.parse_known(input, pair),
            None => self.parse_any(input),
        }
    }

    /// Renders a canonical record with the named format(s). A secondary
    /// format is appended after a single space, except after an internet
    /// date, which is self-contained.
    pub fn render(&self, record: &DateTime, to: FormatPair) -> Result<String, Error> {
        let mut out = format::format(self.locale, to.primary.pattern(self.locale), record)?;
        if to.primary != FormatId::InternetDate {
            if let Some(secondary) = to.secondary {
                out.push(' ');
                format::format_into(&mut out, self.locale, secondary.pattern(self.locale), record)?;
            }
        }
        Ok(out)
    }

    fn parse_known(&self, input: &str, from: FormatPair) -> Result<DateTime, Error> {
        let mut cursor = Cursor::new(input);
        let mut record = DateTime::default();
        let mut items = ValidItems::empty();
        for id in core::iter::once(from.primary).chain(from.secondary) {
            items |= if id.is_time() {
                self.parse_time_at(&mut cursor, &mut record).ok_or(Error::MalformedInput)?
            } else {
                parse_format(
                    self.locale,
                    self.century_cutoff,
                    true,
                    id.pattern(self.locale),
                    &mut cursor,
                    &mut record,
                )?
            };
        }
        if !cursor.rest_is_whitespace() {
            return Err(Error::MalformedInput);
        }
        self.finish(record, items)
    }

    fn parse_any(&self, input: &str) -> Result<DateTime, Error> {
        // the lossless machine encoding wins outright
        if let Ok((mut record, _)) =
            format::parse(self.locale, DATE_ITEMS, input, false, self.century_cutoff)
        {
            record.normalize();
            return self.clock.local_to_universal(record);
        }

        // an internet date carries its own bias and is already absolute,
        // so it bypasses the clock entirely
        if let Ok((mut record, _)) =
            format::parse(self.locale, INTERNET_DATE, input, false, self.century_cutoff)
        {
            if !record.validate() {
                return Err(Error::OutOfRange);
            }
            record.minute -= record.bias;
            record.bias = 0;
            record.normalize();
            return Ok(record);
        }

        // free-order scan: a date and a time may appear in either order
        let mut cursor = Cursor::new(input);
        let mut record = DateTime::default();
        let mut items = ValidItems::empty();
        while !cursor.rest_is_whitespace() && !items.contains(ValidItems::DATE | ValidItems::TIME) {
            let mark = cursor.pos();
            if !items.contains(ValidItems::DATE) {
                for id in DATE_CASCADE {
                    if let Some(found) =
                        self.attempt(self.locale, id.pattern(self.locale), &mut cursor, &mut record)
                    {
                        items |= found;
                        break;
                    }
                }
            }
            if !items.contains(ValidItems::TIME) {
                if let Some(found) = self.parse_time_at(&mut cursor, &mut record) {
                    items |= found;
                }
            }
            if cursor.pos() == mark {
                break;
            }
        }
        if !cursor.rest_is_whitespace() {
            return Err(Error::MalformedInput);
        }
        self.finish(record, items)
    }

    /// Tries the four time formats against the English locale first and
    /// the converter's own locale second.
    fn parse_time_at(&self, cursor: &mut Cursor<'_>, record: &mut DateTime) -> Option<ValidItems> {
        for locale in [&ENGLISH, self.locale] {
            for id in TIME_CASCADE {
                if let Some(items) = self.attempt(locale, id.pattern(locale), cursor, record) {
                    return Some(items);
                }
            }
            if core::ptr::eq(self.locale, &ENGLISH) {
                break;
            }
        }
        None
    }

    /// One loose parse attempt; on failure the cursor is rewound.
    fn attempt(
        &self,
        locale: &Locale,
        pattern: &str,
        cursor: &mut Cursor<'_>,
        record: &mut DateTime,
    ) -> Option<ValidItems> {
        let mark = cursor.pos();
        match parse_format(locale, self.century_cutoff, true, pattern, cursor, record) {
            Ok(items) => Some(items),
            Err(_) => {
                cursor.set_pos(mark);
                None
            }
        }
    }

    /// Defaulting, validation and the local-to-universal hop shared by
    /// every parse path that does not produce an absolute time itself.
    fn finish(&self, mut record: DateTime, items: ValidItems) -> Result<DateTime, Error> {
        let now = self.clock.now_local()?;
        // date fields default one by one, not as a whole date
        if !items.contains(ValidItems::YEAR) {
            record.year = now.year;
        }
        if !items.contains(ValidItems::MONTH) {
            record.month = now.month;
        }
        if !items.contains(ValidItems::DAY) {
            record.day = now.day;
        }
        if !items.contains(ValidItems::HOUR) {
            record.hour = 0;
            record.minute = 0;
            record.second = 0;
            record.bias = 0;
        } else if !items.contains(ValidItems::SECOND) {
            record.second = 0;
        }
        if !record.validate() {
            return Err(Error::OutOfRange);
        }
        self.clock.local_to_universal(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn converter() -> Converter<FixedClock> {
        Converter::new(FixedClock::utc(DateTime::new(2024, 3, 15, 14, 30, 45)))
    }

    #[test]
    fn test_autodetect_date_items() {
        let dt = converter().parse("2024,3,15,14,30,0,6", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
    }

    #[test]
    fn test_autodetect_internet_date_applies_bias() {
        let dt = converter().parse("Fri, 15 Mar 2024 14:30:00 +0000", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
        assert_eq!(dt.bias, 0);

        // 14:30 at UTC-5 is 19:30 universal
        let dt = converter().parse("Fri, 15 Mar 2024 14:30:00 -0500", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 19, 30, 0));
    }

    #[test]
    fn test_autodetect_free_order_scan() {
        let dt = converter().parse("3/15/2024 10:30 PM", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 22, 30, 0));

        // time before date works too
        let dt = converter().parse("10:30 PM 3/15/2024", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 22, 30, 0));

        let dt = converter().parse("Friday, March 15, 2024 14:30:00", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
    }

    #[test]
    fn test_time_only_defaults_date_from_clock() {
        let dt = converter().parse("14:30", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));
    }

    #[test]
    fn test_date_only_defaults_time_to_midnight() {
        let dt = converter().parse("3/15/24", None).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 0, 0, 0));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert_eq!(converter().parse("3/15/24 nonsense", None), Err(Error::MalformedInput));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(converter().parse("13/45/24", None), Err(Error::OutOfRange));
    }

    #[test]
    fn test_explicit_from_formats() {
        let c = converter();
        let from = FormatPair::with(FormatId::ShortDate, FormatId::ShortTime24);
        let dt = c.parse("3/15/24 14:30", Some(from)).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 0));

        // the named format must actually match
        assert_eq!(
            c.parse("3/15/24", Some(FormatPair::new(FormatId::LongDate))),
            Err(Error::MalformedInput)
        );
    }

    #[test]
    fn test_render_pair_and_internet_special_case() {
        let c = converter();
        let dt = DateTime::new(2024, 3, 15, 14, 30, 0);
        assert_eq!(
            c.render(&dt, FormatPair::with(FormatId::ShortDate, FormatId::ShortTime24)).unwrap(),
            "3/15/24 14:30"
        );
        // an internet date is self-contained; the secondary is dropped
        assert_eq!(
            c.render(&dt, FormatPair::with(FormatId::InternetDate, FormatId::ShortTime24)).unwrap(),
            "Fri, 15 Mar 2024 14:30:00 +0000"
        );
    }

    #[test]
    fn test_convert_end_to_end() {
        let out = converter()
            .convert("3/15/24 2:30 PM", None, FormatPair::new(FormatId::InternetDate))
            .unwrap();
        assert_eq!(out, "Fri, 15 Mar 2024 14:30:00 +0000");
    }
}
