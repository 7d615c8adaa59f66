// File: crates/chart-core/src/record.rs
// Summary: Raw row -> typed Record conversion (month/day date, year key, count).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{ParseError, ParseErrorKind};

/// One row of the source table, keyed by column header.
pub type RawRow = HashMap<String, String>;

/// Calendar year used to anchor month/day dates. A leap year so `2/29` parses.
pub const REFERENCE_YEAR: i32 = 2000;

/// Required column names.
pub const DATE_FIELD: &str = "date";
pub const YEAR_FIELD: &str = "year";
pub const COUNT_FIELD: &str = "count";

/// A typed, immutable observation.
///
/// `date` carries month/day only (anchored at [`REFERENCE_YEAR`]); the year lives in
/// the separate `year` key and the two are never reconciled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    date: NaiveDate,
    year: String,
    count: u64,
    row: usize,
}

impl Record {
    pub fn new(date: NaiveDate, year: impl Into<String>, count: u64, row: usize) -> Self {
        Self { date, year: year.into(), count, row }
    }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn year(&self) -> &str { &self.year }
    pub fn count(&self) -> u64 { self.count }
    /// 1-based source row index.
    pub fn row(&self) -> usize { self.row }

    /// The date rendered back as unpadded `M/D`.
    pub fn month_day(&self) -> String {
        format!("{}/{}", self.date.month(), self.date.day())
    }
}

/// Converts raw rows into [`Record`]s.
pub struct RecordParser {
    date_prefix: Regex,
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            date_prefix: Regex::new(r"^(\d{1,2})/(\d{1,2})").expect("date prefix pattern is valid"),
        }
    }

    /// Parse row number `row` (1-based) into a [`Record`].
    pub fn parse(&self, row: usize, raw: &RawRow) -> Result<Record, ParseError> {
        let fail = |kind| ParseError { row, kind };

        let date_field = field(raw, DATE_FIELD).map_err(fail)?;
        let year = field(raw, YEAR_FIELD).map_err(fail)?;
        let count_field = field(raw, COUNT_FIELD).map_err(fail)?;

        let date = self.parse_date(date_field).map_err(fail)?;
        let count = count_field
            .trim()
            .parse::<u64>()
            .map_err(|_| fail(ParseErrorKind::MalformedCount(count_field.to_string())))?;

        Ok(Record::new(date, year, count, row))
    }

    /// Extract the leading `M/D` of `s` as a reference-year date.
    pub fn parse_date(&self, s: &str) -> Result<NaiveDate, ParseErrorKind> {
        let malformed = || ParseErrorKind::MalformedDate(s.to_string());
        let caps = self.date_prefix.captures(s).ok_or_else(malformed)?;
        let month: u32 = caps[1].parse().map_err(|_| malformed())?;
        let day: u32 = caps[2].parse().map_err(|_| malformed())?;
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).ok_or_else(malformed)
    }
}

impl Default for RecordParser {
    fn default() -> Self { Self::new() }
}

fn field<'a>(raw: &'a RawRow, name: &'static str) -> Result<&'a str, ParseErrorKind> {
    raw.get(name).map(String::as_str).ok_or(ParseErrorKind::MissingField(name))
}
