// File: crates/chart-core/tests/record.rs
// Purpose: Row parsing: month/day prefix extraction, count conversion, error kinds.

use chart_core::record::{RawRow, RecordParser, REFERENCE_YEAR};
use chart_core::ParseErrorKind;
use chrono::{Datelike, NaiveDate};

fn row(date: &str, year: &str, count: &str) -> RawRow {
    RawRow::from([
        ("date".to_string(), date.to_string()),
        ("year".to_string(), year.to_string()),
        ("count".to_string(), count.to_string()),
    ])
}

#[test]
fn parses_month_day_prefix_and_count() {
    let parser = RecordParser::new();
    let r = parser.parse(1, &row("3/14/2021 (week 11)", "2021", "42")).expect("valid row");
    assert_eq!(r.date(), NaiveDate::from_ymd_opt(REFERENCE_YEAR, 3, 14).unwrap());
    assert_eq!(r.year(), "2021");
    assert_eq!(r.count(), 42);
    assert_eq!(r.row(), 1);
}

#[test]
fn month_day_round_trips_for_every_calendar_day() {
    let parser = RecordParser::new();
    let mut d = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1).unwrap();
    while d.year() == REFERENCE_YEAR {
        let text = format!("{}/{}", d.month(), d.day());
        let r = parser.parse(7, &row(&text, "2000", "5")).expect("calendar day parses");
        assert_eq!(r.date(), d);
        assert_eq!(r.month_day(), text);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn leap_day_is_accepted() {
    let parser = RecordParser::new();
    let r = parser.parse(1, &row("2/29", "2021", "1")).expect("leap day");
    assert_eq!((r.date().month(), r.date().day()), (2, 29));
}

#[test]
fn zero_padded_prefix_parses() {
    let parser = RecordParser::new();
    let r = parser.parse(1, &row("01/05", "2020", "10")).expect("padded");
    assert_eq!(r.month_day(), "1/5");
}

#[test]
fn date_without_prefix_is_malformed() {
    let parser = RecordParser::new();
    for bad in ["", "Jan 5", " 1/5", "2020-01-05", "/5", "123/4"] {
        let err = parser.parse(3, &row(bad, "2020", "1")).expect_err(bad);
        assert_eq!(err.row, 3);
        assert_eq!(err.kind, ParseErrorKind::MalformedDate(bad.to_string()), "input {bad:?}");
    }
}

#[test]
fn impossible_calendar_date_is_malformed() {
    let parser = RecordParser::new();
    let err = parser.parse(2, &row("13/40", "2020", "1")).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MalformedDate(_)));
    let err = parser.parse(2, &row("4/31", "2020", "1")).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MalformedDate(_)));
}

#[test]
fn count_must_be_a_non_negative_integer() {
    let parser = RecordParser::new();
    assert_eq!(parser.parse(1, &row("1/1", "2020", " 17 ")).unwrap().count(), 17);
    for bad in ["", "ten", "1.5", "-3"] {
        let err = parser.parse(4, &row("1/1", "2020", bad)).expect_err(bad);
        assert_eq!(err.kind, ParseErrorKind::MalformedCount(bad.to_string()));
    }
}

#[test]
fn missing_field_is_reported() {
    let parser = RecordParser::new();
    let mut r = row("1/1", "2020", "3");
    r.remove("year");
    let err = parser.parse(9, &r).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingField("year"));
    assert_eq!(err.to_string(), "row 9: missing field `year`");
}
