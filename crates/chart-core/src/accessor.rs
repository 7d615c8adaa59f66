// File: crates/chart-core/src/accessor.rs
// Summary: Strategy for pulling scale domain values out of a Record.

use chrono::NaiveDate;

use crate::record::Record;

/// Extracts the x (time) and y (value) domain values of a record.
pub trait Accessors {
    fn x(&self, record: &Record) -> NaiveDate;
    fn y(&self, record: &Record) -> f64;
}

/// x = parsed month/day, y = count.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateCount;

impl Accessors for DateCount {
    #[inline]
    fn x(&self, record: &Record) -> NaiveDate { record.date() }
    #[inline]
    fn y(&self, record: &Record) -> f64 { record.count() as f64 }
}
