// File: crates/chart-core/src/dataset.rs
// Summary: Ordered record collection with stable date sort and year grouping.

use indexmap::IndexMap;

use crate::error::AggregateParseError;
use crate::record::{RawRow, Record, RecordParser};

/// Records owned by one chart run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

/// Records sharing one raw `year` key, in dataset order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearGroup<'a> {
    pub year: &'a str,
    pub records: Vec<&'a Record>,
}

impl YearGroup<'_> {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn last(&self) -> Option<&Record> { self.records.last().copied() }
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self { Self { records } }

    /// Parse every row; if any fail, report all of them and keep nothing.
    pub fn from_rows(rows: &[RawRow], parser: &RecordParser) -> Result<Self, AggregateParseError> {
        let mut records = Vec::with_capacity(rows.len());
        let mut errors = Vec::new();
        for (i, raw) in rows.iter().enumerate() {
            match parser.parse(i + 1, raw) {
                Ok(r) => records.push(r),
                Err(e) => errors.push(e),
            }
        }
        if errors.is_empty() { Ok(Self { records }) } else { Err(AggregateParseError { errors }) }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Stable ascending sort by parsed date; records sharing a date keep input order.
    pub fn sort_by_date(mut self) -> Self {
        self.records.sort_by_key(Record::date);
        self
    }

    pub fn is_sorted_by_date(&self) -> bool {
        self.records.windows(2).all(|w| w[0].date() <= w[1].date())
    }

    /// Partition by the raw year key, groups in first-seen order.
    pub fn group_by_year(&self) -> Vec<YearGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&Record>> = IndexMap::new();
        for r in &self.records {
            groups.entry(r.year()).or_default().push(r);
        }
        groups.into_iter().map(|(year, records)| YearGroup { year, records }).collect()
    }
}
