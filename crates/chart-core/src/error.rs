// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for parsing, scaling, layout and data loading.

use std::fmt;

use thiserror::Error;

/// Why a single raw row could not become a [`crate::record::Record`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("date field {0:?} has no month/day prefix")]
    MalformedDate(String),
    #[error("count field {0:?} is not an integer")]
    MalformedCount(String),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

/// A per-row parse failure. `row` is 1-based, counting data rows only.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("row {row}: {kind}")]
pub struct ParseError {
    pub row: usize,
    pub kind: ParseErrorKind,
}

/// Every row that failed during ingestion. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateParseError {
    pub errors: Vec<ParseError>,
}

impl AggregateParseError {
    /// Rows (1-based) that failed, in input order.
    pub fn rows(&self) -> Vec<usize> {
        self.errors.iter().map(|e| e.row).collect()
    }
}

impl fmt::Display for AggregateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} malformed row(s)", self.errors.len())?;
        for e in &self.errors {
            write!(f, "; {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateParseError {}

/// Failure to acquire the source table.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decoding csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Top-level error for one chart run. Every variant is terminal for that run.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Parse(#[from] AggregateParseError),
    #[error("cannot build a {axis} scale over an empty domain")]
    EmptyDomain { axis: &'static str },
    #[error("year group {year:?} has no points to anchor a label")]
    EmptyGroup { year: String },
    #[error("margins ({horizontal}x{vertical}) exceed canvas size {width}x{height}")]
    InvalidLayout {
        width: f64,
        height: f64,
        horizontal: f64,
        vertical: f64,
    },
    #[error("loading data: {0}")]
    Transport(#[from] TransportError),
    #[error("render surface: {0}")]
    Surface(String),
    #[error("invalid chart config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
