// File: crates/chart-core/src/source.rs
// Summary: Asynchronous row sources (CSV file, in-memory) feeding the pipeline.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportError;
use crate::record::{RawRow, COUNT_FIELD, DATE_FIELD, YEAR_FIELD};

/// Where the source table comes from. The one suspension point of a run.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn load(&self) -> Result<Vec<RawRow>, TransportError>;
}

/// Headered CSV file read with tokio.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
    pub fn path(&self) -> &Path { &self.path }
}

#[async_trait]
impl RowSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<RawRow>, TransportError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| TransportError::Io { path: self.path.display().to_string(), source })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read csv");
        parse_csv(&bytes)
    }
}

/// Rows already in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    rows: Vec<RawRow>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RawRow>) -> Self { Self { rows } }

    /// Build rows from `(date, year, count)` triples.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let rows = triples
            .into_iter()
            .map(|(date, year, count)| {
                RawRow::from([
                    (DATE_FIELD.to_string(), date.to_string()),
                    (YEAR_FIELD.to_string(), year.to_string()),
                    (COUNT_FIELD.to_string(), count.to_string()),
                ])
            })
            .collect();
        Self { rows }
    }
}

#[async_trait]
impl RowSource for InMemorySource {
    async fn load(&self) -> Result<Vec<RawRow>, TransportError> {
        Ok(self.rows.clone())
    }
}

/// Decode headered CSV bytes into header -> value rows.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRow>, TransportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);
    let headers = rdr.headers()?.clone();
    rdr.records()
        .map(|rec| -> Result<RawRow, TransportError> {
            let rec = rec?;
            Ok(headers.iter().zip(rec.iter()).map(|(h, v)| (h.to_string(), v.to_string())).collect())
        })
        .collect()
}
