// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms built from dataset extents.

use chrono::{Days, NaiveDate};

use crate::accessor::Accessors;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::layout::Dimensions;
use crate::ticks::{linear_ticks, nice_domain, time_ticks};

/// Monotonic mapping from a domain value to a pixel coordinate.
pub trait Scale {
    type Domain: Copy;
    fn apply(&self, v: Self::Domain) -> f64;
    fn invert(&self, px: f64) -> Self::Domain;
    fn domain(&self) -> (Self::Domain, Self::Domain);
    fn range(&self) -> (f64, f64);
    /// Evenly spaced (in domain terms) tick values, roughly `count` of them.
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
}

/// Linear value scale. The range may be inverted (`r0 > r1`) for SVG-style y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Round the domain outward so ticks land on round numbers.
    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = nice_domain(self.d0, self.d1, count);
        Self { d0, d1, ..self }
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    #[inline]
    fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    #[inline]
    fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.d0, self.d1, count)
    }
}

/// Date scale mapped linearly by elapsed days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    d0: NaiveDate,
    d1: NaiveDate,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    fn span_days(&self) -> f64 {
        (self.d1 - self.d0).num_days() as f64
    }
}

impl Scale for TimeScale {
    type Domain = NaiveDate;

    #[inline]
    fn apply(&self, d: NaiveDate) -> f64 {
        let span = self.span_days();
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        let t = (d - self.d0).num_days() as f64 / span;
        self.r0 + t * (self.r1 - self.r0)
    }

    fn invert(&self, px: f64) -> NaiveDate {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        let days = ((px - self.r0) / span * self.span_days()).round() as i64;
        let shifted = if days >= 0 {
            self.d0.checked_add_days(Days::new(days as u64))
        } else {
            self.d0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.unwrap_or(self.d0)
    }

    fn domain(&self) -> (NaiveDate, NaiveDate) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        time_ticks(self.d0, self.d1, count)
    }
}

/// Linear scale over the extent of `values`, optionally niced with `nice_count`.
pub fn build_linear_scale(
    values: impl IntoIterator<Item = f64>,
    range: (f64, f64),
    nice_count: Option<usize>,
) -> Result<LinearScale> {
    let (lo, hi) = extent(values, f64::min, f64::max).ok_or(ChartError::EmptyDomain { axis: "value" })?;
    let scale = LinearScale::new((lo, hi), range);
    Ok(match nice_count {
        Some(n) => scale.nice(n),
        None => scale,
    })
}

/// Time scale over the extent of `dates`. Not niced.
pub fn build_time_scale(
    dates: impl IntoIterator<Item = NaiveDate>,
    range: (f64, f64),
) -> Result<TimeScale> {
    let (lo, hi) = extent(dates, NaiveDate::min, NaiveDate::max).ok_or(ChartError::EmptyDomain { axis: "time" })?;
    Ok(TimeScale::new((lo, hi), range))
}

fn extent<T: Copy>(
    values: impl IntoIterator<Item = T>,
    min: impl Fn(T, T) -> T,
    max: impl Fn(T, T) -> T,
) -> Option<(T, T)> {
    values
        .into_iter()
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((min(lo, v), max(hi, v))),
        })
}

/// The pair of scales for one chart run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl Scales {
    /// x over [0, bounded width]; y over [bounded height, 0] niced with `nice_count`.
    pub fn build<A: Accessors>(
        dataset: &Dataset,
        accessors: &A,
        dims: &Dimensions,
        nice_count: usize,
    ) -> Result<Self> {
        let records = dataset.records();
        let y = build_linear_scale(
            records.iter().map(|r| accessors.y(r)),
            (dims.bounded_height(), 0.0),
            Some(nice_count),
        )?;
        let x = build_time_scale(records.iter().map(|r| accessors.x(r)), (0.0, dims.bounded_width()))?;
        Ok(Self { x, y })
    }

    /// Pixel position of a record inside the bounded area.
    pub fn project<A: Accessors>(&self, accessors: &A, record: &crate::record::Record) -> Point {
        Point::new(self.x.apply(accessors.x(record)), self.y.apply(accessors.y(record)))
    }
}
