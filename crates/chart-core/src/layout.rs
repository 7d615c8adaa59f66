// File: crates/chart-core/src/layout.rs
// Summary: Chart dimensions with derived bounded (inside-margin) size.

use crate::error::{ChartError, Result};
use crate::types::Margin;

/// Overall chart size, margins, and the derived bounded area.
///
/// Fields are private so the bounded size is always recomputed from the
/// current width, height and margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
    margin: Margin,
    bounded_width: f64,
    bounded_height: f64,
}

impl Dimensions {
    /// Validate and derive the bounded area. Margins larger than the canvas fail.
    pub fn compute_bounded(width: f64, height: f64, margin: Margin) -> Result<Self> {
        let invalid = || ChartError::InvalidLayout {
            width,
            height,
            horizontal: margin.hsum(),
            vertical: margin.vsum(),
        };
        let sides = [width, height, margin.top, margin.right, margin.bottom, margin.left];
        if sides.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(invalid());
        }
        let bounded_width = width - margin.hsum();
        let bounded_height = height - margin.vsum();
        if bounded_width < 0.0 || bounded_height < 0.0 {
            return Err(invalid());
        }
        Ok(Self { width, height, margin, bounded_width, bounded_height })
    }

    /// Width as a share of an externally measured viewport.
    pub fn for_viewport(viewport_width: f64, fraction: f64, height: f64, margin: Margin) -> Result<Self> {
        Self::compute_bounded(viewport_width * fraction, height, margin)
    }

    pub fn resized(&self, width: f64, height: f64) -> Result<Self> {
        Self::compute_bounded(width, height, self.margin)
    }

    pub fn with_margin(&self, margin: Margin) -> Result<Self> {
        Self::compute_bounded(self.width, self.height, margin)
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn margin(&self) -> Margin { self.margin }
    pub fn bounded_width(&self) -> f64 { self.bounded_width }
    pub fn bounded_height(&self) -> f64 { self.bounded_height }
}
