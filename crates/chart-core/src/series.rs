// File: crates/chart-core/src/series.rs
// Summary: Per-year line series: basis-smoothed paths and end-of-line labels.

use crate::accessor::Accessors;
use crate::dataset::YearGroup;
use crate::error::{ChartError, Result};
use crate::geometry::{PathData, Point};
use crate::layout::Dimensions;
use crate::record::Record;
use crate::scale::Scales;

/// Horizontal gap between the bounded area's right edge and a series label.
pub const LABEL_OFFSET: f64 = 8.0;

/// Geometry for one year group.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLine {
    pub year: String,
    pub path: PathData,
    pub label: Point,
}

#[inline]
fn lerp3(a: Point, wa: f64, b: Point, wb: f64, c: Point, wc: f64, div: f64) -> Point {
    Point::new((a.x * wa + b.x * wb + c.x * wc) / div, (a.y * wa + b.y * wb + c.y * wc) / div)
}

fn basis_segment(path: &mut PathData, a: Point, b: Point, c: Point) {
    path.cubic_to(
        lerp3(a, 2.0, b, 1.0, c, 0.0, 3.0),
        lerp3(a, 1.0, b, 2.0, c, 0.0, 3.0),
        lerp3(a, 1.0, b, 4.0, c, 1.0, 6.0),
    );
}

/// Uniform cubic B-spline through `points`, clamped at both ends.
///
/// The curve starts and ends on the first and last point but generally does not
/// pass through the interior ones. A lone point becomes a closed zero-length path.
pub fn curve_basis(points: &[Point]) -> PathData {
    let mut path = PathData::new();
    match points {
        [] => {}
        [p] => {
            path.move_to(*p);
            path.close();
        }
        [a, b] => {
            path.move_to(*a);
            path.line_to(*b);
        }
        [first, second, ..] => {
            path.move_to(*first);
            path.line_to(lerp3(*first, 5.0, *second, 1.0, *second, 0.0, 6.0));
            for w in points.windows(3) {
                basis_segment(&mut path, w[0], w[1], w[2]);
            }
            let n = points.len();
            basis_segment(&mut path, points[n - 2], points[n - 1], points[n - 1]);
            path.line_to(points[n - 1]);
        }
    }
    path
}

/// Smoothed path through the records in their given order (never resorted).
pub fn build_path<A: Accessors>(records: &[&Record], accessors: &A, scales: &Scales) -> PathData {
    let points: Vec<Point> = records.iter().map(|r| scales.project(accessors, r)).collect();
    curve_basis(&points)
}

/// Anchor for a group's label: just right of the bounded area, level with the
/// group's last point.
///
/// Precondition: `group` was produced from a date-sorted dataset, so its last
/// record is its latest date.
pub fn label_position<A: Accessors>(
    group: &YearGroup<'_>,
    accessors: &A,
    scales: &Scales,
    bounded_width: f64,
    offset: f64,
) -> Result<Point> {
    let last = group.last().ok_or_else(|| ChartError::EmptyGroup { year: group.year.to_string() })?;
    Ok(Point::new(bounded_width + offset, scales.project(accessors, last).y))
}

/// Paths and label anchors for every group, in group order.
pub fn build_series<A: Accessors>(
    groups: &[YearGroup<'_>],
    accessors: &A,
    scales: &Scales,
    dims: &Dimensions,
    label_offset: f64,
) -> Result<Vec<SeriesLine>> {
    groups
        .iter()
        .map(|g| {
            let label = label_position(g, accessors, scales, dims.bounded_width(), label_offset)?;
            Ok(SeriesLine { year: g.year.to_string(), path: build_path(&g.records, accessors, scales), label })
        })
        .collect()
}
