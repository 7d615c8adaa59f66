// File: crates/chart-core/src/axis.rs
// Summary: Axis model (ticks + labels) derived from a scale, and its draw primitives.

use crate::geometry::{PathData, Point};
use crate::layout::Dimensions;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::surface::{GroupId, RenderContext, Transform};
use crate::ticks::{format_tick, tick_step};

/// Length of tick marks and of the domain path's end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Default tick count requested from the time scale.
pub const TIME_TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Vertical axis; ticks and labels extend left of x = 0.
    Left,
    /// Horizontal axis; ticks and labels extend below y = 0.
    Bottom,
}

impl Orientation {
    /// Translation of an axis group inside the bounds: the bottom axis sits on the
    /// bounded area's lower edge.
    pub fn offset(self, dims: &Dimensions) -> Transform {
        match self {
            Orientation::Left => Transform::default(),
            Orientation::Bottom => Transform::translate(0.0, dims.bounded_height()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    /// Pixel extent of the axis line, taken from the scale's range.
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

/// Ticks for any scale: `count` is a hint passed to the scale, `format` labels each value.
pub fn build_axis<S: Scale>(
    scale: &S,
    orientation: Orientation,
    count: usize,
    format: impl Fn(S::Domain) -> String,
) -> Axis {
    let ticks = scale
        .ticks(count)
        .into_iter()
        .map(|v| AxisTick { offset: scale.apply(v), label: format(v) })
        .collect();
    Axis { orientation, range: scale.range(), ticks }
}

/// Left axis with about `count` round-number ticks.
pub fn value_axis(scale: &LinearScale, count: usize) -> Axis {
    let (d0, d1) = scale.domain();
    let step = tick_step(d0, d1, count);
    build_axis(scale, Orientation::Left, count, |v| format_tick(v, step))
}

/// Bottom axis labelled with abbreviated month names whatever the tick interval.
pub fn time_axis(scale: &TimeScale, count: usize) -> Axis {
    build_axis(scale, Orientation::Bottom, count, |d| d.format("%b").to_string())
}

impl Axis {
    /// Axis line with outer end caps.
    pub fn domain_path(&self) -> PathData {
        let (r0, r1) = self.range;
        let mut p = PathData::new();
        match self.orientation {
            Orientation::Left => {
                p.move_to(Point::new(-TICK_SIZE, r0));
                p.line_to(Point::new(0.0, r0));
                p.line_to(Point::new(0.0, r1));
                p.line_to(Point::new(-TICK_SIZE, r1));
            }
            Orientation::Bottom => {
                p.move_to(Point::new(r0, TICK_SIZE));
                p.line_to(Point::new(r0, 0.0));
                p.line_to(Point::new(r1, 0.0));
                p.line_to(Point::new(r1, TICK_SIZE));
            }
        }
        p
    }

    /// Tick mark path and label anchor for one tick.
    pub fn tick_geometry(&self, tick: &AxisTick) -> (PathData, Point) {
        let mut mark = PathData::new();
        let o = tick.offset;
        let label_gap = TICK_SIZE + TICK_PADDING;
        match self.orientation {
            Orientation::Left => {
                mark.move_to(Point::new(0.0, o));
                mark.line_to(Point::new(-TICK_SIZE, o));
                (mark, Point::new(-label_gap, o))
            }
            Orientation::Bottom => {
                mark.move_to(Point::new(o, 0.0));
                mark.line_to(Point::new(o, TICK_SIZE));
                (mark, Point::new(o, label_gap))
            }
        }
    }

    fn label_class(&self) -> &'static str {
        match self.orientation {
            Orientation::Left => "tick-label tick-label-left",
            Orientation::Bottom => "tick-label tick-label-bottom",
        }
    }

    /// Draw into a new group under `parent` offset by `transform`.
    pub fn draw(&self, ctx: &mut RenderContext<'_>, parent: GroupId, transform: Transform, class: &str) {
        let g = ctx.group(parent, transform, Some(class));
        ctx.path(g, &self.domain_path(), "domain");
        for tick in &self.ticks {
            let (mark, at) = self.tick_geometry(tick);
            ctx.path(g, &mark, "tick");
            ctx.text(g, at, &tick.label, self.label_class());
        }
    }
}
