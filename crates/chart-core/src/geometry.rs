// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and path commands.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// One drawing command in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points then the end point.
    CubicTo(Point, Point, Point),
    /// Back to the last `MoveTo`.
    ClosePath,
}

/// An ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }
    pub fn move_to(&mut self, p: Point) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
    }
    pub fn close(&mut self) { self.commands.push(PathCommand::ClosePath); }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// SVG `d` attribute text.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            // Writing to a String cannot fail.
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::CubicTo(a, b, p) => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_num(a.x), fmt_num(a.y), fmt_num(b.x), fmt_num(b.y), fmt_num(p.x), fmt_num(p.y)
                ),
                PathCommand::ClosePath => write!(d, "Z"),
            };
        }
        d
    }
}

/// Shortest stable decimal form: up to 3 fractional digits, trailing zeros dropped.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
