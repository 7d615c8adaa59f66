// File: crates/chart-core/src/surface.rs
// Summary: Render-target abstraction (primitive draw calls) and the per-run RenderContext.

use crate::error::Result;
use crate::geometry::{PathData, Point};
use crate::layout::Dimensions;
use crate::types::Rgba;

/// Handle to a group on a surface. `GroupId::ROOT` is the canvas itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

impl GroupId {
    pub const ROOT: GroupId = GroupId(0);
}

/// Translation applied to a group's children.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    pub dx: f64,
    pub dy: f64,
}

impl Transform {
    pub const fn translate(dx: f64, dy: f64) -> Self { Self { dx, dy } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient vector in [0, 1].
    pub offset: f64,
    pub color: Rgba,
}

/// Linear gradient in object-bounding-box units (fractions of the shape's box).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Top-to-bottom gradient with `colors` spread evenly.
    pub fn vertical(id: impl Into<String>, colors: &[Rgba]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop { offset: i as f64 / last, color })
            .collect();
        Self { id: id.into(), start: Point::new(0.0, 0.0), end: Point::new(0.0, 1.0), stops }
    }
}

/// Primitive drawing operations a backend must provide.
///
/// Classes are style hooks; backends resolve them to paint however they like.
pub trait Surface {
    /// Allocate the canvas. Called exactly once, before any other call.
    fn create_canvas(&mut self, width: f64, height: f64) -> Result<()>;
    fn append_group(&mut self, parent: GroupId, transform: Transform, class: Option<&str>) -> GroupId;
    fn define_linear_gradient(&mut self, parent: GroupId, gradient: &LinearGradient);
    fn draw_circle(&mut self, parent: GroupId, center: Point, radius: f64, class: &str);
    fn draw_path(&mut self, parent: GroupId, path: &PathData, class: &str);
    fn draw_text(&mut self, parent: GroupId, at: Point, text: &str, class: &str);
}

/// Explicit drawing state for one run: the surface plus the computed dimensions.
pub struct RenderContext<'s> {
    surface: &'s mut dyn Surface,
    dims: Dimensions,
    bounds: GroupId,
}

impl<'s> RenderContext<'s> {
    /// Create the canvas and the bounds group translated by the left/top margins.
    pub fn open(surface: &'s mut dyn Surface, dims: Dimensions) -> Result<Self> {
        surface.create_canvas(dims.width(), dims.height())?;
        let m = dims.margin();
        let bounds = surface.append_group(GroupId::ROOT, Transform::translate(m.left, m.top), None);
        Ok(Self { surface, dims, bounds })
    }

    pub fn dims(&self) -> &Dimensions { &self.dims }
    /// Group whose origin is the bounded area's top-left corner.
    pub fn bounds(&self) -> GroupId { self.bounds }

    pub fn group(&mut self, parent: GroupId, transform: Transform, class: Option<&str>) -> GroupId {
        self.surface.append_group(parent, transform, class)
    }
    pub fn gradient(&mut self, parent: GroupId, gradient: &LinearGradient) {
        self.surface.define_linear_gradient(parent, gradient);
    }
    pub fn circle(&mut self, parent: GroupId, center: Point, radius: f64, class: &str) {
        self.surface.draw_circle(parent, center, radius, class);
    }
    pub fn path(&mut self, parent: GroupId, path: &PathData, class: &str) {
        self.surface.draw_path(parent, path, class);
    }
    pub fn text(&mut self, parent: GroupId, at: Point, text: &str, class: &str) {
        self.surface.draw_text(parent, at, text, class);
    }
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Canvas { width: f64, height: f64 },
    Group { id: GroupId, parent: GroupId, transform: Transform, class: Option<String> },
    Gradient { parent: GroupId, gradient: LinearGradient },
    Circle { parent: GroupId, center: Point, radius: f64, class: String },
    Path { parent: GroupId, path: PathData, class: String },
    Text { parent: GroupId, at: Point, text: String, class: String },
}

/// Surface that only records calls; for headless inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    next_group: usize,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn create_canvas(&mut self, width: f64, height: f64) -> Result<()> {
        self.calls.push(DrawCall::Canvas { width, height });
        Ok(())
    }
    fn append_group(&mut self, parent: GroupId, transform: Transform, class: Option<&str>) -> GroupId {
        self.next_group += 1;
        let id = GroupId(self.next_group);
        self.calls.push(DrawCall::Group { id, parent, transform, class: class.map(str::to_string) });
        id
    }
    fn define_linear_gradient(&mut self, parent: GroupId, gradient: &LinearGradient) {
        self.calls.push(DrawCall::Gradient { parent, gradient: gradient.clone() });
    }
    fn draw_circle(&mut self, parent: GroupId, center: Point, radius: f64, class: &str) {
        self.calls.push(DrawCall::Circle { parent, center, radius, class: class.to_string() });
    }
    fn draw_path(&mut self, parent: GroupId, path: &PathData, class: &str) {
        self.calls.push(DrawCall::Path { parent, path: path.clone(), class: class.to_string() });
    }
    fn draw_text(&mut self, parent: GroupId, at: Point, text: &str, class: &str) {
        self.calls.push(DrawCall::Text { parent, at, text: text.to_string(), class: class.to_string() });
    }
}
