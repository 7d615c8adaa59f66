// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the chart Surface; encodes PNG.

use anyhow::Result;
use skia_safe as skia;

use chart_core::error::{ChartError, Result as ChartResult};
use chart_core::geometry::{PathCommand, PathData, Point};
use chart_core::surface::{GroupId, LinearGradient, Surface, Transform};
use chart_core::theme::{has_class, Theme};
use chart_core::Rgba;

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Draws each primitive straight onto a raster canvas as it arrives.
pub struct SkiaSurface {
    theme: Theme,
    surface: Option<skia::Surface>,
    /// Absolute translation per group, indexed by `GroupId`.
    offsets: Vec<(f32, f32)>,
    gradient: Option<LinearGradient>,
    font: skia::Font,
}

impl SkiaSurface {
    pub fn new(theme: Theme) -> Self {
        let mut font = skia::Font::default();
        font.set_size(theme.font_size);
        Self { theme, surface: None, offsets: vec![(0.0, 0.0)], gradient: None, font }
    }

    fn offset(&self, group: GroupId) -> (f32, f32) {
        self.offsets.get(group.0).copied().unwrap_or((0.0, 0.0))
    }

    fn to_skia_path(&self, parent: GroupId, path: &PathData) -> skia::Path {
        let (ox, oy) = self.offset(parent);
        let pt = |p: &Point| skia::Point::new(p.x as f32 + ox, p.y as f32 + oy);
        let mut out = skia::Path::new();
        for cmd in &path.commands {
            match cmd {
                PathCommand::MoveTo(p) => { out.move_to(pt(p)); }
                PathCommand::LineTo(p) => { out.line_to(pt(p)); }
                PathCommand::CubicTo(a, b, p) => { out.cubic_to(pt(a), pt(b), pt(p)); }
                PathCommand::ClosePath => { out.close(); }
            }
        }
        out
    }

    fn line_paint(&self, bounds: skia::Rect) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.theme.line_width);
        paint.set_color(color(self.theme.line_stroke));
        if let Some(g) = &self.gradient {
            // Gradient coordinates are fractions of the path's bounding box.
            let at = |p: Point| {
                skia::Point::new(
                    bounds.left + bounds.width() * p.x as f32,
                    bounds.top + bounds.height().max(1.0) * p.y as f32,
                )
            };
            let colors: Vec<skia::Color> = g.stops.iter().map(|s| color(s.color)).collect();
            let positions: Vec<f32> = g.stops.iter().map(|s| s.offset as f32).collect();
            if let Some(shader) = skia::Shader::linear_gradient(
                (at(g.start), at(g.end)),
                colors.as_slice(),
                Some(positions.as_slice()),
                skia::TileMode::Clamp,
                None,
                None,
            ) {
                paint.set_shader(shader);
            }
        }
        paint
    }

    fn axis_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint.set_color(color(self.theme.axis_line));
        paint
    }

    /// Encode the current canvas as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let surface = self.surface.as_mut().ok_or_else(|| anyhow::anyhow!("canvas was never created"))?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the canvas as a PNG file, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn create_canvas(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let size = (width.round().max(1.0) as i32, height.round().max(1.0) as i32);
        let mut surface = skia::surfaces::raster_n32_premul(size)
            .ok_or_else(|| ChartError::Surface(format!("failed to create {}x{} raster surface", size.0, size.1)))?;
        surface.canvas().clear(color(self.theme.background));
        tracing::debug!(width = size.0, height = size.1, "skia canvas created");
        self.surface = Some(surface);
        Ok(())
    }

    fn append_group(&mut self, parent: GroupId, transform: Transform, _class: Option<&str>) -> GroupId {
        let (px, py) = self.offset(parent);
        self.offsets.push((px + transform.dx as f32, py + transform.dy as f32));
        GroupId(self.offsets.len() - 1)
    }

    fn define_linear_gradient(&mut self, _parent: GroupId, gradient: &LinearGradient) {
        self.gradient = Some(gradient.clone());
    }

    fn draw_circle(&mut self, parent: GroupId, center: Point, radius: f64, _class: &str) {
        let (ox, oy) = self.offset(parent);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color(self.theme.dot));
        if let Some(surface) = self.surface.as_mut() {
            surface
                .canvas()
                .draw_circle((center.x as f32 + ox, center.y as f32 + oy), radius as f32, &paint);
        }
    }

    fn draw_path(&mut self, parent: GroupId, path: &PathData, class: &str) {
        let sk_path = self.to_skia_path(parent, path);
        let paint = if has_class(class, "line") {
            self.line_paint(*sk_path.bounds())
        } else {
            self.axis_paint()
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.canvas().draw_path(&sk_path, &paint);
        }
    }

    fn draw_text(&mut self, parent: GroupId, at: Point, text: &str, class: &str) {
        let (ox, oy) = self.offset(parent);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color(self.theme.text_color(class)));

        let (width, _) = self.font.measure_str(text, Some(&paint));
        let size = self.theme.font_size;
        let (mut x, mut y) = (at.x as f32 + ox, at.y as f32 + oy);
        if has_class(class, "tick-label-left") {
            x -= width;
            y += size * 0.35;
        } else if has_class(class, "tick-label-bottom") {
            x -= width * 0.5;
            y += size * 0.8;
        } else if has_class(class, "line-label") {
            y += size * 0.35;
        } else if has_class(class, "y-axis-label") {
            x -= width * 0.5;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.canvas().draw_str(text, (x, y), &self.font, &paint);
        }
    }
}
