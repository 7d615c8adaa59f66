// File: crates/chart-core/src/chart.rs
// Summary: ChartPipeline (load -> parse -> sort -> group -> layout -> scales -> primitives)
// and the Scene of plain geometry it produces.

use tracing::{debug, info, warn};

use crate::accessor::{Accessors, DateCount};
use crate::axis::{time_axis, value_axis, Axis, Orientation};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::{PathData, Point};
use crate::layout::Dimensions;
use crate::record::{RawRow, RecordParser};
use crate::scale::{Scale, Scales};
use crate::series::{build_series, SeriesLine};
use crate::source::RowSource;
use crate::surface::{LinearGradient, RenderContext, Surface, Transform};

/// A derived drawing element, in bounds-group coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartElement {
    Gradient(LinearGradient),
    Dot { center: Point, radius: f64 },
    LinePath { year: String, path: PathData },
    SeriesLabel { position: Point, text: String },
    /// `position` is the label anchor, already offset by the axis group's translation.
    AxisTick { orientation: Orientation, position: Point, label: String },
    Caption(Caption),
}

/// Caption text and its anchor inside the bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    pub position: Point,
}

/// Everything needed to draw one chart. Pure data; drawing cannot fail half-way
/// for lack of geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub dimensions: Dimensions,
    pub scales: Scales,
    pub gradient: LinearGradient,
    pub dots: Vec<Point>,
    pub dot_radius: f64,
    pub series: Vec<SeriesLine>,
    pub y_axis: Axis,
    pub x_axis: Axis,
    pub caption: Option<Caption>,
}

impl Scene {
    /// Flattened element list in draw order: gradient, dots, lines, labels, axis
    /// ticks, caption.
    pub fn elements(&self) -> Vec<ChartElement> {
        let mut out = vec![ChartElement::Gradient(self.gradient.clone())];
        out.extend(self.dots.iter().map(|&center| ChartElement::Dot { center, radius: self.dot_radius }));
        out.extend(self.series.iter().map(|s| ChartElement::LinePath { year: s.year.clone(), path: s.path.clone() }));
        out.extend(
            self.series
                .iter()
                .map(|s| ChartElement::SeriesLabel { position: s.label, text: s.year.clone() }),
        );
        for axis in [&self.y_axis, &self.x_axis] {
            let shift = axis.orientation.offset(&self.dimensions);
            out.extend(axis.ticks.iter().map(|t| {
                let at = axis.tick_geometry(t).1;
                ChartElement::AxisTick {
                    orientation: axis.orientation,
                    position: Point::new(at.x + shift.dx, at.y + shift.dy),
                    label: t.label.clone(),
                }
            }));
        }
        out.extend(self.caption.clone().map(ChartElement::Caption));
        out
    }

    /// Emit the scene onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let mut ctx = RenderContext::open(surface, self.dimensions)?;
        let bounds = ctx.bounds();

        ctx.gradient(bounds, &self.gradient);
        for &center in &self.dots {
            ctx.circle(bounds, center, self.dot_radius, "dot");
        }
        for s in &self.series {
            let g = ctx.group(bounds, Transform::default(), None);
            ctx.path(g, &s.path, "line");
        }
        for s in &self.series {
            ctx.text(bounds, s.label, &s.year, "line-label");
        }
        let left = self.y_axis.orientation.offset(ctx.dims());
        self.y_axis.draw(&mut ctx, bounds, left, "y-axis");
        let bottom = self.x_axis.orientation.offset(ctx.dims());
        self.x_axis.draw(&mut ctx, bounds, bottom, "x-axis");
        if let Some(c) = &self.caption {
            ctx.text(bounds, c.position, &c.text, "y-axis-label y-axis-label-suffix");
        }
        Ok(())
    }
}

/// Orchestrates one chart run. Holds only configuration; every run allocates its own
/// dataset, dimensions and scales.
pub struct ChartPipeline<A = DateCount> {
    config: ChartConfig,
    accessors: A,
    parser: RecordParser,
}

impl ChartPipeline<DateCount> {
    pub fn new(config: ChartConfig) -> Self {
        Self::with_accessors(config, DateCount)
    }
}

impl<A: Accessors> ChartPipeline<A> {
    pub fn with_accessors(config: ChartConfig, accessors: A) -> Self {
        Self { config, accessors, parser: RecordParser::new() }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// Compute the full scene from raw rows without touching any surface.
    pub fn layout(&self, rows: &[RawRow]) -> Result<Scene> {
        let dataset = Dataset::from_rows(rows, &self.parser)?.sort_by_date();
        debug!(records = dataset.len(), "parsed and sorted");

        let groups = dataset.group_by_year();
        debug!(groups = groups.len(), "grouped by year");

        let dims = self.config.dimensions()?;
        debug!(
            width = dims.width(),
            height = dims.height(),
            bounded_width = dims.bounded_width(),
            bounded_height = dims.bounded_height(),
            "layout"
        );

        let scales = Scales::build(&dataset, &self.accessors, &dims, self.config.value_nice_count)?;
        let (y0, y1) = scales.y.domain();
        let (x0, x1) = scales.x.domain();
        debug!(y0, y1, %x0, %x1, "scales");

        let dots = dataset.records().iter().map(|r| scales.project(&self.accessors, r)).collect();
        let series = build_series(&groups, &self.accessors, &scales, &dims, self.config.label_offset)?;
        for g in groups.iter().filter(|g| g.len() == 1) {
            warn!(year = %g.year, "year group has a single point; its line is not visible");
        }

        let y_axis = value_axis(&scales.y, self.config.value_tick_count);
        let x_axis = time_axis(&scales.x, self.config.time_tick_count);
        let gradient = LinearGradient::vertical(&self.config.gradient.id, &self.config.gradient.stops);
        let caption = self
            .config
            .caption
            .as_ref()
            .map(|c| Caption { text: c.text.clone(), position: Point::new(0.0, c.y) });

        Ok(Scene {
            dimensions: dims,
            scales,
            gradient,
            dots,
            dot_radius: self.config.dot_radius,
            series,
            y_axis,
            x_axis,
            caption,
        })
    }

    /// Lay out then draw. Nothing is drawn if any stage fails.
    pub fn render(&self, rows: &[RawRow], surface: &mut dyn Surface) -> Result<Scene> {
        let scene = self.layout(rows)?;
        scene.draw(surface)?;
        info!(
            points = scene.dots.len(),
            lines = scene.series.len(),
            "chart rendered"
        );
        Ok(scene)
    }

    /// Await the rows from `source`, then render synchronously.
    ///
    /// The surface is `Send` so the returned future can be spawned onto a runtime.
    pub async fn run<S: RowSource + ?Sized>(
        &self,
        source: &S,
        surface: &mut (dyn Surface + Send),
    ) -> Result<Scene> {
        let rows = source.load().await?;
        debug!(rows = rows.len(), "loaded rows");
        self.render(&rows, surface)
    }
}
