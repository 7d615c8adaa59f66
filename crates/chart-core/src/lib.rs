// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; dated-count records -> scales -> chart primitives.

pub mod accessor;
pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod record;
pub mod scale;
pub mod series;
pub mod source;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod types;

pub use accessor::{Accessors, DateCount};
pub use axis::{Axis, AxisTick, Orientation};
pub use chart::{ChartElement, ChartPipeline, Scene};
pub use config::ChartConfig;
pub use dataset::{Dataset, YearGroup};
pub use error::{AggregateParseError, ChartError, ParseError, ParseErrorKind, TransportError};
pub use layout::Dimensions;
pub use record::{RawRow, Record, RecordParser};
pub use scale::{build_linear_scale, build_time_scale, LinearScale, Scale, Scales, TimeScale};
pub use source::{CsvFileSource, InMemorySource, RowSource};
pub use surface::{GroupId, LinearGradient, RenderContext, Surface, Transform};
pub use svg::SvgSurface;
pub use theme::Theme;
pub use types::{Margin, Rgba};
