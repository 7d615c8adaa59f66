// File: crates/chart-core/src/config.rs
// Summary: Chart configuration with defaults, loadable from TOML.

use serde::Deserialize;

use crate::axis::TIME_TICK_COUNT;
use crate::error::Result;
use crate::layout::Dimensions;
use crate::series::LABEL_OFFSET;
use crate::types::{Margin, Rgba, HEIGHT, VIEWPORT_WIDTH, WIDTH_FRACTION};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub id: String,
    /// Colors top to bottom, spread evenly.
    pub stops: Vec<Rgba>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            id: "timeline-gradient".to_string(),
            stops: vec![Rgba::rgb(0x34, 0x49, 0x5e), Rgba::rgb(0xc8, 0xd6, 0xe5), Rgba::rgb(0x34, 0x49, 0x5e)],
        }
    }
}

/// Value-axis caption placed inside the bounds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub text: String,
    pub y: f64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self { text: "weekly trail usage".to_string(), y: 47.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Externally measured viewport width; the chart takes `width_fraction` of it.
    pub viewport_width: f64,
    pub width_fraction: f64,
    pub height: f64,
    pub margin: Margin,
    pub value_tick_count: usize,
    /// Tick-count hint used when rounding the value domain outward.
    pub value_nice_count: usize,
    pub time_tick_count: usize,
    pub label_offset: f64,
    pub dot_radius: f64,
    pub gradient: GradientConfig,
    pub caption: Option<CaptionConfig>,
    /// Theme preset name for backends that resolve classes to colors.
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            width_fraction: WIDTH_FRACTION,
            height: HEIGHT,
            margin: Margin::default(),
            value_tick_count: 3,
            value_nice_count: 8,
            time_tick_count: TIME_TICK_COUNT,
            label_offset: LABEL_OFFSET,
            dot_radius: 2.0,
            gradient: GradientConfig::default(),
            caption: Some(CaptionConfig::default()),
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse TOML; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn width(&self) -> f64 { self.viewport_width * self.width_fraction }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::for_viewport(self.viewport_width, self.width_fraction, self.height, self.margin)
    }
}
