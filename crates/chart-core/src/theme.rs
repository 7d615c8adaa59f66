// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark color themes resolved from drawing classes.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub dot: Rgba,
    /// Stroke for `line` paths when no gradient is defined.
    pub line_stroke: Rgba,
    pub line_width: f32,
    pub line_label: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub caption: Rgba,
    pub font_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            dot: Rgba::rgba(0x34, 0x49, 0x5e, 0x80),
            line_stroke: Rgba::rgb(0x34, 0x49, 0x5e),
            line_width: 2.0,
            line_label: Rgba::rgb(0x34, 0x49, 0x5e),
            axis_line: Rgba::rgb(0x22, 0x22, 0x22),
            tick_label: Rgba::rgb(0x22, 0x22, 0x22),
            caption: Rgba::rgb(0x8a, 0x96, 0xa3),
            font_size: 10.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            dot: Rgba::rgba(200, 214, 229, 0x80),
            line_stroke: Rgba::rgb(64, 160, 255),
            line_width: 2.0,
            line_label: Rgba::rgb(235, 235, 245),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(210, 210, 220),
            caption: Rgba::rgb(150, 150, 160),
            font_size: 10.0,
        }
    }

    /// Fill color for a text element of the given class list.
    pub fn text_color(&self, class: &str) -> Rgba {
        if has_class(class, "line-label") {
            self.line_label
        } else if has_class(class, "y-axis-label") {
            self.caption
        } else {
            self.tick_label
        }
    }

    /// CSS for the SVG backend. `line_gradient` strokes lines with that gradient id.
    pub fn stylesheet(&self, line_gradient: Option<&str>) -> String {
        let line = match line_gradient {
            Some(id) => format!("url(#{id})"),
            None => self.line_stroke.to_hex(),
        };
        format!(
            concat!(
                "svg{{background:{bg};font-family:sans-serif;font-size:{fs}px}}",
                ".dot{{fill:{dot};fill-opacity:{dot_a}}}",
                ".line{{fill:none;stroke:{line};stroke-width:{lw}px}}",
                ".line-label{{fill:{ll};dominant-baseline:middle}}",
                ".domain,.tick{{fill:none;stroke:{axis}}}",
                ".tick-label{{fill:{tl}}}",
                ".tick-label-left{{text-anchor:end;dominant-baseline:middle}}",
                ".tick-label-bottom{{text-anchor:middle;dominant-baseline:hanging}}",
                ".y-axis-label{{fill:{cap};text-anchor:middle;font-size:0.8em}}",
            ),
            bg = self.background.to_hex(),
            fs = self.font_size,
            dot = self.dot.to_hex(),
            dot_a = self.dot.opacity(),
            line = line,
            lw = self.line_width,
            ll = self.line_label.to_hex(),
            axis = self.axis_line.to_hex(),
            tl = self.tick_label.to_hex(),
            cap = self.caption.to_hex(),
        )
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Whether the space-separated `classes` list contains `name`.
pub fn has_class(classes: &str, name: &str) -> bool {
    classes.split_ascii_whitespace().any(|c| c == name)
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}
