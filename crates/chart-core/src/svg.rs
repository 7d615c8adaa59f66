// File: crates/chart-core/src/svg.rs
// Summary: SVG document backend for the Surface trait.

use std::fmt::Write as _;

use crate::error::Result;
use crate::geometry::{fmt_num, PathData, Point};
use crate::surface::{GroupId, LinearGradient, Surface, Transform};
use crate::theme::Theme;

enum Child {
    Group(usize),
    Markup(String),
}

struct Node {
    transform: Transform,
    class: Option<String>,
    children: Vec<Child>,
}

/// Builds an SVG document in memory; call [`SvgSurface::finish`] for the text.
pub struct SvgSurface {
    theme: Theme,
    size: (f64, f64),
    nodes: Vec<Node>,
    line_gradient: Option<String>,
}

impl SvgSurface {
    pub fn new(theme: Theme) -> Self {
        let root = Node { transform: Transform::default(), class: None, children: Vec::new() };
        Self { theme, size: (0.0, 0.0), nodes: vec![root], line_gradient: None }
    }

    fn push(&mut self, parent: GroupId, markup: String) {
        // Unknown parents fall back to the canvas so nothing is lost.
        let idx = if parent.0 < self.nodes.len() { parent.0 } else { 0 };
        self.nodes[idx].children.push(Child::Markup(markup));
    }

    fn write_node(&self, out: &mut String, idx: usize, depth: usize) {
        for child in &self.nodes[idx].children {
            match child {
                Child::Markup(m) => {
                    let _ = writeln!(out, "{:indent$}{m}", "", indent = depth * 2);
                }
                Child::Group(g) => {
                    let node = &self.nodes[*g];
                    let _ = write!(out, "{:indent$}<g", "", indent = depth * 2);
                    if node.transform != Transform::default() {
                        let _ = write!(
                            out,
                            " transform=\"translate({},{})\"",
                            fmt_num(node.transform.dx),
                            fmt_num(node.transform.dy)
                        );
                    }
                    if let Some(class) = &node.class {
                        let _ = write!(out, " class=\"{}\"", escape(class));
                    }
                    out.push_str(">\n");
                    self.write_node(out, *g, depth + 1);
                    let _ = writeln!(out, "{:indent$}</g>", "", indent = depth * 2);
                }
            }
        }
    }

    /// Serialize the document.
    pub fn finish(&self) -> String {
        let (w, h) = self.size;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\">",
            fmt_num(w),
            fmt_num(h)
        );
        let _ = writeln!(out, "  <style>{}</style>", self.theme.stylesheet(self.line_gradient.as_deref()));
        self.write_node(&mut out, 0, 1);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn create_canvas(&mut self, width: f64, height: f64) -> Result<()> {
        self.size = (width, height);
        Ok(())
    }

    fn append_group(&mut self, parent: GroupId, transform: Transform, class: Option<&str>) -> GroupId {
        let id = self.nodes.len();
        self.nodes.push(Node { transform, class: class.map(str::to_string), children: Vec::new() });
        let p = if parent.0 < id { parent.0 } else { 0 };
        self.nodes[p].children.push(Child::Group(id));
        GroupId(id)
    }

    fn define_linear_gradient(&mut self, parent: GroupId, g: &LinearGradient) {
        let mut m = format!(
            "<defs><linearGradient id=\"{}\" x1=\"{}%\" y1=\"{}%\" x2=\"{}%\" y2=\"{}%\" spreadMethod=\"pad\">",
            escape(&g.id),
            fmt_num(g.start.x * 100.0),
            fmt_num(g.start.y * 100.0),
            fmt_num(g.end.x * 100.0),
            fmt_num(g.end.y * 100.0),
        );
        for stop in &g.stops {
            let _ = write!(
                m,
                "<stop offset=\"{}%\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                fmt_num(stop.offset * 100.0),
                stop.color.to_hex(),
                fmt_num(stop.color.opacity())
            );
        }
        m.push_str("</linearGradient></defs>");
        self.push(parent, m);
        self.line_gradient = Some(g.id.clone());
    }

    fn draw_circle(&mut self, parent: GroupId, center: Point, radius: f64, class: &str) {
        let m = format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" class=\"{}\"/>",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            escape(class)
        );
        self.push(parent, m);
    }

    fn draw_path(&mut self, parent: GroupId, path: &PathData, class: &str) {
        let m = format!("<path d=\"{}\" class=\"{}\"/>", path.to_svg(), escape(class));
        self.push(parent, m);
    }

    fn draw_text(&mut self, parent: GroupId, at: Point, text: &str, class: &str) {
        let m = format!(
            "<text x=\"{}\" y=\"{}\" class=\"{}\">{}</text>",
            fmt_num(at.x),
            fmt_num(at.y),
            escape(class),
            escape(text)
        );
        self.push(parent, m);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
