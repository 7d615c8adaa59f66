// File: crates/chart-core/tests/axis.rs
// Purpose: Axis tick derivation and emitted primitives.

use chart_core::axis::{build_axis, time_axis, value_axis, Orientation, TICK_SIZE};
use chart_core::geometry::Point;
use chart_core::surface::{DrawCall, RecordingSurface};
use chart_core::{build_time_scale, Dimensions, LinearScale, Margin, RenderContext, Scale, Transform};
use chrono::NaiveDate;

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, m, day).unwrap()
}

#[test]
fn value_axis_ticks_and_labels() {
    let scale = LinearScale::new((5.0, 10.0), (345.0, 0.0));
    let axis = value_axis(&scale, 3);
    assert_eq!(axis.orientation, Orientation::Left);
    let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["6", "8", "10"]);
    let offsets: Vec<f64> = axis.ticks.iter().map(|t| t.offset).collect();
    assert!((offsets[0] - 276.0).abs() < 1e-9);
    assert!((offsets[1] - 138.0).abs() < 1e-9);
    assert_eq!(offsets[2], 0.0);
    // linear scale: equal domain steps are equal pixel steps
    assert!(((offsets[0] - offsets[1]) - (offsets[1] - offsets[2])).abs() < 1e-9);
}

#[test]
fn fractional_value_ticks_keep_decimals() {
    let scale = LinearScale::new((0.0, 1.0), (100.0, 0.0));
    let axis = value_axis(&scale, 3);
    let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0.0", "0.5", "1.0"]);
}

#[test]
fn time_axis_uses_month_names() {
    let scale = build_time_scale([d(1, 3), d(2, 1)], (0.0, 780.0)).unwrap();
    let axis = time_axis(&scale, 10);
    assert_eq!(axis.orientation, Orientation::Bottom);
    assert_eq!(axis.ticks.len(), 16);
    assert!(axis.ticks[..15].iter().all(|t| t.label == "Jan"));
    assert_eq!(axis.ticks[15].label, "Feb");
    assert_eq!(axis.ticks[0].offset, 0.0);
    assert_eq!(axis.ticks[15].offset, 780.0);
}

#[test]
fn custom_formatter_is_applied() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 200.0));
    let axis = build_axis(&scale, Orientation::Bottom, 4, |v| format!("{v}%"));
    assert_eq!(axis.ticks.first().map(|t| t.label.as_str()), Some("0%"));
    assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("100%"));
    assert_eq!(axis.range, scale.range());
}

#[test]
fn draw_emits_domain_marks_and_labels() {
    let scale = LinearScale::new((5.0, 10.0), (345.0, 0.0));
    let axis = value_axis(&scale, 3);
    let dims = Dimensions::compute_bounded(900.0, 400.0, Margin::default()).unwrap();

    let mut surface = RecordingSurface::new();
    {
        let mut ctx = RenderContext::open(&mut surface, dims).unwrap();
        let bounds = ctx.bounds();
        axis.draw(&mut ctx, bounds, Transform::default(), "y-axis");
    }

    assert_eq!(surface.count(|c| matches!(c, DrawCall::Path { class, .. } if class == "domain")), 1);
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Path { class, .. } if class == "tick")), 3);
    let label_at: Vec<Point> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { at, .. } => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(label_at.len(), 3);
    assert!(label_at.iter().all(|p| p.x == -(TICK_SIZE + 3.0)));
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, DrawCall::Group { class: Some(class), .. } if class == "y-axis")));
}

#[test]
fn bottom_axis_sits_on_the_lower_edge() {
    let dims = Dimensions::compute_bounded(900.0, 400.0, Margin::default()).unwrap();
    assert_eq!(Orientation::Left.offset(&dims), Transform::default());
    assert_eq!(Orientation::Bottom.offset(&dims), Transform::translate(0.0, 345.0));

    let mut surface = RecordingSurface::new();
    let ctx = RenderContext::open(&mut surface, dims).unwrap();
    assert_eq!(ctx.dims(), &dims);
    assert_eq!(Orientation::Bottom.offset(ctx.dims()).dy, ctx.dims().bounded_height());
}
