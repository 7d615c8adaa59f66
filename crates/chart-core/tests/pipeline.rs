// File: crates/chart-core/tests/pipeline.rs
// Purpose: End-to-end runs: scene geometry, all-or-nothing failure, async sources.

use std::io::Write as _;

use chart_core::chart::ChartElement;
use chart_core::geometry::Point;
use chart_core::surface::{DrawCall, RecordingSurface};
use chart_core::{
    ChartConfig, ChartError, ChartPipeline, CsvFileSource, GroupId, InMemorySource, Margin, RowSource, Scale,
    SvgSurface, Theme, Transform,
};

fn scenario() -> InMemorySource {
    InMemorySource::from_triples([("1/5", "2020", "10"), ("1/3", "2020", "5"), ("2/1", "2021", "7")])
}

async fn rows(source: &InMemorySource) -> Vec<chart_core::RawRow> {
    source.load().await.expect("in-memory load")
}

#[tokio::test]
async fn scenario_scene_geometry() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let scene = pipeline.layout(&rows(&scenario()).await).expect("layout");

    assert_eq!(scene.scales.y.domain(), (5.0, 10.0));
    assert_eq!(scene.dots.len(), 3);
    // sorted: 1/3 (5), 1/5 (10), 2/1 (7)
    assert_eq!(scene.dots[0].y, scene.scales.y.apply(5.0));
    assert_eq!(scene.dots[1].y, scene.scales.y.apply(10.0));
    assert_eq!(scene.dots[2].y, scene.scales.y.apply(7.0));
    assert_eq!(scene.dots[0].x, 0.0);
    assert_eq!(scene.dots[2].x, 780.0);

    let years: Vec<&str> = scene.series.iter().map(|s| s.year.as_str()).collect();
    assert_eq!(years, ["2020", "2021"]);
    assert_eq!(scene.series[0].label.x, 788.0);
    assert_eq!(scene.series[0].label.y, 0.0);
    assert!((scene.series[1].label.y - 207.0).abs() < 1e-9);
    assert_eq!(scene.series[1].path.to_svg(), "M780,207Z");

    let labels: Vec<&str> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["6", "8", "10"]);
}

#[tokio::test]
async fn scene_elements_cover_every_primitive() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let scene = pipeline.layout(&rows(&scenario()).await).unwrap();
    let elements = scene.elements();
    let dots = elements.iter().filter(|e| matches!(e, ChartElement::Dot { .. })).count();
    let lines = elements.iter().filter(|e| matches!(e, ChartElement::LinePath { .. })).count();
    let labels = elements.iter().filter(|e| matches!(e, ChartElement::SeriesLabel { .. })).count();
    let ticks = elements.iter().filter(|e| matches!(e, ChartElement::AxisTick { .. })).count();
    assert_eq!((dots, lines, labels), (3, 2, 2));
    assert_eq!(ticks, scene.y_axis.ticks.len() + scene.x_axis.ticks.len());

    assert!(matches!(elements.first(), Some(ChartElement::Gradient(g)) if g.id == "timeline-gradient"));
    match elements.last() {
        Some(ChartElement::Caption(c)) => {
            assert_eq!(c.text, "weekly trail usage");
            assert_eq!(c.position, Point::new(0.0, 47.0));
        }
        other => panic!("expected caption last, got {other:?}"),
    }
}

#[tokio::test]
async fn element_tick_positions_match_drawn_labels() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut surface = RecordingSurface::new();
    let scene = pipeline.run(&scenario(), &mut surface).await.expect("run");

    // Translation of each group relative to the bounds group.
    let mut shifts: Vec<(GroupId, Transform)> = Vec::new();
    for call in &surface.calls {
        if let DrawCall::Group { id, transform, class: Some(_), .. } = call {
            shifts.push((*id, *transform));
        }
    }
    let drawn: Vec<Point> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { parent, at, class, .. } if class.contains("tick-label") => {
                let t = shifts.iter().find(|(id, _)| id == parent).map(|(_, t)| *t).unwrap_or_default();
                Some(Point::new(at.x + t.dx, at.y + t.dy))
            }
            _ => None,
        })
        .collect();
    let listed: Vec<Point> = scene
        .elements()
        .into_iter()
        .filter_map(|e| match e {
            ChartElement::AxisTick { position, .. } => Some(position),
            _ => None,
        })
        .collect();
    assert_eq!(drawn.len(), 19);
    assert_eq!(listed, drawn);

    let bottom = scene.elements().into_iter().find_map(|e| match e {
        ChartElement::AxisTick { orientation: chart_core::Orientation::Bottom, position, .. } => Some(position),
        _ => None,
    });
    assert_eq!(bottom, Some(Point::new(0.0, scene.dimensions.bounded_height() + 9.0)));
}

#[tokio::test]
async fn run_future_can_be_spawned() {
    let handle = tokio::spawn(async {
        let pipeline = ChartPipeline::new(ChartConfig::default());
        let mut svg = SvgSurface::new(Theme::light());
        pipeline.run(&scenario(), &mut svg).await.map(|scene| (scene.series.len(), svg.finish()))
    });
    let (lines, doc) = handle.await.expect("join").expect("run");
    assert_eq!(lines, 2);
    assert!(doc.contains("M780,207Z"));
}

#[tokio::test]
async fn run_draws_in_order() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut surface = RecordingSurface::new();
    pipeline.run(&scenario(), &mut surface).await.expect("run");

    assert!(matches!(surface.calls[0], DrawCall::Canvas { width, height } if width == 900.0 && height == 400.0));
    assert!(matches!(&surface.calls[2], DrawCall::Gradient { gradient, .. } if gradient.id == "timeline-gradient"));
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Circle { class, .. } if class == "dot")), 3);
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Path { class, .. } if class == "line")), 2);
    let labels: Vec<&str> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { text, class, .. } if class == "line-label" => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["2020", "2021"]);
    assert_eq!(
        surface.count(|c| matches!(c, DrawCall::Text { text, .. } if text == "weekly trail usage")),
        1
    );
}

#[tokio::test]
async fn malformed_row_aborts_without_drawing() {
    let source = InMemorySource::from_triples([
        ("1/5", "2020", "10"),
        ("sometime", "2020", "5"),
        ("2/1", "2021", "many"),
    ]);
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut surface = RecordingSurface::new();
    let err = pipeline.run(&source, &mut surface).await.unwrap_err();
    match err {
        ChartError::Parse(agg) => assert_eq!(agg.rows(), vec![2, 3]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(surface.calls.is_empty());
}

#[tokio::test]
async fn empty_table_is_an_empty_domain() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut surface = RecordingSurface::new();
    let err = pipeline.run(&InMemorySource::default(), &mut surface).await.unwrap_err();
    assert!(matches!(err, ChartError::EmptyDomain { .. }));
    assert!(surface.calls.is_empty());
}

#[tokio::test]
async fn oversized_margins_abort_without_drawing() {
    let config = ChartConfig { margin: Margin::new(15.0, 500.0, 40.0, 500.0), ..ChartConfig::default() };
    let pipeline = ChartPipeline::new(config);
    let mut surface = RecordingSurface::new();
    let err = pipeline.run(&scenario(), &mut surface).await.unwrap_err();
    assert!(matches!(err, ChartError::InvalidLayout { .. }));
    assert!(surface.calls.is_empty());
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut a = SvgSurface::new(Theme::light());
    let mut b = SvgSurface::new(Theme::light());
    let first = pipeline.run(&scenario(), &mut a).await.unwrap();
    let second = pipeline.run(&scenario(), &mut b).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(a.finish(), b.finish());
}

#[tokio::test]
async fn csv_file_source_feeds_the_pipeline() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "date,year,count\n1/5/2020,2020,10\n1/3/2020,2020,5\n2/1/2021,2021,7").unwrap();
    let source = CsvFileSource::new(file.path());

    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut svg = SvgSurface::new(Theme::light());
    let scene = pipeline.run(&source, &mut svg).await.expect("run from csv");
    assert_eq!(scene.series.len(), 2);

    let doc = svg.finish();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains("id=\"timeline-gradient\""));
    assert!(doc.contains(">2021</text>"));
    assert_eq!(doc.matches("class=\"dot\"").count(), 3);
}

#[tokio::test]
async fn missing_file_is_a_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = CsvFileSource::new(dir.path().join("absent.csv"));
    let pipeline = ChartPipeline::new(ChartConfig::default());
    let mut surface = RecordingSurface::new();
    let err = pipeline.run(&source, &mut surface).await.unwrap_err();
    assert!(matches!(err, ChartError::Transport(_)));
    assert!(surface.calls.is_empty());
}
