// File: crates/demo/src/main.rs
// Summary: Demo loads a date/year/count CSV and renders the yearly line chart to SVG and PNG.

use anyhow::{Context, Result};
use chart_core::theme;
use chart_core::{ChartConfig, ChartPipeline, CsvFileSource, SvgSurface};
use chart_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Usage: trail-chart [data.csv] [chart.toml]
    let path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data/data.csv".to_string()));
    info!(input = %path.display(), "using input file");

    let config = match std::env::args().nth(2) {
        Some(cfg_path) => {
            let text = tokio::fs::read_to_string(&cfg_path)
                .await
                .with_context(|| format!("reading config '{cfg_path}'"))?;
            ChartConfig::from_toml_str(&text).with_context(|| format!("parsing config '{cfg_path}'"))?
        }
        None => ChartConfig::default(),
    };
    let theme = theme::find(&config.theme);
    let pipeline = ChartPipeline::new(config);
    let source = CsvFileSource::new(&path);

    // Rows are loaded once; both backends draw the same scene.
    let mut svg = SvgSurface::new(theme);
    let scene = pipeline
        .run(&source, &mut svg)
        .await
        .with_context(|| format!("failed to chart '{}'", path.display()))?;
    info!(points = scene.dots.len(), years = scene.series.len(), "scene ready");

    let out_dir = Path::new("target/out");
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let out_svg = out_path(out_dir, &path, "svg");
    std::fs::write(&out_svg, svg.finish()).with_context(|| format!("writing {}", out_svg.display()))?;
    info!(output = %out_svg.display(), "wrote svg");

    let mut png = SkiaSurface::new(theme);
    scene.draw(&mut png)?;
    let out_png = out_path(out_dir, &path, "png");
    png.write_png(&out_png)?;
    info!(output = %out_png.display(), "wrote png");

    Ok(())
}

/// `<dir>/trail_<stem>.<ext>` for the given input file.
fn out_path(dir: &Path, input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    dir.join(format!("trail_{stem}.{ext}"))
}
