//! Hazard map export tool.
//!
//! Loads a sample archive, selects one dataset by (scenario, model,
//! period), runs the interpolation/contour pipeline, and writes a
//! heatmap PNG and/or a contour GeoJSON file.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use contour_engine::{build_grid, contour_lines, IdwConfig, DEFAULT_THRESHOLDS_MS};
use hazard_common::mask::regions;
use hazard_common::ReturnPeriod;
use renderer::{contour_features, create_png_auto, render_heatmap};
use sample_store::{ClimateModel, DatasetKey, Period, SampleStore, Scenario};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Color-mapped raster of the interpolated field.
    Heatmap,
    /// Isoline GeoJSON at the configured thresholds.
    Contours,
    /// Both outputs.
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "hazard-export")]
#[command(about = "Export hurricane hazard heatmaps and contour lines")]
struct Args {
    /// Sample archive path (JSON, scenario/model/period keyed)
    #[arg(short, long, env = "HAZARD_ARCHIVE")]
    archive: PathBuf,

    /// Emissions scenario
    #[arg(long, default_value = "ssp585")]
    scenario: String,

    /// Climate model
    #[arg(long, default_value = "CESM2")]
    model: String,

    /// Forecast period (base, fut1, fut2)
    #[arg(long, default_value = "base")]
    period: String,

    /// Return period metric (rp10..rp1000)
    #[arg(long, default_value = "rp250")]
    return_period: String,

    /// What to export
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Heatmap output path
    #[arg(long, default_value = "heatmap.png")]
    heatmap_out: PathBuf,

    /// Contour output path
    #[arg(long, default_value = "contours.geojson")]
    contours_out: PathBuf,

    /// Contour thresholds in m/s (defaults to the standard map levels)
    #[arg(long, value_delimiter = ',')]
    thresholds: Option<Vec<f64>>,

    /// Grid nodes per axis (overrides IDW_GRID_NX/IDW_GRID_NY)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let key = DatasetKey::new(
        args.scenario.parse::<Scenario>()?,
        args.model.parse::<ClimateModel>()?,
        args.period.parse::<Period>()?,
    );
    let metric: ReturnPeriod = args.return_period.parse()?;

    let mut config = IdwConfig::from_env();
    if let Some(size) = args.grid_size {
        config.nx = size;
        config.ny = size;
    }
    if let Err(message) = config.validate() {
        bail!("invalid grid configuration: {message}");
    }

    info!(archive = %args.archive.display(), %key, %metric, "starting export");

    let store = SampleStore::load(&args.archive)
        .with_context(|| format!("loading archive {}", args.archive.display()))?;
    let Some(samples) = store.get(&key) else {
        bail!("dataset not found in archive: {key}");
    };
    if samples.is_empty() {
        warn!(%key, "dataset has no samples; outputs will be empty");
    }

    let mask = regions::florida();

    if args.mode == Mode::Heatmap || args.mode == Mode::Both {
        let grid = build_grid(samples, metric, &config);
        if grid.valid_count() == 0 {
            warn!(%key, "no valid grid nodes; heatmap will be fully transparent");
        }
        let heatmap = render_heatmap(&grid);
        let png = create_png_auto(&heatmap.pixels, heatmap.width, heatmap.height)?;
        fs::write(&args.heatmap_out, &png)
            .with_context(|| format!("writing {}", args.heatmap_out.display()))?;
        info!(
            path = %args.heatmap_out.display(),
            bytes = png.len(),
            bounds = ?heatmap.bounds,
            "wrote heatmap"
        );
    }

    if args.mode == Mode::Contours || args.mode == Mode::Both {
        let thresholds = args
            .thresholds
            .clone()
            .unwrap_or_else(|| DEFAULT_THRESHOLDS_MS.to_vec());
        let contours = contour_lines(samples, &mask, metric, &thresholds, &config);
        if contours.is_empty() {
            warn!(%key, "no contour geometry at the requested thresholds");
        }
        let collection = contour_features(&contours);
        let geojson = serde_json::to_string_pretty(&collection)?;
        fs::write(&args.contours_out, geojson)
            .with_context(|| format!("writing {}", args.contours_out.display()))?;
        info!(
            path = %args.contours_out.display(),
            features = collection.features.len(),
            "wrote contours"
        );
    }

    Ok(())
}
