//! brightquad CLI: finds the brightest non-overlapping patches, reports the
//! area of the quadrilateral through their centers and draws it in red.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use brightquad::io::{load_gray, save_rgb};
use brightquad::{PatchConfig, Point2i, QuadStyle, detect_quad, render_quad};
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "brightquad")]
#[command(
    about = "Finds the non-overlapping square patches with highest average brightness, takes \
             the patch centers as corners of a quadrilateral, calculates its area in pixels, \
             draws the quadrilateral in red into the image and saves it"
)]
#[command(version)]
struct Cli {
    /// Path of the input image.
    #[arg(long, default_value = "./input.jpg")]
    input: PathBuf,

    /// Path of the output image; the extension selects the format.
    #[arg(long, default_value = "./output.png")]
    output: PathBuf,

    /// Side length of the square patches in pixels.
    #[arg(long, default_value_t = 5)]
    patch_size: usize,

    /// Number of non-overlapping patches to find.
    #[arg(long, default_value_t = 4)]
    num_patches: usize,

    /// Stroke thickness of the drawn quadrilateral in pixels.
    #[arg(long, default_value_t = 2)]
    thickness: u32,

    /// Optional path to write a JSON report of the detection.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct PointDto {
    row: i64,
    col: i64,
}

impl From<Point2i> for PointDto {
    fn from(p: Point2i) -> Self {
        Self { row: p.x, col: p.y }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ReportDto {
    input: String,
    output: String,
    width: usize,
    height: usize,
    patch_size: usize,
    num_patches: usize,
    centers: Vec<PointDto>,
    quad: Vec<PointDto>,
    area: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if cli.input.exists() && !cli.input.is_file() {
        bail!("input path is not a file: {}", cli.input.display());
    }

    tracing::info!("Loading image: {}", cli.input.display());
    let img = load_gray(&cli.input)?;
    tracing::info!("Image size: {}x{}", img.width(), img.height());

    let cfg = PatchConfig {
        patch_size: cli.patch_size,
        num_patches: cli.num_patches,
    };
    let det = detect_quad(&img.as_view(), &cfg).with_context(|| {
        format!(
            "detecting {} patches of {}x{} in {}",
            cfg.num_patches,
            cfg.patch_size,
            cfg.patch_size,
            cli.input.display()
        )
    })?;
    println!("Area of the quadrilateral: {} pixels²", det.area);

    let style = QuadStyle {
        thickness: cli.thickness,
        ..QuadStyle::default()
    };
    let overlay = render_quad(&img.as_view(), &det.quad, &style);
    save_rgb(&cli.output, &overlay)?;
    println!("Output image stored at {}", cli.output.display());

    if let Some(report_path) = &cli.report {
        let report = ReportDto {
            input: cli.input.display().to_string(),
            output: cli.output.display().to_string(),
            width: img.width(),
            height: img.height(),
            patch_size: cfg.patch_size,
            num_patches: cfg.num_patches,
            centers: det.centers.iter().copied().map(PointDto::from).collect(),
            quad: det.quad.iter().copied().map(PointDto::from).collect(),
            area: det.area,
        };
        write_json(report_path, &report)?;
        tracing::info!("Report written to {}", report_path.display());
    }

    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}
