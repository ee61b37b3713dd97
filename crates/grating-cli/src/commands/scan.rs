use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use grating_core::pipeline::config::{OutputConfig, PipelineConfig};
use grating_core::pipeline::run_pipeline;

use super::load_config;
use crate::summary::{print_exposure, print_scan_summary};

#[derive(Args)]
pub struct ScanArgs {
    /// Input image (JPEG, PNG, TIFF, ...)
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output stem; suffixes are appended per artifact
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scan line tilt in radians
    #[arg(long)]
    pub angle: Option<f64>,

    /// Nanometers per pixel (0.892 for 1000 lines/mm)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Skip the annotated capture
    #[arg(long)]
    pub no_overlay: bool,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the spectrum chart
    #[arg(long)]
    pub no_chart: bool,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = build_config(args)?;
    print_scan_summary(&config);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );

    let result = run_pipeline(&config, |stage, progress| {
        pb.set_message(stage.to_string());
        pb.set_position((progress * 100.0) as u64);
    });
    pb.finish_and_clear();

    let output = result.with_context(|| format!("Failed to process {}", config.input.display()))?;

    print_exposure(&output.analysis.exposure);
    for path in &output.written {
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn build_config(args: &ScanArgs) -> Result<PipelineConfig> {
    let mut config = match args.config {
        Some(ref path) => {
            let mut config = load_config(path)?;
            config.input = args.file.clone();
            config
        }
        None => PipelineConfig::new(&args.file, default_stem(&args.file)),
    };

    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if let Some(angle) = args.angle {
        config.calibration.scan_angle = angle;
    }
    if let Some(scale) = args.scale {
        config.calibration.wavelength_scale = scale;
    }
    config.outputs = OutputConfig {
        overlay: config.outputs.overlay && !args.no_overlay,
        csv: config.outputs.csv && !args.no_csv,
        chart: config.outputs.chart && !args.no_chart,
    };
    Ok(config)
}

/// Input path without its extension.
fn default_stem(input: &std::path::Path) -> PathBuf {
    input.with_extension("")
}
