use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use grating_core::calibration::CalibrationConfig;
use grating_core::io::image_io::load_rgb_image;
use grating_core::locate;

use crate::summary::print_aperture;

#[derive(Args)]
pub struct LocateArgs {
    /// Input image (JPEG, PNG, TIFF, ...)
    pub file: PathBuf,

    /// Fraction of peak brightness that still counts as hotspot
    #[arg(long, default_value = "0.9")]
    pub dimming: f64,

    /// Dark pixels tolerated inside the hotspot column
    #[arg(long, default_value = "64")]
    pub max_gap: u32,
}

pub fn run(args: &LocateArgs) -> Result<()> {
    let calibration = CalibrationConfig {
        dimming_constant: args.dimming,
        max_gap_height: args.max_gap,
        ..Default::default()
    };
    calibration.validate()?;

    let img = load_rgb_image(&args.file)?;
    let aperture = locate(&img, &calibration);
    print_aperture(&args.file, img.dimensions(), &aperture);

    if !aperture.is_detected() {
        bail!("No spectrum detected: no bright hotspot right of center. Adjust exposure.");
    }
    Ok(())
}
