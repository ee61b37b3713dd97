use tracing::{info, warn};

use crate::aperture::locate;
use crate::calibration::CalibrationConfig;
use crate::consts::OVERLAY_JPEG_QUALITY;
use crate::error::Result;
use crate::exposure::{self, ExposureAdvice};
use crate::frame::PixelSource;
use crate::io::csv::save_csv;
use crate::io::image_io::{load_rgb_image, save_jpeg, save_png};
use crate::render::{draw_overlay, render_chart};
use crate::spectrum::scan;

use super::config::PipelineConfig;
use super::types::{Analysis, PipelineOutput, PipelineStage};

/// Locate the aperture, scan the spectrum and grade the exposure, without
/// touching the filesystem.
///
/// Fails with `NoHotspot` or `DegenerateAperture` when the capture holds no
/// usable zero-order beam.
pub fn analyze<P>(pixels: &P, calibration: &CalibrationConfig) -> Result<Analysis>
where
    P: PixelSource + Sync + ?Sized,
{
    calibration.validate()?;

    let aperture = locate(pixels, calibration);
    aperture.validate()?;
    info!(
        center_x = aperture.center_x,
        center_y = aperture.center_y,
        height = aperture.height,
        peak = aperture.peak_luminance,
        "Aperture located"
    );

    let spectrum = scan(pixels, &aperture, calibration);
    let report = exposure::assess(spectrum.max_amplitude());
    info!(
        samples = spectrum.len(),
        max_amplitude = spectrum.max_amplitude(),
        exposure = report.exposure,
        "Spectrum scanned"
    );
    if report.advice != ExposureAdvice::Good {
        warn!(exposure = report.exposure, "{}", report.advice);
    }

    Ok(Analysis {
        aperture,
        spectrum,
        exposure: report,
    })
}

/// Run the full pipeline: read, analyze, annotate, normalize and export.
///
/// `on_progress` is called with each stage and the overall fraction done.
/// The overlay is written before normalization, so an empty spectrum still
/// leaves the annotated capture on disk.
pub fn run_pipeline<F>(config: &PipelineConfig, mut on_progress: F) -> Result<PipelineOutput>
where
    F: FnMut(PipelineStage, f32),
{
    let mut written = Vec::new();

    on_progress(PipelineStage::Reading, 0.0);
    let mut img = load_rgb_image(&config.input)?;
    info!(
        input = %config.input.display(),
        width = img.width(),
        height = img.height(),
        "Capture loaded"
    );

    on_progress(PipelineStage::Locating, 0.15);
    let analysis = analyze(&img, &config.calibration)?;
    on_progress(PipelineStage::Scanning, 0.5);

    if config.outputs.overlay {
        on_progress(PipelineStage::Drawing, 0.6);
        draw_overlay(
            &mut img,
            &analysis.aperture,
            &analysis.spectrum,
            &config.calibration,
        );
        let path = config.overlay_path();
        save_jpeg(&img, &path, OVERLAY_JPEG_QUALITY)?;
        info!(output = %path.display(), "Overlay saved");
        written.push(path);
    }

    on_progress(PipelineStage::Normalizing, 0.75);
    let normalized = analysis.spectrum.normalize()?;

    on_progress(PipelineStage::Writing, 0.85);
    if config.outputs.csv {
        let path = config.csv_path();
        save_csv(&normalized, &path)?;
        info!(output = %path.display(), rows = normalized.len(), "CSV saved");
        written.push(path);
    }
    if config.outputs.chart {
        let path = config.chart_path();
        save_png(&render_chart(&normalized), &path)?;
        info!(output = %path.display(), "Chart saved");
        written.push(path);
    }
    on_progress(PipelineStage::Writing, 1.0);

    Ok(PipelineOutput {
        analysis,
        normalized,
        written,
    })
}
