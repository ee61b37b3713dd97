use rayon::prelude::*;
use tracing::debug;

use crate::aperture::ApertureGeometry;
use crate::calibration::CalibrationConfig;
use crate::consts::PARALLEL_OFFSET_THRESHOLD;
use crate::frame::PixelSource;

use super::types::{Spectrum, WavelengthSample};

/// Walk the tilted scan line left of the aperture and measure one amplitude
/// per pixel column.
///
/// Column `x` maps to `(center_x - x) * wavelength_scale` nm. Columns outside
/// the calibrated band are skipped, as is the final `1 - scan_fraction` of
/// the distance to the aperture. Samples come back in increasing-wavelength
/// order.
pub fn scan<P>(pixels: &P, aperture: &ApertureGeometry, config: &CalibrationConfig) -> Spectrum
where
    P: PixelSource + Sync + ?Sized,
{
    let limit = scan_limit(aperture, config);
    let sample = |x: u32| sample_column(pixels, aperture, config, x);

    let samples: Vec<WavelengthSample> = if limit as usize >= PARALLEL_OFFSET_THRESHOLD {
        (0..limit).into_par_iter().rev().filter_map(sample).collect()
    } else {
        (0..limit).rev().filter_map(sample).collect()
    };

    let spectrum = Spectrum::from_samples(samples);
    debug!(
        offsets = limit,
        samples = spectrum.len(),
        max_amplitude = spectrum.max_amplitude(),
        "Scan complete"
    );
    spectrum
}

/// Exclusive upper bound on scanned columns: `floor(center_x * scan_fraction)`.
pub fn scan_limit(aperture: &ApertureGeometry, config: &CalibrationConfig) -> u32 {
    (aperture.center_x as f64 * config.scan_fraction) as u32
}

/// Wavelength (nm) seen at column `x` for an aperture centered at `center_x`.
pub fn wavelength_at(center_x: u32, x: u32, config: &CalibrationConfig) -> f64 {
    (center_x as f64 - x as f64) * config.wavelength_scale
}

/// Center row of the scan line at column `x`.
pub fn scan_line_y(aperture: &ApertureGeometry, x: f64, config: &CalibrationConfig) -> f64 {
    config.scan_angle.tan() * (aperture.center_x as f64 - x) + aperture.center_y as f64
}

/// Efficiency-corrected amplitude at column `x`, or `None` outside the band.
pub fn sample_column<P>(
    pixels: &P,
    aperture: &ApertureGeometry,
    config: &CalibrationConfig,
    x: u32,
) -> Option<WavelengthSample>
where
    P: PixelSource + ?Sized,
{
    let wavelength = wavelength_at(aperture.center_x, x, config);
    if wavelength < config.min_wavelength || wavelength > config.max_wavelength {
        return None;
    }

    let efficiency = config.efficiency.efficiency(wavelength);
    let y0 = scan_line_y(aperture, x as f64, config);
    let mean = integrate_column(pixels, x, y0, aperture.half_height(), config);

    Some(WavelengthSample {
        wavelength,
        amplitude: mean / efficiency,
    })
}

/// Mean weighted brightness `r + b + green_weight * g` over rows
/// `[trunc(y0 - half), trunc(y0 + half))` of column `x`.
///
/// Rows within `edge_rows` of either end are scaled by `edge_weight`. Rows
/// outside the image are skipped. An empty window yields 0.0.
pub fn integrate_column<P>(
    pixels: &P,
    x: u32,
    y0: f64,
    half_height: f64,
    config: &CalibrationConfig,
) -> f64
where
    P: PixelSource + ?Sized,
{
    let start = (y0 - half_height) as i64;
    let end = (y0 + half_height) as i64;
    let lower_edge = y0 - half_height + config.edge_rows;
    // `end` is exclusive, so the last row sits one below the upper boundary.
    let upper_edge = y0 + half_height - config.edge_rows - 1.0;

    let mut total = 0.0_f64;
    let mut rows = 0usize;
    for y in start..end {
        if !pixels.contains(x as i64, y) {
            continue;
        }
        let [r, g, b] = pixels.rgb(x, y as u32);
        let mut q = r as f64 + b as f64 + g as f64 * config.green_weight;
        let yf = y as f64;
        if yf < lower_edge || yf > upper_edge {
            q *= config.edge_weight;
        }
        total += q;
        rows += 1;
    }

    if rows == 0 {
        0.0
    } else {
        total / rows as f64
    }
}
