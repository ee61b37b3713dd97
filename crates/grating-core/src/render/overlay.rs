use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::aperture::ApertureGeometry;
use crate::calibration::CalibrationConfig;
use crate::consts::{MAJOR_TICK_STEP, OVERLAY_TRACE_SCALE, TICK_RANGE};
use crate::spectrum::scan::scan_line_y;
use crate::spectrum::Spectrum;

const APERTURE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const SCAN_LINE_COLOR: Rgb<u8> = Rgb([0x88, 0x88, 0x88]);
const TRACE_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Half-length (px) of overlay tick marks.
const TICK_HALF_LENGTH: f32 = 5.0;

/// Annotate a capture with the aperture, the scan window, the raw amplitude
/// trace and wavelength ticks.
///
/// `spectrum` must be the unnormalized scan result for `aperture`.
pub fn draw_overlay(
    img: &mut RgbImage,
    aperture: &ApertureGeometry,
    spectrum: &Spectrum,
    config: &CalibrationConfig,
) {
    draw_aperture_line(img, aperture);
    draw_scan_window(img, aperture, config);
    draw_trace(img, aperture, spectrum, config);
    draw_ticks(img, aperture, config);
}

/// Vertical line through the aperture center spanning its height.
pub fn draw_aperture_line(img: &mut RgbImage, aperture: &ApertureGeometry) {
    let x = aperture.center_x as f32;
    let half = (aperture.height / 2) as f32;
    let cy = aperture.center_y as f32;
    draw_line_segment_mut(img, (x, cy - half), (x, cy + half), APERTURE_COLOR);
}

/// Upper and lower edges of the integration window, from the left image
/// edge to the aperture.
pub fn draw_scan_window(img: &mut RgbImage, aperture: &ApertureGeometry, config: &CalibrationConfig) {
    let half = aperture.half_height();
    let y_left = scan_line_y(aperture, 0.0, config);
    let cx = aperture.center_x as f32;
    let cy = aperture.center_y as f64;
    for offset in [-half, half] {
        draw_line_segment_mut(
            img,
            (0.0, (y_left + offset) as f32),
            (cx, (cy + offset) as f32),
            SCAN_LINE_COLOR,
        );
    }
}

/// Amplitude trace rising from the lower window edge, one segment per pair
/// of neighbouring samples.
pub fn draw_trace(
    img: &mut RgbImage,
    aperture: &ApertureGeometry,
    spectrum: &Spectrum,
    config: &CalibrationConfig,
) {
    let half = aperture.half_height();
    let point = |wavelength: f64, amplitude: f64| {
        let x = column_for(aperture, wavelength, config);
        let base = scan_line_y(aperture, x, config) + half;
        let y = base - amplitude / OVERLAY_TRACE_SCALE * half;
        (x as f32, y as f32)
    };

    for pair in spectrum.samples().windows(2) {
        let start = point(pair[0].wavelength, pair[0].amplitude);
        let end = point(pair[1].wavelength, pair[1].amplitude);
        draw_line_segment_mut(img, start, end, TRACE_COLOR);
    }
}

/// Short vertical ticks on the lower window edge every `MAJOR_TICK_STEP` nm.
pub fn draw_ticks(img: &mut RgbImage, aperture: &ApertureGeometry, config: &CalibrationConfig) {
    let half = aperture.half_height();
    let (first, last) = TICK_RANGE;
    for wl in (first..=last).step_by(MAJOR_TICK_STEP as usize) {
        let x = column_for(aperture, wl as f64, config);
        let base = scan_line_y(aperture, x, config) + half;
        draw_line_segment_mut(
            img,
            (x as f32, base as f32 - TICK_HALF_LENGTH),
            (x as f32, base as f32 + TICK_HALF_LENGTH),
            TRACE_COLOR,
        );
    }
}

/// Image column at which `wavelength` is sampled.
pub fn column_for(aperture: &ApertureGeometry, wavelength: f64, config: &CalibrationConfig) -> f64 {
    aperture.center_x as f64 - wavelength / config.wavelength_scale
}
