use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::consts::{
    CHART_ANTIALIAS, CHART_AXIS_HEIGHT, CHART_SIZE, CHART_WAVELENGTH_RANGE, MAJOR_TICK_STEP,
    MINOR_TICK_STEP, TICK_RANGE,
};
use crate::spectrum::Spectrum;

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Band edges (nm) of the piecewise wavelength -> RGB map.
const COLOR_THRESHOLDS: [f64; 7] = [380.0, 400.0, 450.0, 465.0, 520.0, 565.0, 780.0];

/// Approximate display color of a wavelength.
///
/// Piecewise linear hue ramp between [`COLOR_THRESHOLDS`], dimmed towards
/// the limits of vision (380-420 nm and 600-780 nm). Wavelengths outside
/// 380-780 nm are black.
pub fn wavelength_to_color(wavelength: f64) -> Rgb<u8> {
    let mut color = [0.0_f64; 3];
    let mut factor = 0.0;

    for (i, band) in COLOR_THRESHOLDS.windows(2).enumerate() {
        if wavelength < band[0] || wavelength >= band[1] {
            continue;
        }
        // Odd bands ramp down instead of up.
        let (t1, t2) = if i % 2 == 0 {
            (band[0], band[1])
        } else {
            (band[1], band[0])
        };
        if i < 5 {
            color[i % 3] = (wavelength - t2) / (t1 - t2);
        }
        color[2 - i / 2] = 1.0;
        factor = 1.0;
        break;
    }

    if (380.0..420.0).contains(&wavelength) {
        factor = 0.2 + 0.8 * (wavelength - 380.0) / (420.0 - 380.0);
    } else if (600.0..780.0).contains(&wavelength) {
        factor = 0.2 + 0.8 * (780.0 - wavelength) / (780.0 - 600.0);
    }

    Rgb(color.map(|c| (255.0 * c * factor) as u8))
}

/// Render a normalized spectrum as a color chart of `CHART_SIZE` pixels.
///
/// The background is a rainbow spaced evenly in frequency; everything above
/// the curve is blanked. Drawn at `CHART_ANTIALIAS`x and downsampled.
pub fn render_chart(normalized: &Spectrum) -> RgbImage {
    let aa = CHART_ANTIALIAS;
    let width = CHART_SIZE.0 * aa;
    let full_height = CHART_SIZE.1 * aa;
    let plot_height = full_height - CHART_AXIS_HEIGHT * aa;
    let (w1, w2) = CHART_WAVELENGTH_RANGE;

    let mut img = RgbImage::from_pixel(width, full_height, WHITE);

    // Iterate across frequencies, not wavelengths.
    let (f1, f2) = (1.0 / w1, 1.0 / w2);
    for x in 0..width {
        let wavelength = 1.0 / (f1 - x as f64 / width as f64 * (f1 - f2));
        let color = wavelength_to_color(wavelength);
        for y in 0..plot_height {
            img.put_pixel(x, y, color);
        }
    }

    let to_x = |wl: f64| (wl - w1) / (w2 - w1) * width as f64;
    let to_y = |amplitude: f64| (1.0 - amplitude.clamp(0.0, 1.0)) * plot_height as f64;

    for x in 0..width {
        let wavelength = w1 + x as f64 / width as f64 * (w2 - w1);
        let top = match interpolate(normalized, wavelength) {
            Some(amplitude) => to_y(amplitude) as u32,
            None => plot_height,
        };
        for y in 0..top.min(plot_height) {
            img.put_pixel(x, y, WHITE);
        }
    }

    for pair in normalized.samples().windows(2) {
        let start = (to_x(pair[0].wavelength) as f32, to_y(pair[0].amplitude) as f32);
        let end = (to_x(pair[1].wavelength) as f32, to_y(pair[1].amplitude) as f32);
        draw_line_segment_mut(&mut img, start, end, BLACK);
    }

    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, plot_height as i32).of_size(width, aa),
        BLACK,
    );

    let (first, last) = TICK_RANGE;
    for wl in (first..=last).step_by(MINOR_TICK_STEP as usize) {
        let length = if wl % MAJOR_TICK_STEP == 0 { 5 } else { 3 };
        let x = to_x(wl as f64) as i32;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, plot_height as i32).of_size(aa, length * aa),
            BLACK,
        );
    }

    imageops::resize(&img, CHART_SIZE.0, CHART_SIZE.1, FilterType::Lanczos3)
}

/// Linearly interpolated amplitude at `wavelength`, or `None` outside the
/// sampled range. Samples must be in increasing-wavelength order.
pub fn interpolate(spectrum: &Spectrum, wavelength: f64) -> Option<f64> {
    let samples = spectrum.samples();
    let first = samples.first()?;
    let last = samples.last()?;
    if wavelength < first.wavelength || wavelength > last.wavelength {
        return None;
    }

    let idx = samples.partition_point(|s| s.wavelength < wavelength);
    if idx == 0 {
        return Some(first.amplitude);
    }
    let (lo, hi) = (samples[idx - 1], samples[idx]);
    let t = (wavelength - lo.wavelength) / (hi.wavelength - lo.wavelength);
    Some(lo.amplitude + t * (hi.amplitude - lo.amplitude))
}
