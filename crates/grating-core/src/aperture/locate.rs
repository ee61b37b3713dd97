use tracing::debug;

use crate::calibration::CalibrationConfig;
use crate::frame::PixelSource;

use super::geometry::{ApertureGeometry, HotspotBounds};

/// Find the zero-order hotspot right of the image center.
///
/// Pipeline: brightest column on the horizontal midline -> threshold at
/// `dimming_constant` of its luminance -> first below-threshold column on
/// each side -> gap-tolerant vertical search in the center column.
///
/// Never fails. An image without any lit pixel right of center yields a
/// geometry with `peak_luminance == 0`.
pub fn locate<P: PixelSource + ?Sized>(pixels: &P, config: &CalibrationConfig) -> ApertureGeometry {
    let (width, height) = (pixels.width(), pixels.height());
    if width == 0 || height == 0 {
        return ApertureGeometry::default();
    }
    let mid_x = pixels.midpoint_x();
    let mid_y = pixels.midpoint_y();

    let (brightest_x, peak_luminance) = find_brightest_x(pixels);
    let threshold = hotspot_threshold(peak_luminance, config.dimming_constant);

    let left = find_horizontal_bound(
        pixels,
        (mid_x + 1..=brightest_x).rev(),
        threshold,
        brightest_x,
    );
    let right = find_horizontal_bound(pixels, brightest_x..width, threshold, brightest_x);
    let center_x = (left + right) / 2;

    // Row 0 is never visited going up.
    let top = find_vertical_bound(
        pixels,
        center_x,
        (1..=mid_y).rev(),
        threshold,
        config.max_gap_height,
    );
    let bottom = find_vertical_bound(
        pixels,
        center_x,
        mid_y..height,
        threshold,
        config.max_gap_height,
    );
    let center_y = (top + bottom) / 2;
    let aperture_height = (top.abs_diff(bottom) as f64 * config.height_reduction).round() as u32;

    debug!(
        brightest_x,
        peak_luminance,
        threshold,
        left,
        right,
        top,
        bottom,
        "Hotspot bounds"
    );

    ApertureGeometry {
        center_x,
        center_y,
        height: aperture_height,
        peak_luminance,
        brightest_x,
        threshold,
        bounds: HotspotBounds {
            left,
            right,
            top,
            bottom,
        },
    }
}

/// Brightest column on the horizontal midline, scanning from the center to
/// the right edge. Ties keep the leftmost column. Returns `(0, 0)` when
/// every pixel is black.
pub fn find_brightest_x<P: PixelSource + ?Sized>(pixels: &P) -> (u32, u32) {
    let row = pixels.midpoint_y();
    let mut brightest = (0, 0);
    for x in pixels.midpoint_x()..pixels.width() {
        let lux = pixels.luminance(x, row);
        if lux > brightest.1 {
            brightest = (x, lux);
        }
    }
    brightest
}

/// Integer luminance floor of the hotspot, truncated toward zero.
pub fn hotspot_threshold(peak_luminance: u32, dimming_constant: f64) -> u32 {
    (peak_luminance as f64 * dimming_constant) as u32
}

/// First column in `columns` on the midline whose luminance falls below
/// `threshold`, or `fallback` if the hotspot runs to the end of the range.
pub fn find_horizontal_bound<P, I>(pixels: &P, columns: I, threshold: u32, fallback: u32) -> u32
where
    P: PixelSource + ?Sized,
    I: IntoIterator<Item = u32>,
{
    let row = pixels.midpoint_y();
    columns
        .into_iter()
        .find(|&x| pixels.luminance(x, row) < threshold)
        .unwrap_or(fallback)
}

/// Last in-threshold row in `rows` along `column`, tolerating up to
/// `max_gap` consecutive dark pixels. Falls back to the vertical midpoint.
///
/// Unlike the horizontal search this reports the last lit row rather than
/// the first dark one, so isolated dark pixels inside the hotspot do not end
/// the search early.
pub fn find_vertical_bound<P, I>(
    pixels: &P,
    column: u32,
    rows: I,
    threshold: u32,
    max_gap: u32,
) -> u32
where
    P: PixelSource + ?Sized,
    I: IntoIterator<Item = u32>,
{
    let mut bound = pixels.midpoint_y();
    let mut gap = 0u32;
    for y in rows {
        if pixels.luminance(column, y) < threshold {
            gap += 1;
            if gap > max_gap {
                break;
            }
        } else {
            bound = y;
            gap = 0;
        }
    }
    bound
}
