#![allow(dead_code)]

use grating_core::aperture::{ApertureGeometry, HotspotBounds};
use image::{Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Luminance 700: above the 688 threshold of a 765 peak, below the peak.
pub const HOTSPOT_BODY: Rgb<u8> = Rgb([233, 234, 233]);

/// Fill the inclusive rectangle `[x0, x1] x [y0, y1]`.
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Synthetic stand-in for the 1296x972 reference capture.
///
/// Hotspot body spans columns 1040..=1057 and rows 378..=560, with a
/// saturated pixel at (1044, 486) on the midline and another at (1048, 469).
/// Everything else, including (0, 0), is black.
pub fn reference_capture() -> RgbImage {
    let mut img = RgbImage::new(1296, 972);
    fill_rect(&mut img, 1040, 378, 1057, 560, HOTSPOT_BODY);
    img.put_pixel(1044, 486, WHITE);
    img.put_pixel(1048, 469, WHITE);
    img
}

/// 640x240 capture with a white hotspot at columns 560..=575, rows
/// 100..=140 and a lit spectrum band covering columns 0..=200, rows 90..=170.
///
/// The locator reports center (567, 120) and height 36 for this image.
pub fn spectrum_capture() -> RgbImage {
    let mut img = RgbImage::new(640, 240);
    fill_rect(&mut img, 560, 100, 575, 140, WHITE);
    for x in 0..=200u32 {
        let ramp = (x % 64) as u8;
        for y in 90..=170u32 {
            img.put_pixel(x, y, Rgb([40 + ramp, 90 + ramp, 30 + ramp / 2]));
        }
    }
    img
}

/// Image filled with a single color.
pub fn uniform_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Geometry with only the fields the scanner reads set.
pub fn aperture_at(center_x: u32, center_y: u32, height: u32) -> ApertureGeometry {
    ApertureGeometry {
        center_x,
        center_y,
        height,
        peak_luminance: 765,
        brightest_x: center_x,
        threshold: 688,
        bounds: HotspotBounds::default(),
    }
}
