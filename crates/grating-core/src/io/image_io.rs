use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use crate::consts::OVERLAY_JPEG_QUALITY;
use crate::error::{GratingError, Result};

/// Decode any supported image file into 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(GratingError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(img)
}

/// Save as baseline JPEG at `quality` (1-100).
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    img.write_with_encoder(encoder)?;
    Ok(())
}

/// Save as 8-bit RGB PNG.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGB image, choosing format from file extension. Unknown
/// extensions fall back to JPEG.
pub fn save_rgb_image(img: &RgbImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(img, path),
        Some("tiff" | "tif") => {
            img.save_with_format(path, ImageFormat::Tiff)?;
            Ok(())
        }
        _ => save_jpeg(img, path, OVERLAY_JPEG_QUALITY),
    }
}
