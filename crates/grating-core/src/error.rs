use thiserror::Error;

#[derive(Error, Debug)]
pub enum GratingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No hotspot found right of image center (peak luminance is 0)")]
    NoHotspot,

    #[error("Degenerate aperture at ({center_x}, {center_y}) with height {height}")]
    DegenerateAperture {
        center_x: u32,
        center_y: u32,
        height: u32,
    },

    #[error("Empty spectrum: every wavelength bin has zero amplitude")]
    EmptySpectrum,

    #[error("Invalid calibration: {0}")]
    InvalidCalibration(String),
}

pub type Result<T> = std::result::Result<T, GratingError>;
