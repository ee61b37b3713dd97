pub mod aperture;
pub mod calibration;
pub mod consts;
pub mod error;
pub mod exposure;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod spectrum;

pub use aperture::{locate, ApertureGeometry};
pub use calibration::CalibrationConfig;
pub use error::{GratingError, Result};
pub use frame::PixelSource;
pub use spectrum::{scan, Spectrum, WavelengthSample};
