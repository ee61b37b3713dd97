pub mod efficiency;
pub mod scan;
pub mod types;

pub use efficiency::{EfficiencyCurve, NotchCorrection};
pub use scan::scan;
pub use types::{Spectrum, WavelengthSample};
