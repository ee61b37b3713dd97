use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DIMMING_CONSTANT, DEFAULT_EDGE_ROWS, DEFAULT_EDGE_WEIGHT, DEFAULT_GREEN_WEIGHT,
    DEFAULT_HEIGHT_REDUCTION, DEFAULT_MAX_GAP_HEIGHT, DEFAULT_MAX_WAVELENGTH,
    DEFAULT_MIN_WAVELENGTH, DEFAULT_SCAN_ANGLE, DEFAULT_SCAN_FRACTION, DEFAULT_WAVELENGTH_SCALE,
};
use crate::error::{GratingError, Result};
use crate::spectrum::efficiency::EfficiencyCurve;

/// Per-instrument optical calibration shared by the aperture locator and the
/// spectral scanner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Fraction of peak luminance that still counts as inside the hotspot.
    pub dimming_constant: f64,
    /// Shrink factor applied to the measured hotspot height.
    pub height_reduction: f64,
    /// Consecutive dark pixels tolerated by the vertical bound search.
    pub max_gap_height: u32,
    /// Nanometers per pixel of horizontal offset from the aperture.
    pub wavelength_scale: f64,
    /// Tilt of the scan line in radians.
    pub scan_angle: f64,
    pub min_wavelength: f64,
    pub max_wavelength: f64,
    /// Fraction of the distance to the aperture center that is scanned.
    pub scan_fraction: f64,
    /// Rows at each edge of the integration window that get `edge_weight`.
    pub edge_rows: f64,
    pub edge_weight: f64,
    pub green_weight: f64,
    pub efficiency: EfficiencyCurve,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            dimming_constant: DEFAULT_DIMMING_CONSTANT,
            height_reduction: DEFAULT_HEIGHT_REDUCTION,
            max_gap_height: DEFAULT_MAX_GAP_HEIGHT,
            wavelength_scale: DEFAULT_WAVELENGTH_SCALE,
            scan_angle: DEFAULT_SCAN_ANGLE,
            min_wavelength: DEFAULT_MIN_WAVELENGTH,
            max_wavelength: DEFAULT_MAX_WAVELENGTH,
            scan_fraction: DEFAULT_SCAN_FRACTION,
            edge_rows: DEFAULT_EDGE_ROWS,
            edge_weight: DEFAULT_EDGE_WEIGHT,
            green_weight: DEFAULT_GREEN_WEIGHT,
            efficiency: EfficiencyCurve::default(),
        }
    }
}

impl CalibrationConfig {
    /// Reject values that would make the locator or scanner meaningless.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GratingError::InvalidCalibration(msg));

        if !(self.dimming_constant > 0.0 && self.dimming_constant <= 1.0) {
            return invalid(format!(
                "dimming_constant must be in (0, 1], got {}",
                self.dimming_constant
            ));
        }
        if self.height_reduction <= 0.0 {
            return invalid(format!(
                "height_reduction must be positive, got {}",
                self.height_reduction
            ));
        }
        if self.wavelength_scale <= 0.0 {
            return invalid(format!(
                "wavelength_scale must be positive, got {}",
                self.wavelength_scale
            ));
        }
        if self.min_wavelength >= self.max_wavelength {
            return invalid(format!(
                "wavelength band is empty: [{}, {}]",
                self.min_wavelength, self.max_wavelength
            ));
        }
        if !(self.scan_fraction > 0.0 && self.scan_fraction <= 1.0) {
            return invalid(format!(
                "scan_fraction must be in (0, 1], got {}",
                self.scan_fraction
            ));
        }
        if self.edge_rows < 0.0 || self.edge_weight < 0.0 || self.green_weight < 0.0 {
            return invalid("edge and channel weights must be non-negative".into());
        }
        self.efficiency.validate()
    }
}
