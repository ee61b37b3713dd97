use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EFFICIENCY_FLOOR, DEFAULT_EFFICIENCY_ORIGIN, DEFAULT_EFFICIENCY_SPAN,
    NOTCH_HALF_WIDTH, NOTCH_STRENGTH, ORANGE_NOTCH_CENTER, YELLOW_NOTCH_CENTER,
};
use crate::error::{GratingError, Result};

/// Triangular multiplicative correction around `center`.
///
/// Inside the open window `(center - half_width, center + half_width)` the
/// efficiency is scaled by `1 + gain * (half_width - |wl - center|) / half_width`.
/// A negative gain suppresses, a positive gain boosts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotchCorrection {
    pub center: f64,
    pub half_width: f64,
    pub gain: f64,
}

impl NotchCorrection {
    /// Multiplier for `wavelength`; 1.0 outside the window.
    pub fn factor(&self, wavelength: f64) -> f64 {
        let distance = (wavelength - self.center).abs();
        if distance >= self.half_width {
            return 1.0;
        }
        let depth = (self.half_width - distance) / self.half_width;
        1.0 + depth * self.gain
    }
}

impl fmt::Display for NotchCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nm \u{b1}{} ({:+.0}%)",
            self.center,
            self.half_width,
            self.gain * 100.0
        )
    }
}

/// Grating diffraction efficiency model: a linear falloff with a floor,
/// followed by notch corrections for sensor artifacts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyCurve {
    /// Wavelength at which the linear part equals 1.0.
    pub origin: f64,
    /// Distance past `origin` at which the linear part reaches 0.0.
    pub span: f64,
    pub floor: f64,
    pub notches: Vec<NotchCorrection>,
}

impl Default for EfficiencyCurve {
    fn default() -> Self {
        Self {
            origin: DEFAULT_EFFICIENCY_ORIGIN,
            span: DEFAULT_EFFICIENCY_SPAN,
            floor: DEFAULT_EFFICIENCY_FLOOR,
            notches: vec![
                // Yellow dip, likely camera sensitivity.
                NotchCorrection {
                    center: YELLOW_NOTCH_CENTER,
                    half_width: NOTCH_HALF_WIDTH,
                    gain: -NOTCH_STRENGTH,
                },
                NotchCorrection {
                    center: ORANGE_NOTCH_CENTER,
                    half_width: NOTCH_HALF_WIDTH,
                    gain: NOTCH_STRENGTH,
                },
            ],
        }
    }
}

impl EfficiencyCurve {
    /// Linear falloff clamped to `floor`, before notch corrections.
    pub fn base(&self, wavelength: f64) -> f64 {
        let linear = (self.span - (wavelength - self.origin)) / self.span;
        linear.max(self.floor)
    }

    /// Dimensionless efficiency at `wavelength`. Notches apply in order, so
    /// overlapping windows compound.
    pub fn efficiency(&self, wavelength: f64) -> f64 {
        self.notches
            .iter()
            .fold(self.base(wavelength), |eff, notch| {
                eff * notch.factor(wavelength)
            })
    }

    pub fn validate(&self) -> Result<()> {
        if self.span <= 0.0 {
            return Err(GratingError::InvalidCalibration(format!(
                "efficiency span must be positive, got {}",
                self.span
            )));
        }
        if self.floor <= 0.0 {
            return Err(GratingError::InvalidCalibration(format!(
                "efficiency floor must be positive, got {}",
                self.floor
            )));
        }
        if let Some(notch) = self.notches.iter().find(|n| n.half_width <= 0.0) {
            return Err(GratingError::InvalidCalibration(format!(
                "notch at {} nm has non-positive half-width",
                notch.center
            )));
        }
        if let Some(notch) = self.notches.iter().find(|n| n.gain <= -1.0) {
            return Err(GratingError::InvalidCalibration(format!(
                "notch at {} nm would drive efficiency to zero (gain {})",
                notch.center, notch.gain
            )));
        }
        Ok(())
    }
}
