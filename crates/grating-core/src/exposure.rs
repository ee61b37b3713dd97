use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{EXPOSURE_IDEAL_MAX, EXPOSURE_IDEAL_MIN, MAX_LUMINANCE};

/// What to change on the next capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExposureAdvice {
    IncreaseShutter,
    Good,
    ReduceShutter,
}

impl fmt::Display for ExposureAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncreaseShutter => write!(f, "consider increasing shutter time"),
            Self::Good => write!(f, "exposure is within the ideal range"),
            Self::ReduceShutter => write!(f, "consider reducing shutter time"),
        }
    }
}

/// Peak scan amplitude relative to a saturated pixel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExposureReport {
    pub exposure: f64,
    pub advice: ExposureAdvice,
}

/// Compare the unnormalized peak amplitude with the ideal exposure band
/// [`EXPOSURE_IDEAL_MIN`, `EXPOSURE_IDEAL_MAX`] of `MAX_LUMINANCE`.
pub fn assess(max_amplitude: f64) -> ExposureReport {
    let exposure = max_amplitude / MAX_LUMINANCE as f64;
    let advice = if exposure < EXPOSURE_IDEAL_MIN {
        ExposureAdvice::IncreaseShutter
    } else if exposure > EXPOSURE_IDEAL_MAX {
        ExposureAdvice::ReduceShutter
    } else {
        ExposureAdvice::Good
    };
    ExposureReport { exposure, advice }
}
