use std::path::PathBuf;

use crate::aperture::ApertureGeometry;
use crate::exposure::ExposureReport;
use crate::spectrum::Spectrum;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Locating,
    Scanning,
    Drawing,
    Normalizing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Locating => write!(f, "Locating aperture"),
            Self::Scanning => write!(f, "Scanning spectrum"),
            Self::Drawing => write!(f, "Drawing overlay"),
            Self::Normalizing => write!(f, "Normalizing"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Measurement extracted from a single capture.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub aperture: ApertureGeometry,
    /// Raw, efficiency-corrected amplitudes.
    pub spectrum: Spectrum,
    pub exposure: ExposureReport,
}

/// Result of a full pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub analysis: Analysis,
    /// Amplitudes scaled into (0, 1].
    pub normalized: Spectrum,
    /// Files written, in the order they were saved.
    pub written: Vec<PathBuf>,
}
