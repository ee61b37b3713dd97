use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calibration::CalibrationConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    /// Output stem. `_out.jpg`, `.csv` and `_chart.png` are appended to it.
    pub output: PathBuf,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub outputs: OutputConfig,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            calibration: CalibrationConfig::default(),
            outputs: OutputConfig::default(),
        }
    }

    pub fn overlay_path(&self) -> PathBuf {
        with_suffix(&self.output, "_out.jpg")
    }

    pub fn csv_path(&self) -> PathBuf {
        with_suffix(&self.output, ".csv")
    }

    pub fn chart_path(&self) -> PathBuf {
        with_suffix(&self.output, "_chart.png")
    }
}

/// Which artifacts the pipeline writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Annotated copy of the capture.
    pub overlay: bool,
    pub csv: bool,
    /// Rendered spectrum chart.
    pub chart: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            overlay: true,
            csv: true,
            chart: true,
        }
    }
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
