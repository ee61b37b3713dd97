pub mod config;
pub mod locate;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result};
use grating_core::pipeline::config::PipelineConfig;
use tracing::debug;

/// Read a TOML pipeline config.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&contents).context("Invalid pipeline config")?;
    debug!(path = %path.display(), "Loaded pipeline config");
    Ok(config)
}
