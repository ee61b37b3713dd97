pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{analyze, run_pipeline};
pub use types::{Analysis, PipelineOutput, PipelineStage};
