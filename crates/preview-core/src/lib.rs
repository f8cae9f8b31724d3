pub mod config;
pub mod engine;
pub mod summary;
pub mod telemetry;

pub use config::PreviewConfig;
pub use engine::{default_output_path, EngineError, PreviewEngine, PreviewOutcome};
