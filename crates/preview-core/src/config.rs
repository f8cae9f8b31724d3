//! Run configuration and input limits.

use std::fs;
use std::path::{Path, PathBuf};

use preview_render::RenderOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration for a single preview run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Appended to the input file stem when no output path is given.
    pub output_suffix: String,
    /// Directive files larger than this are rejected before parsing.
    pub max_input_bytes: u64,
    /// Where to also write the derived view data as JSON, if anywhere.
    pub emit_views: Option<PathBuf>,
    pub render: RenderOptions,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_preview.html".to_string(),
            max_input_bytes: 16 * 1024 * 1024, // 16 MB
            emit_views: None,
            render: RenderOptions::default(),
        }
    }
}

impl PreviewConfig {
    /// Load a JSON config file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
