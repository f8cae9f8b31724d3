use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use preview_ir::parse::{parse_directive, ParseError};
use preview_ir::types::DesignDirective;
use preview_render::render_document;
use preview_views::build_views;
use tracing::{debug, info, warn};

use crate::config::PreviewConfig;
use crate::summary::RunSummary;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{} is {size} bytes, above the {limit}-byte input limit", path.display())]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("invalid design directive: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize view data: {0}")]
    Views(#[from] serde_json::Error),
}

/// Files produced by a successful run.
#[derive(Debug, Clone)]
pub struct PreviewOutcome {
    /// Absolute path of the rendered document when it can be resolved.
    pub output_path: PathBuf,
    pub views_path: Option<PathBuf>,
    pub summary: RunSummary,
}

/// Default output location: `<input stem><suffix>` in the working directory.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "design".to_string());
    PathBuf::from(format!("{stem}{suffix}"))
}

/// Drives one directive through parse, classify, build and render.
pub struct PreviewEngine {
    config: PreviewConfig,
}

impl PreviewEngine {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Read and parse a directive file. Nothing is written on failure.
    pub fn load(&self, path: &Path) -> Result<DesignDirective, EngineError> {
        let metadata = fs::metadata(path).map_err(|source| read_error(path, source))?;
        let limit = self.config.max_input_bytes;
        if metadata.len() > limit {
            return Err(EngineError::InputTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
        let text = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
        let directive = parse_directive(&text)?;
        debug!(
            path = %path.display(),
            system = %directive.system_name,
            events = directive.events().len(),
            "loaded design directive"
        );
        Ok(directive)
    }

    /// Load `input`, render it and write the document to `output` (or the
    /// default path derived from `input`). A failed run leaves no files
    /// behind.
    pub fn generate(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PreviewOutcome, EngineError> {
        let directive = self.load(input)?;

        let views = build_views(&directive);
        let summary = RunSummary::new(directive.events().len(), &views);
        let document = render_document(&views, &self.config.render);
        let views_json = match &self.config.emit_views {
            Some(path) => Some((path, serde_json::to_string_pretty(&views)?)),
            None => None,
        };

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, &self.config.output_suffix));
        write_file(&output, &document)?;

        let views_path = match views_json {
            Some((path, json)) => {
                if let Err(err) = write_file(path, &json) {
                    if let Err(cleanup) = fs::remove_file(&output) {
                        warn!(output = %output.display(), error = %cleanup, "failed to remove partial output");
                    }
                    return Err(err);
                }
                Some(resolve(path))
            }
            None => None,
        };
        let output_path = resolve(&output);

        info!(
            output = %output_path.display(),
            events = summary.events,
            decisions = summary.decisions,
            audit = summary.audit_records,
            status = summary.status.as_str(),
            warnings = summary.warning_count,
            "preview generated"
        );
        Ok(PreviewOutcome {
            output_path,
            views_path,
            summary,
        })
    }
}

fn read_error(path: &Path, source: io::Error) -> EngineError {
    if source.kind() == io::ErrorKind::NotFound {
        EngineError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        EngineError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), EngineError> {
    fs::write(path, contents).map_err(|source| EngineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
