use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use preview_core::config::PreviewConfig;
use preview_core::engine::PreviewEngine;
use preview_core::telemetry::{init_tracing, LogFormat};

#[derive(Parser)]
#[command(
    name = "preview",
    author,
    version,
    about = "Render a design directive into a static operator-day HTML preview",
    long_about = None
)]
struct Cli {
    /// Design directive JSON file
    input: PathBuf,
    /// Output HTML file [default: <input stem>_preview.html]
    output: Option<PathBuf>,
    /// JSON run configuration; command-line flags take precedence
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append the card-by-card decision timeline
    #[arg(long)]
    timeline: bool,
    /// Also write the derived view data as JSON
    #[arg(long, value_name = "PATH")]
    emit_views: Option<PathBuf>,
    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version are not errors.
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_tracing(cli.log_format) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PreviewConfig::load(path)?,
        None => PreviewConfig::default(),
    };
    if cli.timeline {
        config.render.include_timeline = true;
    }
    if cli.emit_views.is_some() {
        config.emit_views = cli.emit_views;
    }

    let engine = PreviewEngine::new(config);
    let outcome = engine
        .generate(&cli.input, cli.output.as_deref())
        .with_context(|| format!("no preview generated from {}", cli.input.display()))?;

    println!("Preview generated: {}", outcome.output_path.display());
    if let Some(views_path) = &outcome.views_path {
        println!("View data written: {}", views_path.display());
    }
    println!();
    println!("Open the preview in your browser:");
    println!("   file://{}", outcome.output_path.display());
    Ok(())
}
