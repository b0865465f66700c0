//! CLI logic for the Nixie sequence-diagram exporter.
//!
//! Reads a serialized diagram model from a JSON file, converts it to Mermaid
//! `sequenceDiagram` text, and writes the result to the output path.

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;

use std::{fs, io};

use log::info;
use thiserror::Error;

use nixie::{MermaidExporter, NixieError, model::Diagram};

/// Errors surfaced by the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to parse input diagram: {0}")]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    Export(#[from] NixieError),
}

/// Run the Nixie CLI application
///
/// Loads configuration, reads the input diagram, exports it to Mermaid text
/// and writes the result to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input deserialization errors
/// - Export errors (unknown or missing numbering mode, malformed
///   sequence numbers)
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Exporting diagram"
    );

    let export_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let diagram: Diagram = serde_json::from_str(&source)?;

    let exporter = MermaidExporter::new(export_config);
    let mermaid = exporter.export(&diagram)?;

    fs::write(&args.output, mermaid)?;

    info!(output_file = args.output; "Mermaid exported successfully");

    Ok(())
}
