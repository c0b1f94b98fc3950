//! CLI logic for the Transit sequence diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use transit::{SequenceRenderer, TransitError};

/// Run the Transit CLI application
///
/// Reads the input file, renders it with the loaded configuration and
/// writes the SVG to the output path.
///
/// # Errors
///
/// Returns `TransitError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), TransitError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = SequenceRenderer::new(app_config);
    let diagram = renderer.parse(&source)?;
    let svg = renderer.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
