//! CLI logic for the tikzgen diagram tool.
//!
//! Reads a TOML diagram description, builds a [`tikzgen::TikzFigure`], and
//! writes either the TikZ markup or a compiled PDF.

pub mod error_adapter;

mod args;
mod config;
mod document;
mod error;

pub use args::{Args, Emit};
pub use error::CliError;

use std::fs;

use log::info;

use document::Document;

/// Run the tikzgen CLI application
///
/// This function parses the input description, builds the figure, and
/// writes the requested artifact to the output path.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing errors
/// - Figure construction errors (duplicate or unresolvable labels)
/// - Compilation errors from the external LaTeX compiler
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the input description
    let source = fs::read_to_string(&args.input)?;
    let figure = Document::parse(&source)?.into_figure()?;

    match args.emit {
        Emit::Tex => {
            fs::write(&args.output, figure.render())?;
            info!(output_file = args.output; "TikZ markup written");
        }
        Emit::Pdf => {
            app_config
                .compiler()
                .compile(&figure, &args.output)
                .map_err(tikzgen::TikzError::from)?;
            info!(output_file = args.output; "PDF compiled");
        }
    }

    Ok(())
}
