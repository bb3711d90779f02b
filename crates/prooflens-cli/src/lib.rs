//! Prooflens CLI library
//!
//! This module contains the core CLI logic for the Prooflens trace viewer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use prooflens::{ProoflensError, TraceViewer, export::Format, schema::trace_schema};

/// Run the Prooflens CLI application
///
/// This function loads the input trace file, renders it with the configured
/// viewing options and writes the result to the output file. With
/// `--print-schema` it writes the JSON Schema of trace files instead.
///
/// # Errors
///
/// Returns `ProoflensError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Trace parsing errors
/// - Trace validation errors
pub fn run(args: &Args) -> Result<(), ProoflensError> {
    if args.print_schema {
        let schema = serde_json::to_string_pretty(&trace_schema()).map_err(io::Error::from)?;
        fs::write(&args.output, schema)?;
        info!(output_file = args.output; "Schema exported successfully");
        return Ok(());
    }

    let input = args.input.as_deref().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "no input trace file given")
    })?;

    info!(
        input_path = input,
        output_path = args.output;
        "Processing trace"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args);

    let bytes = fs::read(input)?;

    let viewer = TraceViewer::new(app_config);
    let trace = viewer.load(&bytes)?;

    let format = viewer.config().export().format();
    let rendered = match format {
        Format::Html => viewer.render_html(&trace),
        Format::Text => viewer.render_text(&trace),
    };

    fs::write(&args.output, rendered)?;

    info!(output_file = args.output, format:%; "Trace exported successfully");

    Ok(())
}
