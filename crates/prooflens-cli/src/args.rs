//! Command-line argument definitions for the Prooflens CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the trace file and output path, the
//! configuration file, the initial viewing options that override it, and
//! logging verbosity.

use clap::Parser;

use prooflens::{export::Format, printing::PrintingVariant};

/// Command-line arguments for the Prooflens trace viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the trace file, plain JSON or zstd-compressed
    #[arg(help = "Path to the input trace file", required_unless_present = "print_schema")]
    pub input: Option<String>,

    /// Path to the output file
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Printing variant (default, full_path, no_notations, low_level, default_pretty)
    #[arg(short, long)]
    pub printing_variant: Option<PrintingVariant>,

    /// Show every tactic subtree
    #[arg(long)]
    pub expand_all: bool,

    /// Open every tactic step
    #[arg(long)]
    pub open_steps: bool,

    /// Output format (html, text)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Write the JSON Schema of trace files instead of rendering a trace
    #[arg(long)]
    pub print_schema: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
