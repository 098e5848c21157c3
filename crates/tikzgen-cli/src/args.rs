//! Command-line argument definitions for the tikzgen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the emitted
//! artifact kind, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the tikzgen diagram tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.pdf")]
    pub output: String,

    /// What to emit: TikZ markup or a compiled PDF
    #[arg(long, value_enum, default_value_t = Emit::Pdf)]
    pub emit: Emit,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// The artifact kind written to the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// TikZ markup (the rendered scene, plus figure envelope if captioned)
    Tex,
    /// PDF produced by the external LaTeX compiler
    Pdf,
}
