//! Error types for figure construction and PDF compilation.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// The main error type for tikzgen operations.
#[derive(Debug, Error)]
pub enum TikzError {
    /// A malformed call: unresolvable or duplicate node label, or an empty
    /// point list. Detected at the offending `add_*` call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The external LaTeX compiler failed or produced no artifact.
    #[error("compilation failed: {0}")]
    Compile(#[from] CompileError),
}

/// Failure modes of the external compiler invocation.
///
/// The `Failed` variant carries the compiler's captured diagnostics
/// verbatim so the generated markup can be debugged from the error alone.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiler executable could not be launched (typically not on
    /// `PATH`).
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        /// The compiler command that was invoked.
        command: String,
        /// The underlying launch error.
        source: io::Error,
    },

    /// The compiler exited with a non-zero status.
    #[error("`{command}` exited with {status}:\n{diagnostics}")]
    Failed {
        /// The compiler command that was invoked.
        command: String,
        /// The exit status.
        status: ExitStatus,
        /// Captured stderr (with stdout appended when stderr is empty,
        /// since LaTeX engines log to stdout).
        diagnostics: String,
    },

    /// The compiler exited successfully but the expected PDF was not
    /// produced in the working directory.
    #[error("`{command}` produced no output artifact")]
    MissingArtifact {
        /// The compiler command that was invoked.
        command: String,
    },

    /// Temp-directory setup, source write, or artifact copy-out failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
