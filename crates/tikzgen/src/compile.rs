//! External LaTeX compiler invocation.
//!
//! [`Compiler`] wraps a figure's rendered markup in a standalone document,
//! writes it into a scoped temporary directory, runs the compiler as a
//! blocking child process with a non-interactive flag, and copies the
//! produced `figure.pdf` to the caller's output path. The temporary
//! directory is removed on every exit path ([`tempfile::TempDir`] cleans up
//! on drop). There is no retry, timeout, or cancellation; each call is
//! fully synchronous and independent.

use std::fs;
use std::path::Path;
use std::process::Command;

use log::{debug, info};
use serde::Deserialize;

use crate::error::CompileError;
use crate::figure::TikzFigure;

/// Conventional names used inside the temporary working directory.
const SOURCE_NAME: &str = "figure.tex";
const ARTIFACT_NAME: &str = "figure.pdf";

/// Configuration for the external compiler invocation.
///
/// Defaults to `pdflatex`; any LaTeX engine with the same contract
/// (source path in, `figure.pdf` out, `-interaction=nonstopmode` accepted)
/// can be substituted, e.g. `lualatex`.
#[derive(Debug, Clone, Deserialize)]
pub struct Compiler {
    /// The compiler executable, looked up on `PATH`.
    #[serde(default = "default_command")]
    command: String,
}

fn default_command() -> String {
    "pdflatex".to_string()
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

impl Compiler {
    /// Creates a compiler configuration with a custom command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The configured compiler command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Compiles `figure` to a PDF at `output_path`, overwriting any
    /// existing file there.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if the compiler cannot be launched, exits
    /// non-zero (the error carries the captured diagnostics verbatim),
    /// produces no `figure.pdf`, or the artifact cannot be copied out.
    pub fn compile(
        &self,
        figure: &TikzFigure,
        output_path: impl AsRef<Path>,
    ) -> Result<(), CompileError> {
        let output_path = output_path.as_ref();
        let document = figure.standalone_document();

        let workdir = tempfile::Builder::new().prefix("tikzgen-").tempdir()?;
        let source_path = workdir.path().join(SOURCE_NAME);
        fs::write(&source_path, &document)?;
        debug!(
            workdir = workdir.path().display().to_string(),
            bytes = document.len();
            "Wrote LaTeX source"
        );

        let output = Command::new(&self.command)
            .arg("-interaction=nonstopmode")
            .arg(SOURCE_NAME)
            .current_dir(workdir.path())
            .output()
            .map_err(|source| CompileError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // LaTeX engines log to stdout; fall back to it when stderr is
            // empty so the caller still gets a usable diagnostic.
            let diagnostics = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(CompileError::Failed {
                command: self.command.clone(),
                status: output.status,
                diagnostics,
            });
        }

        let artifact = workdir.path().join(ARTIFACT_NAME);
        if !artifact.exists() {
            return Err(CompileError::MissingArtifact {
                command: self.command.clone(),
            });
        }

        // fs::copy instead of rename: the output path may be on another
        // filesystem than the temp directory.
        fs::copy(&artifact, output_path)?;
        info!(output_path = output_path.display().to_string(); "PDF written");

        Ok(())
    }
}
