//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::Path,
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use tikzgen::Compiler;

use crate::error::{CliError, ConfigError};

/// Top-level CLI configuration.
///
/// Currently this only selects the external LaTeX compiler; defaults are
/// used for anything not present in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Compiler configuration section.
    #[serde(default)]
    compiler: Compiler,
}

impl AppConfig {
    /// Returns the compiler configuration.
    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tikzgen/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("tikzgen/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "tikzgen", "tikzgen") {
        let config_dir = proj_dirs.config_dir();
        let system_config = config_dir.join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_uses_pdflatex() {
        let config = AppConfig::default();
        assert_eq!(config.compiler().command(), "pdflatex");
    }

    #[test]
    fn test_load_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[compiler]\ncommand = \"lualatex\"").unwrap();

        let config = load_config(Some(&path)).expect("config should load");
        assert_eq!(config.compiler().command(), "lualatex");
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let result = load_config(Some(&path));
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::MissingFile(_)))
        ));
    }

    #[test]
    fn test_malformed_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "compiler = 42").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::Parse(_)))
        ));
    }
}
