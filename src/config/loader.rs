//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shell
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::ShellConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "PAYROLL_CONFIG";

/// Loads and provides access to the shell configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// assert_eq!(loader.config().labels.full_time, "Full-Time");
/// # Ok::<(), payroll_roster::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ShellConfig,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded shell configuration");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Loads from the file named by [`CONFIG_PATH_ENV`], or falls back to
    /// the defaults when the variable is unset.
    pub fn from_env() -> PayrollResult<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses YAML text. An empty document yields the defaults.
    fn parse(content: &str) -> Result<ShellConfig, String> {
        if content.trim().is_empty() {
            return Ok(ShellConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ShellConfig {
        self.config
    }

    /// The file the configuration came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
