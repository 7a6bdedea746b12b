//! Configuration loading from disk and sink setup.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::schema::{LogConfig, OutputConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::logger::{Config, Logger};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("cannot open log file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = LogConfig::from_toml(&content)?;

    tracing::debug!(
        path = %path.display(),
        format = ?config.format,
        debug_namespaces = config.debug_namespaces.len(),
        "Logging configuration loaded"
    );
    Ok(config)
}

/// Load a configuration file and build the logger it describes.
pub fn load_logger(path: &Path) -> Result<Logger, ConfigError> {
    load_config(path)?.build()
}

impl LogConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LogConfig = toml::from_str(content)?;
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Validate, open the configured output and build a logger writing to it.
    ///
    /// Validation runs again here since fields may have been changed after
    /// loading (the CLI appends its flags).
    pub fn build(&self) -> Result<Logger, ConfigError> {
        validate_config(self).map_err(ConfigError::Validation)?;
        let sink = open_sink(&self.output)?;
        Ok(Logger::new(Config {
            sink,
            format: self.format,
            debug_namespaces: self.debug_namespaces.clone(),
            defaults: self.defaults.clone(),
        }))
    }
}

fn open_sink(output: &OutputConfig) -> Result<Box<dyn Write + Send>, ConfigError> {
    match output {
        OutputConfig::Stdout => Ok(Box::new(io::stdout())),
        OutputConfig::Stderr => Ok(Box::new(io::stderr())),
        OutputConfig::File { path } => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::Open {
                    path: path.clone(),
                    source,
                })?;
            Ok(Box::new(file))
        }
    }
}
