//! Configuration validation.
//!
//! # Responsibilities
//! - Reject namespaces that would enable debug for every call site
//! - Reject default keys that break the text format
//! - Check output settings are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: &LogConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::{LogConfig, OutputConfig};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("debug_namespaces[{0}] is empty and would match every target")]
    EmptyNamespace(usize),

    #[error("defaults contains an empty key")]
    EmptyDefaultKey,

    #[error("default key '{0}' contains whitespace or '='")]
    InvalidDefaultKey(String),

    #[error("output file path is empty")]
    EmptyOutputPath,
}

pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (i, ns) in config.debug_namespaces.iter().enumerate() {
        if ns.is_empty() {
            errors.push(ValidationError::EmptyNamespace(i));
        }
    }

    for key in config.defaults.keys() {
        if key.is_empty() {
            errors.push(ValidationError::EmptyDefaultKey);
        } else if key.chars().any(|c| c.is_whitespace() || c == '=') {
            errors.push(ValidationError::InvalidDefaultKey(key.clone()));
        }
    }

    if let OutputConfig::File { path } = &config.output {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyOutputPath);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
