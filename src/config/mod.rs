//! File-based logger configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogConfig (validated)
//!     → LogConfig::build (open sink) → Logger
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so an empty file yields JSON on stdout with debug off
//! - Validation reports all problems at once
//! - Loaded once at startup; there is no reload path

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_logger, ConfigError};
pub use schema::{LogConfig, OutputConfig};
pub use validation::{validate_config, ValidationError};
