//! Error types for the logging path.

use std::io;

/// Error returned by `info` / `debug` and by serializers.
///
/// The only failure the logging path knows about is the sink refusing a
/// write. Everything else (empty message, missing annotations, debug
/// disabled) is handled without an error.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("sink write failed: {0}")]
    Write(#[from] io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = LogError> = std::result::Result<T, E>;
