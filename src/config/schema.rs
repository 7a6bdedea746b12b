//! Configuration schema definitions.
//!
//! ```toml
//! format = "text"
//! debug_namespaces = ["myapp::net", "myapp::db"]
//!
//! [output]
//! kind = "file"
//! path = "/var/log/myapp.log"
//!
//! [defaults]
//! service = "myapp"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entry::Data;
use crate::serializer::Format;

/// Root logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Wire format of emitted entries.
    pub format: Format,

    /// Where entries are written.
    pub output: OutputConfig,

    /// Module path prefixes allowed to emit debug entries.
    pub debug_namespaces: Vec<String>,

    /// Annotations added to every entry.
    pub defaults: Data,
}

/// Output sink selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputConfig {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file, creating it if needed.
    File { path: PathBuf },
}
