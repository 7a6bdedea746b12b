//! Entry rendering.
//!
//! # Data Flow
//! ```text
//! Logger builds Entry
//!     → Serializer::write(&entry)
//!         → render into an owned buffer (json.rs | text.rs)
//!         → lock sink, one write_all + flush, unlock
//!     → Ok(()) or LogError::Write
//! ```
//!
//! # Design Decisions
//! - Rendering happens outside the sink lock; only the write is serialized
//! - Each variant owns its sink behind a `Mutex`, so records never interleave
//! - New formats implement `Serializer` and plug into `Logger::with_serializer`

pub mod json;
pub mod text;

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::Result;

pub use json::JsonSerializer;
pub use text::TextSerializer;

/// Renders an entry and writes it to a sink.
pub trait Serializer: Send + Sync {
    /// Write exactly one record for `entry`.
    ///
    /// Fails only when the underlying sink fails.
    fn write(&self, entry: &Entry<'_>) -> Result<()>;
}

/// Built-in wire formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON object per line.
    #[default]
    Json,
    /// One human-readable line per entry.
    Text,
}

impl Format {
    /// Build the serializer for this format around `sink`.
    pub fn serializer<W>(self, sink: W) -> Box<dyn Serializer>
    where
        W: Write + Send + 'static,
    {
        match self {
            Format::Json => Box::new(JsonSerializer::new(sink)),
            Format::Text => Box::new(TextSerializer::new(sink)),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "text" => Ok(Format::Text),
            other => Err(format!("unknown format '{}', expected 'json' or 'text'", other)),
        }
    }
}

/// Write a fully rendered record while holding the sink lock.
///
/// A poisoned lock is taken over. If the panicking holder died inside
/// `write_all`, its partial record stays in the sink; later records are
/// still written whole.
pub(crate) fn write_record<W: Write>(sink: &Mutex<W>, record: &[u8]) -> Result<()> {
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    sink.write_all(record)?;
    sink.flush()?;
    Ok(())
}
