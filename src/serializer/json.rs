//! Line-delimited JSON rendering.
//!
//! Wire format, one record per line:
//! ```text
//! {"timestamp":"2026-10-15T08:12:01.123456789Z","level":"info","message":"started","data":{"service":"api"}}
//! ```
//! `data` is always present and holds the annotations as a nested object.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::entry::Entry;
use crate::error::Result;
use crate::serializer::{write_record, Serializer};

/// Writes each entry as a single JSON object followed by `\n`.
#[derive(Debug)]
pub struct JsonSerializer<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> JsonSerializer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Consume the serializer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Serializer for JsonSerializer<W> {
    fn write(&self, entry: &Entry<'_>) -> Result<()> {
        let mut record = serde_json::to_vec(entry).map_err(io::Error::from)?;
        record.push(b'\n');
        write_record(&self.sink, &record)
    }
}
