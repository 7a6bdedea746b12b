//! A single log event.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Level identifier for informational entries.
pub const INFO: &str = "info";
/// Level identifier for debug entries.
pub const DEBUG: &str = "debug";
/// Level identifier for warnings (emitted by the tracing bridge).
pub const WARN: &str = "warn";
/// Level identifier for errors (emitted by the tracing bridge).
pub const ERROR: &str = "error";

/// Annotations attached to an entry.
///
/// Ordered by key so that text output is stable between calls.
pub type Data = BTreeMap<String, String>;

/// One log event.
///
/// Fields borrow from the call that produced the entry where possible.
/// Once built it is only ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<'a> {
    /// RFC 3339 UTC timestamp with nanoseconds, captured at creation.
    pub timestamp: String,
    pub level: Cow<'a, str>,
    pub message: Cow<'a, str>,
    /// Merged annotations. Always serialized, as `{}` when empty.
    #[serde(default)]
    pub data: Cow<'a, Data>,
}

impl<'a> Entry<'a> {
    /// Build an entry stamped with the current time.
    pub fn new(
        level: impl Into<Cow<'a, str>>,
        message: impl Into<Cow<'a, str>>,
        data: Cow<'a, Data>,
    ) -> Self {
        Self {
            timestamp: now(),
            level: level.into(),
            message: message.into(),
            data,
        }
    }
}

/// Current UTC time in the entry timestamp format.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
