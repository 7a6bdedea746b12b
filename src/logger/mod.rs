//! Logger front end.
//!
//! # Data Flow
//! ```text
//! caller
//!     → info(msg, data)                  always
//!     → debug_at(target, msg, data)      only if filter.rs accepts target
//!         → merge.rs (defaults + call data)
//!         → Entry (timestamp taken now)
//!         → Serializer::write
//! ```
//!
//! # Design Decisions
//! - Defaults and debug namespaces are fixed at construction; no locking on reads
//! - Call sites identify themselves by target (module path) instead of stack walking
//! - `ModuleLogger` binds a target once and implements `Log`
//! - A disabled debug call does no work and is not an error

pub mod filter;
pub mod merge;
pub mod module;

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::entry::{Data, Entry, DEBUG, INFO};
use crate::error::Result;
use crate::serializer::{Format, Serializer};

pub use filter::DebugFilter;
pub use merge::merged_data;
pub use module::ModuleLogger;

/// Logging operations available to application code.
pub trait Log {
    /// Write an informational entry.
    fn info(&self, message: &str, data: Option<&Data>) -> Result<()>;

    /// Write a debug entry if debug output is enabled for this call site.
    fn debug(&self, message: &str, data: Option<&Data>) -> Result<()>;

    /// Whether `debug` would write anything.
    ///
    /// Cheap; use it to skip building expensive arguments.
    fn is_debug(&self) -> bool;
}

/// Construction parameters for a [`Logger`].
pub struct Config {
    /// Destination for rendered entries.
    pub sink: Box<dyn Write + Send>,
    /// Wire format (default: JSON).
    pub format: Format,
    /// Target prefixes allowed to emit debug entries. Empty disables debug.
    pub debug_namespaces: Vec<String>,
    /// Annotations added to every entry.
    pub defaults: Data,
}

impl Config {
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            sink: Box::new(sink),
            format: Format::default(),
            debug_namespaces: Vec::new(),
            defaults: Data::new(),
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn debug_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.debug_namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn defaults(mut self, defaults: Data) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Default for Config {
    /// JSON to stdout, debug off, no defaults.
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

struct Inner {
    serializer: Box<dyn Serializer>,
    defaults: Data,
    filter: DebugFilter,
}

/// Shared logger handle. Cloning is cheap and all clones write to the same sink.
///
/// `Logger` has no call-site identity of its own, so it does not implement
/// [`Log`]: debug output goes through [`Logger::debug_at`] /
/// [`Logger::is_debug_at`] with an explicit target, through the
/// [`debug!`](crate::debug) / [`is_debug!`](crate::is_debug) macros, or
/// through a [`ModuleLogger`] from [`Logger::module`], which does
/// implement [`Log`].
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Build a logger from `config`.
    pub fn new(config: Config) -> Self {
        let serializer = config.format.serializer(config.sink);
        Self::from_parts(serializer, config.debug_namespaces, config.defaults)
    }

    /// Build a logger around a custom serializer.
    pub fn with_serializer<S>(serializer: S, debug_namespaces: Vec<String>, defaults: Data) -> Self
    where
        S: Serializer + 'static,
    {
        Self::from_parts(Box::new(serializer), debug_namespaces, defaults)
    }

    fn from_parts(
        serializer: Box<dyn Serializer>,
        debug_namespaces: Vec<String>,
        defaults: Data,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                serializer,
                defaults,
                filter: DebugFilter::new(debug_namespaces),
            }),
        }
    }

    /// A handle whose debug output is filtered on `target`.
    ///
    /// Usually called as `logger.module(module_path!())`.
    pub fn module(&self, target: impl Into<String>) -> ModuleLogger {
        ModuleLogger::new(self.clone(), target.into())
    }

    pub fn info(&self, message: &str, data: Option<&Data>) -> Result<()> {
        self.write(INFO, message, data)
    }

    /// Write a debug entry on behalf of `target` if it is enabled.
    pub fn debug_at(&self, target: &str, message: &str, data: Option<&Data>) -> Result<()> {
        if !self.is_debug_at(target) {
            return Ok(());
        }
        self.write(DEBUG, message, data)
    }

    /// Whether debug entries from `target` are written.
    pub fn is_debug_at(&self, target: &str) -> bool {
        self.inner.filter.is_enabled(target)
    }

    /// Render and write one entry at `level`. No filtering.
    pub(crate) fn write(&self, level: &str, message: &str, data: Option<&Data>) -> Result<()> {
        let data = merged_data(&self.inner.defaults, data);
        self.inner.serializer.write(&Entry::new(level, message, data))
    }

    pub fn defaults(&self) -> &Data {
        &self.inner.defaults
    }

    pub fn debug_namespaces(&self) -> &[String] {
        self.inner.filter.namespaces()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("defaults", &self.inner.defaults)
            .field("debug_namespaces", &self.inner.filter.namespaces())
            .finish_non_exhaustive()
    }
}
