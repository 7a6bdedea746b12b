//! Minimal structured logging with per-module debug output.
//!
//! ```no_run
//! use logged::{Config, Format, Log, Logger};
//!
//! let logger = Logger::new(
//!     Config::new(std::io::stdout())
//!         .format(Format::Text)
//!         .debug_namespaces(["myapp::net"])
//!         .defaults(logged::data! { "service" => "myapp" }),
//! );
//!
//! logger.info("started", None)?;
//!
//! let net = logger.module("myapp::net::listener");
//! if net.is_debug() {
//!     net.debug("accepted", Some(&logged::data! { "peer" => "10.0.0.7" }))?;
//! }
//! # Ok::<(), logged::LogError>(())
//! ```

mod macros;

pub mod config;
pub mod entry;
pub mod error;
pub mod layer;
pub mod logger;
pub mod serializer;

pub use entry::{Data, Entry, DEBUG, INFO};
pub use error::LogError;
pub use layer::LoggedLayer;
pub use logger::{Config, Log, Logger, ModuleLogger};
pub use serializer::{Format, JsonSerializer, Serializer, TextSerializer};
