//! Bridge from `tracing` events to a [`Logger`].
//!
//! ```text
//! tracing::info!(user = 7, "signed in")
//!     → LoggedLayer::on_event
//!         → level: ERROR/WARN/INFO → error/warn/info, DEBUG/TRACE → debug
//!         → DEBUG/TRACE dropped unless the event target is a debug namespace
//!         → `message` field → entry message, other fields → annotations
//!     → Logger::write
//! ```
//! Span data is not carried over; only the event's own fields are.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::entry::{Data, DEBUG, ERROR, INFO, WARN};
use crate::logger::Logger;

/// A `tracing_subscriber` layer that writes events through a [`Logger`].
///
/// Sink failures cannot be reported back through `tracing` and are dropped.
#[derive(Debug, Clone)]
pub struct LoggedLayer {
    logger: Logger,
}

impl LoggedLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    data: Data,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.clear();
            write!(self.message, "{value:?}").ok();
        } else {
            self.data
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.data.insert(field.name().to_string(), value.to_string());
        }
    }
}

impl<S: Subscriber> Layer<S> for LoggedLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = match *metadata.level() {
            Level::ERROR => ERROR,
            Level::WARN => WARN,
            Level::INFO => INFO,
            Level::DEBUG | Level::TRACE => {
                if !self.logger.is_debug_at(metadata.target()) {
                    return;
                }
                DEBUG
            }
        };

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let _ = self
            .logger
            .write(level, &visitor.message, Some(&visitor.data));
    }
}
