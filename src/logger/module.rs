//! Logger handle bound to one call-site target.

use crate::entry::{Data, DEBUG};
use crate::error::Result;
use crate::logger::{Log, Logger};

/// A [`Logger`] tagged with the target of the code that owns it.
///
/// Debug filtering is evaluated once, when the handle is created, since
/// neither the target nor the namespaces can change afterwards.
#[derive(Debug, Clone)]
pub struct ModuleLogger {
    logger: Logger,
    target: String,
    debug: bool,
}

impl ModuleLogger {
    pub(crate) fn new(logger: Logger, target: String) -> Self {
        let debug = logger.is_debug_at(&target);
        Self {
            logger,
            target,
            debug,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The logger this handle writes through.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Log for ModuleLogger {
    fn info(&self, message: &str, data: Option<&Data>) -> Result<()> {
        self.logger.info(message, data)
    }

    fn debug(&self, message: &str, data: Option<&Data>) -> Result<()> {
        if !self.debug {
            return Ok(());
        }
        self.logger.write(DEBUG, message, data)
    }

    fn is_debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Config;
    use crate::serializer::JsonSerializer;

    #[test]
    fn test_module_logger_filters_on_target() {
        let logger = Logger::new(Config::new(Vec::new()).debug_namespaces(["app::net"]));

        let net = logger.module("app::net::listener");
        let db = logger.module("app::db");

        assert!(net.is_debug());
        assert!(!db.is_debug());
        assert_eq!(net.target(), "app::net::listener");
    }

    #[test]
    fn test_module_logger_writes() {
        let buf = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = SharedBuf(buf.clone());
        let logger = Logger::with_serializer(
            JsonSerializer::new(sink),
            vec!["app".to_string()],
            Data::new(),
        );

        let on = logger.module("app::x");
        let off = logger.module("lib::y");
        on.debug("yes", None).unwrap();
        off.debug("no", None).unwrap();
        off.info("info", None).unwrap();

        let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("\"message\":\"yes\""));
        assert!(!out.contains("\"message\":\"no\""));
    }

    struct SharedBuf(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, b: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(b);
            Ok(b.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
