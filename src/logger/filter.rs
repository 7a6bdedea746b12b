//! Debug call-site filtering.
//!
//! A call site is identified by its target, normally the `module_path!()`
//! of the code issuing the log call (`myapp::net::conn`). Debug output is
//! allowed when the target starts with one of the configured namespaces.
//! The test is a plain string prefix: `myapp::net` also matches
//! `myapp::network`.

/// Configured debug namespaces. Empty means debug is off everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugFilter {
    namespaces: Vec<String>,
}

impl DebugFilter {
    pub fn new(namespaces: Vec<String>) -> Self {
        Self { namespaces }
    }

    /// Whether debug entries from `target` should be written.
    pub fn is_enabled(&self, target: &str) -> bool {
        self.namespaces.iter().any(|ns| target.starts_with(ns.as_str()))
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }
}
