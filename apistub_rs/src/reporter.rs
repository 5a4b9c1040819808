//! Diagnostics sink used while resolving options.
//!
//! The option engine never prints directly; non-fatal diagnostics (ignored or
//! deprecated flags, discovery progress) go through a [`Reporter`].

use std::path::{Path, PathBuf};

use crate::types::Severity;

/// Accepts severity-tagged messages with an optional file location.
pub trait Reporter {
    fn report(&mut self, severity: Severity, location: Option<&Path>, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, severity: Severity, location: Option<&Path>, message: &str) {
        let location = location.map(|p| p.display().to_string());
        let location = location.as_deref().unwrap_or("");
        match severity {
            Severity::Error => tracing::error!(location, "{message}"),
            Severity::Warning => tracing::warn!(location, "{message}"),
            Severity::Lint | Severity::Info => tracing::info!(%severity, location, "{message}"),
            Severity::Hidden => tracing::trace!(%severity, location, "{message}"),
        }
    }
}

/// A recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Option<PathBuf>,
    pub message: String,
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported at `severity`, in order.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, severity: Severity, location: Option<&Path>, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            location: location.map(Path::to_path_buf),
            message: message.to_string(),
        });
    }
}
