use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Sink for the informational messages a version emits (model selection at
/// construction, unresolvable ligand parameters).
///
/// Versions receive their sink at construction instead of writing to a
/// process-wide logger, so drivers and tests can route or capture them.
pub trait Diagnostics: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards every message to `tracing` at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!("{}", message);
    }
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
