//! Port for structured kit event logging.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable messages, while this port records diagnostics and usage
//! snapshots in a machine-readable form (e.g. JSONL).

use serde_json::Value;

/// A structured event about a kit build.
pub struct KitEvent {
    /// Event type identifier (e.g., "diagnostic", "tool_usage", "compiled").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl KitEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging kit events.
///
/// `log` is synchronous and infallible; a failing sink must not break a build.
pub trait KitEventLogger: Send + Sync {
    fn log(&self, event: KitEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoKitEventLogger;

impl KitEventLogger for NoKitEventLogger {
    fn log(&self, _event: KitEvent) {}
}
