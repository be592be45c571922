//! Logging infrastructure: structured kit event logging.
//!
//! Provides [`JsonlKitLogger`], a JSONL file writer that implements
//! the [`KitEventLogger`](agentkit_application::KitEventLogger) port.

mod jsonl_writer;

pub use jsonl_writer::JsonlKitLogger;
