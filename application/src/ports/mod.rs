//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod agent_runtime;
pub mod kit_logger;
pub mod kit_source;
pub mod tool_schema;
