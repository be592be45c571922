//! Agent domain module
//!
//! An **agent** is a named configuration that references a model
//! identifier, a subset of registered tools, and behavioral instructions.
//! Agents are never referenced by tools, so they cannot take part in a
//! dependency cycle.

pub mod entities;

pub use entities::{AgentConfig, AgentDefinition};
