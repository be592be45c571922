//! Domain layer for agentkit
//!
//! This crate contains the data model of a tool + agent graph and the pure
//! algorithms over it. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Tool**: a named capability with a declared parameter shape
//!   ([`ToolConfig`] → [`ToolDefinition`]).
//! - **Agent**: a named model configuration that references tools
//!   ([`AgentConfig`] → [`AgentDefinition`]).
//! - **Usage memory**: how often and by whom each tool/agent was referenced
//!   ([`UsageMemory`]).
//! - **Diagnostics**: errors block compilation, warnings do not
//!   ([`Diagnostic`]).

pub mod agent;
pub mod config;
pub mod core;
pub mod graph;
pub mod memory;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentConfig, AgentDefinition};
pub use config::OutputFormat;
pub use core::{
    diagnostic::{Diagnostic, DiagnosticCode, Severity},
    model::{Model, ModelError, ModelProvider, ProviderKind},
};
pub use graph::{DependencyCycle, DependencyGraph, UnknownReference};
pub use memory::{AgentUsage, ConversationMessage, ToolUsage, UsageMemory};
pub use tool::{
    ObjectSchema, ParamSchema, ParameterSpec, Presence, SchemaError, SchemaKind, ToolArguments,
    ToolConfig, ToolDefinition, ToolError, ToolExecutor, executor_fn,
};
