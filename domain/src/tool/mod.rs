//! Tool domain module
//!
//! A **tool** is a named, independently invocable capability with a declared
//! parameter shape. Tools are declared with a [`ToolConfig`], validated into a
//! [`ToolDefinition`] on registration, and compiled into a runtime callable by
//! the application layer.
//!
//! ```text
//! ┌──────────────┐  register  ┌────────────────┐  compile  ┌──────────────┐
//! │ ToolConfig   │───────────▶│ ToolDefinition │──────────▶│ CompiledTool │
//! │ (declared)   │            │ (+ strict      │           │ (+ optional  │
//! └──────────────┘            │    schema)     │           │    schema)   │
//!                             └────────────────┘           └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ParameterSpec`]: declared type + description + optional item type
//! - [`ObjectSchema`]: structural schema derived from the parameter specs
//! - [`ToolExecutor`]: the asynchronous capability behind a tool
//! - [`ToolError`]: failure of a tool invocation

pub mod entities;
pub mod executor;
pub mod schema;
pub mod value_objects;

pub use entities::{ItemsSpec, ParameterSpec, ToolConfig, ToolDefinition};
pub use executor::{FnExecutor, ToolExecutor, executor_fn};
pub use schema::{
    ElementKind, ObjectSchema, ParamKind, ParamSchema, Presence, SchemaError, SchemaKind,
    SchemaViolation,
};
pub use value_objects::{ToolArguments, ToolError};
