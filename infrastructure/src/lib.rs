//! Infrastructure layer for agentkit
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and kit manifest parsing.

pub mod config;
pub mod logging;
pub mod manifest;
pub mod runtime;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileCompileConfig, FileConfig,
    FileKitConfig, FileOutputConfig,
};
pub use logging::JsonlKitLogger;
pub use manifest::{FileKitManifest, ManifestSource};
pub use runtime::{PLACEHOLDER_REPLY, PlaceholderRuntime};
pub use tools::{EchoExecutor, ExecutorSpec, JsonSchemaConverter, StaticExecutor, build_executor};
