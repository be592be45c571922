//! Application layer for agentkit
//!
//! This crate contains the definition store, the compiler, port definitions
//! and use cases. It depends only on the domain layer.

pub mod compiler;
pub mod config;
pub mod kit;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use compiler::{
    CompileError, CompiledAgent, CompiledKit, CompiledTool, Compiler, CompilerFault,
};
pub use config::{CompileOptions, DEFAULT_PROVIDER, DEFAULT_TEMPERATURE};
pub use kit::{AgentInfo, AgentKit, RegistrationError, ToolInfo};
pub use ports::{
    agent_runtime::{AgentResponse, AgentRuntime, GenerateRequest, RuntimeError},
    kit_logger::{KitEvent, KitEventLogger, NoKitEventLogger},
    kit_source::{KitDeclarations, KitSource, KitSourceError},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::build_kit::{BuildKitError, BuildKitOutput, BuildKitUseCase};
