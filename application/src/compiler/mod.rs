//! Compilation of a validated kit into a runtime-usable graph.
//!
//! - [`Compiler`]: builds a [`CompiledKit`] from registered definitions
//! - [`CompiledTool`] / [`CompiledAgent`]: runtime objects
//! - [`CompileError`]: `Blocked` (bad input) vs `Fault` (compiler failure)

pub mod compile;
pub mod compiled;
pub mod error;

pub use compile::Compiler;
pub use compiled::{CompiledAgent, CompiledKit, CompiledTool};
pub use error::{CompileError, CompilerFault};
