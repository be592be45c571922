//! Compile options: defaults applied while building the compiled graph.

use serde::{Deserialize, Serialize};

/// Sampling temperature applied to agents that do not set one
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Provider tag applied to tools that do not set one
pub const DEFAULT_PROVIDER: &str = "openai";

/// Defaults the compiler fills in for unset agent and tool fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Temperature for agents without an explicit one.
    pub default_temperature: f32,
    /// Provider tag for tools without an explicit one.
    pub default_provider: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_temperature: DEFAULT_TEMPERATURE,
            default_provider: DEFAULT_PROVIDER.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = temperature;
        self
    }

    pub fn with_default_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into();
        self
    }
}
