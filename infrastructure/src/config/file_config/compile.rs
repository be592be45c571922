//! Compile defaults from TOML (`[compile]` section)

use agentkit_application::{CompileOptions, DEFAULT_PROVIDER, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Raw compile configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompileConfig {
    /// Temperature for agents that do not set one
    pub default_temperature: f32,
    /// Provider tag for tools that do not set one
    pub default_provider: String,
}

impl Default for FileCompileConfig {
    fn default() -> Self {
        Self {
            default_temperature: DEFAULT_TEMPERATURE,
            default_provider: DEFAULT_PROVIDER.to_string(),
        }
    }
}

impl FileCompileConfig {
    pub fn to_options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_default_temperature(self.default_temperature)
            .with_default_provider(self.default_provider.as_str())
    }
}
