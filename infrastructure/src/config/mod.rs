//! Configuration file loading for agentkit
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AGENTKIT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./agentkit.toml` or `./.agentkit.toml`
//! 4. Global: `$XDG_CONFIG_HOME/agentkit/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, DEFAULT_MANIFEST, FileCompileConfig, FileConfig,
    FileKitConfig, FileOutputConfig, TEMPERATURE_RANGE,
};
pub use loader::ConfigLoader;
