//! Kit source port
//!
//! A [`KitSource`] supplies tool and agent declarations (e.g. parsed from a
//! manifest file) in the order they must be registered.

use agentkit_domain::{AgentConfig, ToolConfig};
use thiserror::Error;

/// Errors raised while loading declarations
#[derive(Error, Debug)]
pub enum KitSourceError {
    #[error("Failed to read kit source {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse kit source {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Ordered tool and agent declarations
#[derive(Debug, Clone, Default)]
pub struct KitDeclarations {
    pub tools: Vec<(String, ToolConfig)>,
    pub agents: Vec<(String, AgentConfig)>,
}

impl KitDeclarations {
    pub fn with_tool(mut self, name: impl Into<String>, config: ToolConfig) -> Self {
        self.tools.push((name.into(), config));
        self
    }

    pub fn with_agent(mut self, name: impl Into<String>, config: AgentConfig) -> Self {
        self.agents.push((name.into(), config));
        self
    }
}

/// Port for loading declarations.
pub trait KitSource: Send + Sync {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<KitDeclarations, KitSourceError>;
}
