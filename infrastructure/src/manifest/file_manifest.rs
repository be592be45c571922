//! Raw TOML manifest data types

use agentkit_domain::{AgentConfig, ParameterSpec, ToolConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tools::builtin::{ExecutorSpec, build_executor};

/// Whole manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKitManifest {
    pub tools: Vec<FileToolDecl>,
    pub agents: Vec<FileAgentDecl>,
}

/// One `[[tools]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileToolDecl {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Kept in file order
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterSpec>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub executor: Option<ExecutorSpec>,
}

impl FileToolDecl {
    /// Build the tool config; a missing or unusable executor is left unset.
    pub fn to_config(&self) -> ToolConfig {
        let mut config = ToolConfig::new(self.description.as_str())
            .with_dependencies(self.dependencies.iter().cloned());
        config.parameters = self.parameters.clone();

        if let Some(provider) = &self.provider {
            config = config.with_provider(provider.as_str());
        }
        if let Some(executor) = self
            .executor
            .as_ref()
            .and_then(|spec| build_executor(&self.name, spec))
        {
            config = config.with_executor(executor);
        }
        config
    }
}

/// One `[[agents]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAgentDecl {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub model: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl FileAgentDecl {
    pub fn to_config(&self) -> AgentConfig {
        let mut config = AgentConfig::new(self.description.as_str(), self.model.as_str())
            .with_tools(self.tools.iter().cloned());
        config.instructions = self.instructions.clone();
        config.temperature = self.temperature;
        config
    }
}
