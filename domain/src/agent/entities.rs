//! Agent domain entities

use serde::{Deserialize, Serialize};

use crate::core::model::Model;

/// Caller-supplied configuration of an agent, before validation.
///
/// `model` stays a raw identifier so that an unsupported model can be
/// recorded as a registration error rather than rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub description: String,
    pub model: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl AgentConfig {
    pub fn new(description: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tools.push(tool.into());
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tools.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A registered agent with its model resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    pub model: Model,
    pub instructions: Vec<String>,
    pub tools: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl AgentDefinition {
    /// Build a definition from a config whose model has already been parsed
    pub fn from_config(name: impl Into<String>, config: AgentConfig, model: Model) -> Self {
        Self {
            name: name.into(),
            description: config.description,
            model,
            instructions: config.instructions,
            tools: config.tools,
            temperature: config.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_builder() {
        let config = AgentConfig::new("Provides ETH price", "gpt-4o")
            .with_instruction("Fetch Latest Price")
            .with_instruction("Format Response")
            .with_tool("EthereumPriceTool")
            .with_temperature(0.3);

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.instructions.len(), 2);
        assert_eq!(config.tools, ["EthereumPriceTool"]);
        assert_eq!(config.temperature, Some(0.3));
    }

    #[test]
    fn test_definition_from_config() {
        let config = AgentConfig::new("desc", "claude-3-opus").with_tools(["A", "B"]);
        let def = AgentDefinition::from_config("Helper", config, Model::Claude3Opus);

        assert_eq!(def.name, "Helper");
        assert_eq!(def.model, Model::Claude3Opus);
        assert_eq!(def.tools, ["A", "B"]);
        assert!(def.temperature.is_none());
    }

    #[test]
    fn test_agent_config_deserialize_defaults() {
        let config: AgentConfig =
            serde_json::from_str(r#"{"description":"d","model":"gpt-4o"}"#).unwrap();
        assert!(config.instructions.is_empty());
        assert!(config.tools.is_empty());
        assert!(config.temperature.is_none());
    }
}
