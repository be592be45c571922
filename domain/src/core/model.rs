//! Model value object representing a supported LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing model or provider identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid model: {0}")]
    UnsupportedModel(String),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// Supported LLM models (Value Object)
///
/// Agents must name one of these; anything else is rejected at
/// registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4o,
    Gpt4Turbo,
    Claude3Opus,
    Claude3Sonnet,
}

impl Model {
    pub const ALL: [Model; 4] = [
        Model::Gpt4o,
        Model::Gpt4Turbo,
        Model::Claude3Opus,
        Model::Claude3Sonnet,
    ];

    /// Get the identifier used in agent declarations
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Claude3Opus => "claude-3-opus",
            Model::Claude3Sonnet => "claude-3-sonnet",
        }
    }

    /// Resolve this model through the fixed model table
    pub fn resolve(&self) -> ModelProvider {
        match self {
            Model::Gpt4o => ModelProvider::new(ProviderKind::OpenAi, "gpt-4o"),
            Model::Gpt4Turbo => ModelProvider::new(ProviderKind::OpenAi, "gpt-4-turbo"),
            Model::Claude3Opus => {
                ModelProvider::new(ProviderKind::Anthropic, "claude-3-opus-20240229")
            }
            Model::Claude3Sonnet => {
                ModelProvider::new(ProviderKind::Anthropic, "claude-3-sonnet-20240229")
            }
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModelError::UnsupportedModel(s.to_string()))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Provider that serves a model or a tool call format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            other => Err(ModelError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// A model as seen by a provider: which backend and which concrete id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProvider {
    pub provider: ProviderKind,
    pub id: String,
}

impl ModelProvider {
    pub fn new(provider: ProviderKind, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::ALL {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = "gpt-5".parse::<Model>().unwrap_err();
        assert_eq!(err, ModelError::UnsupportedModel("gpt-5".to_string()));
        assert_eq!(err.to_string(), "Invalid model: gpt-5");
    }

    #[test]
    fn test_model_table() {
        let opus = Model::Claude3Opus.resolve();
        assert_eq!(opus.provider, ProviderKind::Anthropic);
        assert_eq!(opus.id, "claude-3-opus-20240229");

        let gpt = Model::Gpt4o.resolve();
        assert_eq!(gpt.provider, ProviderKind::OpenAi);
        assert_eq!(gpt.id, "gpt-4o");
    }

    #[test]
    fn test_provider_kind_parse_and_serde() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert!("azure".parse::<ProviderKind>().is_err());
        assert_eq!(ProviderKind::default(), ProviderKind::OpenAi);

        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let kind: ProviderKind = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(kind, ProviderKind::Anthropic);
    }
}
