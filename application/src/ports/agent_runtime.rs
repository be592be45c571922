//! Agent runtime port
//!
//! Defines how a compiled agent produces a reply. The kit only wires the
//! agent → tool graph; invoking a model provider is left to an adapter.

use agentkit_domain::ConversationMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compiler::CompiledAgent;

/// Errors that can occur while an agent generates a reply
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Tool call failed: {0}")]
    ToolFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Everything a runtime needs to answer on behalf of an agent
pub struct GenerateRequest<'a> {
    pub agent: &'a CompiledAgent,
    pub messages: Vec<ConversationMessage>,
}

/// Reply produced by a runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Message role, normally "assistant"
    #[serde(rename = "type")]
    pub role: String,
    pub value: String,
}

impl AgentResponse {
    pub fn assistant(value: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            value: value.into(),
        }
    }
}

/// Port for generating agent replies.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<AgentResponse, RuntimeError>;
}
