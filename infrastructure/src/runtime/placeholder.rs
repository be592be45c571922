//! Runtime used until a real model provider is wired in.
//!
//! Answers every request with a fixed message. It still builds the tool
//! schemas a provider call would carry, so `ask -v` shows what would be sent.

use agentkit_application::{
    AgentResponse, AgentRuntime, GenerateRequest, RuntimeError, ToolSchemaPort,
};
use async_trait::async_trait;
use tracing::debug;

use crate::tools::JsonSchemaConverter;

pub const PLACEHOLDER_REPLY: &str =
    "This is a placeholder agent. Please deploy a real agent to get model responses.";

#[derive(Debug, Default)]
pub struct PlaceholderRuntime;

#[async_trait]
impl AgentRuntime for PlaceholderRuntime {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<AgentResponse, RuntimeError> {
        let agent = request.agent;
        let tools = JsonSchemaConverter.agent_tools_schema(agent);
        debug!(
            "Placeholder request: agent={} provider={} model={} temperature={} instructions={} tools={} messages={}",
            agent.name,
            agent.model.provider,
            agent.model.id,
            agent.temperature,
            agent.instructions.len(),
            tools.len(),
            request.messages.len()
        );
        Ok(AgentResponse::assistant(PLACEHOLDER_REPLY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentkit_application::AgentKit;
    use agentkit_domain::{AgentConfig, ConversationMessage};

    #[tokio::test]
    async fn test_placeholder_reply() {
        let mut kit = AgentKit::new();
        kit.agent("Bot", AgentConfig::new("bot", "claude-3-opus"));
        let compiled = kit.compile().unwrap();

        let reply = compiled.agents["Bot"]
            .generate(&PlaceholderRuntime, vec![ConversationMessage::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply, AgentResponse::assistant(PLACEHOLDER_REPLY));
    }
}
