//! Usage memory entities

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Usage record of a single tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolUsage {
    /// Agents referencing this tool, in first-reference order, without duplicates
    pub agents: Vec<String>,
    pub usage_count: u64,
    /// `None` only in the zero-valued default record
    pub last_used: Option<DateTime<Utc>>,
}

/// Usage record of a single agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentUsage {
    pub usage_count: u64,
    pub last_used: Option<DateTime<Utc>>,
}

/// A message kept in the session's conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

impl ConversationMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Session-scoped bookkeeping of tool/agent usage and diagnostics.
///
/// Cloning yields an independent snapshot; nothing is shared with the
/// original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageMemory {
    pub tool_usage: IndexMap<String, ToolUsage>,
    pub agent_usage: IndexMap<String, AgentUsage>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation: Vec<ConversationMessage>,
}

impl UsageMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one use of `tool`, optionally on behalf of `agent`
    pub fn track_tool_usage(&mut self, tool: &str, agent: Option<&str>) {
        let usage = self.tool_usage.entry(tool.to_string()).or_default();
        usage.usage_count += 1;
        usage.last_used = Some(Utc::now());

        if let Some(agent) = agent
            && !usage.agents.iter().any(|a| a == agent)
        {
            usage.agents.push(agent.to_string());
        }
    }

    /// Record one use of `agent`
    pub fn track_agent_usage(&mut self, agent: &str) {
        let usage = self.agent_usage.entry(agent.to_string()).or_default();
        usage.usage_count += 1;
        usage.last_used = Some(Utc::now());
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_message(&mut self, message: ConversationMessage) {
        self.conversation.push(message);
    }

    /// Usage of `tool`, or the zero-valued record if it was never tracked
    pub fn tool_usage_or_default(&self, tool: &str) -> ToolUsage {
        self.tool_usage.get(tool).cloned().unwrap_or_default()
    }

    /// Usage of `agent`, or the zero-valued record if it was never tracked
    pub fn agent_usage_or_default(&self, agent: &str) -> AgentUsage {
        self.agent_usage.get(agent).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_tool_usage_self_and_agents() {
        let mut memory = UsageMemory::new();
        memory.track_tool_usage("T", None);
        memory.track_tool_usage("T", Some("Ag"));
        memory.track_tool_usage("T", Some("Ag"));
        memory.track_tool_usage("T", Some("Other"));

        let usage = &memory.tool_usage["T"];
        assert_eq!(usage.usage_count, 4);
        assert_eq!(usage.agents, ["Ag", "Other"]);
        assert!(usage.last_used.is_some());
    }

    #[test]
    fn test_track_agent_usage() {
        let mut memory = UsageMemory::new();
        memory.track_agent_usage("PriceBot");
        assert_eq!(memory.agent_usage["PriceBot"].usage_count, 1);
    }

    #[test]
    fn test_defaults_for_untracked() {
        let memory = UsageMemory::new();
        let tool = memory.tool_usage_or_default("missing");
        assert_eq!(tool.usage_count, 0);
        assert!(tool.agents.is_empty());
        assert!(tool.last_used.is_none());
        assert!(memory.agent_usage_or_default("missing").last_used.is_none());
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut memory = UsageMemory::new();
        memory.track_tool_usage("T", None);
        let snapshot = memory.clone();

        memory.track_tool_usage("T", Some("Late"));
        memory.record_error("late error");

        assert_eq!(snapshot.tool_usage["T"].usage_count, 1);
        assert!(snapshot.tool_usage["T"].agents.is_empty());
        assert!(snapshot.errors.is_empty());
    }

    #[test]
    fn test_conversation_messages() {
        let mut memory = UsageMemory::new();
        memory.add_message(ConversationMessage::user("What is ETH at?"));
        memory.add_message(ConversationMessage::assistant("$3,120"));
        assert_eq!(memory.conversation.len(), 2);
        assert_eq!(memory.conversation[0].role, "user");
    }
}
