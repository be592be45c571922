//! Read-only projections joining definitions with their usage records.

use agentkit_domain::{AgentDefinition, AgentUsage, ToolDefinition, ToolUsage};
use serde::Serialize;

/// A registered tool together with its current usage
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    #[serde(flatten)]
    pub definition: ToolDefinition,
    pub usage: ToolUsage,
}

/// A registered agent together with its current usage
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfo {
    #[serde(flatten)]
    pub definition: AgentDefinition,
    pub usage: AgentUsage,
}
