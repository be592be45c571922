//! Tool schema conversion port.
//!
//! Separates the structural schema a compiled tool carries (domain) from
//! the JSON Schema document an LLM API expects (infrastructure).

use crate::compiler::{CompiledAgent, CompiledKit, CompiledTool};

/// Port for converting compiled tools to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single compiled tool to a provider-neutral JSON Schema document.
    fn tool_to_schema(&self, tool: &CompiledTool) -> serde_json::Value;

    /// Convert every tool of a kit, in declaration order.
    fn all_tools_schema(&self, kit: &CompiledKit) -> Vec<serde_json::Value> {
        kit.tools.values().map(|t| self.tool_to_schema(t)).collect()
    }

    /// Convert only the tools an agent is wired to.
    fn agent_tools_schema(&self, agent: &CompiledAgent) -> Vec<serde_json::Value> {
        agent.tools.values().map(|t| self.tool_to_schema(t)).collect()
    }
}
