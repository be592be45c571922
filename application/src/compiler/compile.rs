//! The compiler: registered definitions → [`CompiledKit`].
//!
//! Runs only after validation has passed. Every tool schema is re-derived
//! with all parameters optional, each agent is wired to the compiled tools
//! it names, and the usage memory is copied into the result.

use agentkit_domain::{
    AgentDefinition, ObjectSchema, Presence, ProviderKind, ToolDefinition, UsageMemory,
};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::compiled::{CompiledAgent, CompiledKit, CompiledTool};
use super::error::CompilerFault;
use crate::config::CompileOptions;

/// Builds compiled graphs using a fixed set of defaults
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn compile(
        &self,
        tools: &IndexMap<String, ToolDefinition>,
        agents: &IndexMap<String, AgentDefinition>,
        memory: &UsageMemory,
    ) -> Result<CompiledKit, CompilerFault> {
        let mut compiled_tools = IndexMap::with_capacity(tools.len());
        for (name, definition) in tools {
            compiled_tools.insert(name.clone(), Arc::new(self.compile_tool(definition)?));
        }

        let mut compiled_agents = IndexMap::with_capacity(agents.len());
        for (name, definition) in agents {
            compiled_agents.insert(
                name.clone(),
                self.compile_agent(definition, &compiled_tools)?,
            );
        }

        debug!(
            "Compiled {} tool(s) and {} agent(s)",
            compiled_tools.len(),
            compiled_agents.len()
        );

        Ok(CompiledKit {
            tools: compiled_tools,
            agents: compiled_agents,
            memory: memory.clone(),
        })
    }

    fn compile_tool(&self, definition: &ToolDefinition) -> Result<CompiledTool, CompilerFault> {
        let schema = ObjectSchema::derive(&definition.parameters, Presence::Optional).map_err(
            |source| CompilerFault::Schema {
                tool: definition.name.clone(),
                source,
            },
        )?;

        // The tag is carried as given; only a log line notes unfamiliar ones.
        let provider = definition
            .provider
            .as_deref()
            .unwrap_or(self.options.default_provider.as_str());
        if provider.parse::<ProviderKind>().is_err() {
            warn!(
                "Tool '{}' uses unrecognized provider tag '{}'",
                definition.name, provider
            );
        }

        Ok(CompiledTool::new(
            definition.name.as_str(),
            definition.description.as_str(),
            schema,
            provider,
            Arc::clone(&definition.executor),
        ))
    }

    fn compile_agent(
        &self,
        definition: &AgentDefinition,
        compiled_tools: &IndexMap<String, Arc<CompiledTool>>,
    ) -> Result<CompiledAgent, CompilerFault> {
        let mut tools = IndexMap::with_capacity(definition.tools.len());
        for tool_name in &definition.tools {
            let tool = compiled_tools
                .get(tool_name)
                .ok_or_else(|| CompilerFault::MissingTool {
                    agent: definition.name.clone(),
                    tool: tool_name.clone(),
                })?;
            tools.insert(tool_name.clone(), Arc::clone(tool));
        }

        Ok(CompiledAgent {
            name: definition.name.clone(),
            description: definition.description.clone(),
            instructions: definition.instructions.clone(),
            model: definition.model.resolve(),
            temperature: definition
                .temperature
                .unwrap_or(self.options.default_temperature),
            tools,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentkit_domain::{Model, ParameterSpec, SchemaKind, executor_fn};

    fn tool(name: &str, provider: Option<&str>) -> ToolDefinition {
        let mut parameters = IndexMap::new();
        parameters.insert("amount".to_string(), ParameterSpec::number());
        ToolDefinition {
            name: name.to_string(),
            description: format!("{} tool", name),
            schema: ObjectSchema::derive(&parameters, Presence::Required).unwrap(),
            parameters,
            executor: executor_fn(|_| async { Ok(serde_json::json!("ok")) }),
            dependencies: Vec::new(),
            provider: provider.map(str::to_string),
        }
    }

    fn agent(name: &str, tools: &[&str], temperature: Option<f32>) -> AgentDefinition {
        AgentDefinition {
            name: name.to_string(),
            description: String::new(),
            model: Model::Claude3Sonnet,
            instructions: Vec::new(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
            temperature,
        }
    }

    fn tools_of(defs: Vec<ToolDefinition>) -> IndexMap<String, ToolDefinition> {
        defs.into_iter().map(|d| (d.name.clone(), d)).collect()
    }

    #[test]
    fn test_schema_becomes_optional() {
        let tools = tools_of(vec![tool("Pay", None)]);
        let kit = Compiler::default()
            .compile(&tools, &IndexMap::new(), &UsageMemory::new())
            .unwrap();

        let param = kit.tools["Pay"].schema.get("amount").unwrap();
        assert!(param.optional);
        assert_eq!(param.kind, SchemaKind::Number);
        assert_eq!(kit.tools["Pay"].provider, "openai");
    }

    #[test]
    fn test_agent_defaults_and_wiring() {
        let tools = tools_of(vec![tool("A", Some("anthropic")), tool("B", None)]);
        let mut agents = IndexMap::new();
        agents.insert("Bot".to_string(), agent("Bot", &["B"], None));
        agents.insert("Cool".to_string(), agent("Cool", &[], Some(0.0)));

        let kit = Compiler::default()
            .compile(&tools, &agents, &UsageMemory::new())
            .unwrap();

        let bot = &kit.agents["Bot"];
        assert_eq!(bot.temperature, 0.5);
        assert_eq!(bot.model.id, "claude-3-sonnet-20240229");
        assert_eq!(bot.tools.len(), 1);
        assert!(Arc::ptr_eq(&bot.tools["B"], &kit.tools["B"]));

        // An explicit zero is kept, not replaced by the default.
        assert_eq!(kit.agents["Cool"].temperature, 0.0);
        assert!(!kit.agents["Cool"].has_tools());
        assert_eq!(kit.tools["A"].provider, "anthropic");
    }

    #[test]
    fn test_configured_defaults() {
        let options = CompileOptions::default()
            .with_default_temperature(0.9)
            .with_default_provider("anthropic");
        let tools = tools_of(vec![tool("A", None)]);
        let mut agents = IndexMap::new();
        agents.insert("Bot".to_string(), agent("Bot", &["A"], None));

        let kit = Compiler::new(options)
            .compile(&tools, &agents, &UsageMemory::new())
            .unwrap();
        assert_eq!(kit.agents["Bot"].temperature, 0.9);
        assert_eq!(kit.tools["A"].provider, "anthropic");
    }

    #[test]
    fn test_unrecognized_provider_is_carried_through() {
        let tools = tools_of(vec![tool("A", Some("google"))]);
        let options = CompileOptions::default().with_default_provider("mistral");
        let mut more = tools_of(vec![tool("B", None)]);
        more.extend(tools);

        let kit = Compiler::new(options)
            .compile(&more, &IndexMap::new(), &UsageMemory::new())
            .unwrap();
        assert_eq!(kit.tools["A"].provider, "google");
        assert_eq!(kit.tools["B"].provider, "mistral");
    }

    #[test]
    fn test_missing_tool_is_a_fault() {
        let mut agents = IndexMap::new();
        agents.insert("Bot".to_string(), agent("Bot", &["Ghost"], None));
        let fault = Compiler::default()
            .compile(&IndexMap::new(), &agents, &UsageMemory::new())
            .unwrap_err();
        assert_eq!(
            fault,
            CompilerFault::MissingTool {
                agent: "Bot".to_string(),
                tool: "Ghost".to_string()
            }
        );
    }

    #[test]
    fn test_memory_is_copied() {
        let mut memory = UsageMemory::new();
        memory.track_tool_usage("A", None);
        let kit = Compiler::default()
            .compile(&IndexMap::new(), &IndexMap::new(), &memory)
            .unwrap();

        memory.track_tool_usage("A", Some("Later"));
        assert_eq!(kit.memory.tool_usage["A"].usage_count, 1);
    }
}
