//! Registration, validation and compilation of a tool + agent graph.
//!
//! Registration never fails loudly: a bad tool or agent is recorded as an
//! error diagnostic and the call returns normally so the caller can keep
//! chaining. Any recorded error blocks every later [`AgentKit::compile`].
//! There is no way to retract a registration; start a new kit instead.

use agentkit_domain::graph::unknown_references;
use agentkit_domain::{
    AgentConfig, AgentDefinition, ConversationMessage, DependencyGraph, Diagnostic,
    DiagnosticCode, Model, ModelError, ObjectSchema, SchemaError, ToolConfig, ToolDefinition,
    UsageMemory,
};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::info::{AgentInfo, ToolInfo};
use crate::compiler::{CompileError, CompiledKit, Compiler};
use crate::config::CompileOptions;

/// Why a single registration was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("Tool '{0}' already exists")]
    DuplicateTool(String),

    #[error("Agent '{0}' already exists")]
    DuplicateAgent(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Tool execute is not invocable")]
    NotInvocable,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Tool '{0}' not defined. Define it before adding to agent.")]
    UndefinedTool(String),
}

impl RegistrationError {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            RegistrationError::DuplicateTool(_) | RegistrationError::DuplicateAgent(_) => {
                DiagnosticCode::RegistrationConflict
            }
            RegistrationError::Schema(_) => DiagnosticCode::InvalidParameterType,
            RegistrationError::NotInvocable => DiagnosticCode::InvalidExecutable,
            RegistrationError::Model(_) => DiagnosticCode::InvalidModel,
            RegistrationError::UndefinedTool(_) => DiagnosticCode::UnknownToolReference,
        }
    }
}

/// Definition store of one session.
///
/// # Example
///
/// ```
/// use agentkit_application::AgentKit;
/// use agentkit_domain::{AgentConfig, ToolConfig, executor_fn};
///
/// let mut kit = AgentKit::new();
/// kit.tool(
///     "EthPrice",
///     ToolConfig::new("Current ETH price")
///         .with_executor(executor_fn(|_| async { Ok(serde_json::json!(3000)) })),
/// )
/// .agent(
///     "PriceBot",
///     AgentConfig::new("Answers price questions", "gpt-4o").with_tool("EthPrice"),
/// );
///
/// let compiled = kit.compile().unwrap();
/// assert!(compiled.agents["PriceBot"].tool("EthPrice").is_some());
/// ```
#[derive(Debug, Default)]
pub struct AgentKit {
    tools: IndexMap<String, ToolDefinition>,
    agents: IndexMap<String, AgentDefinition>,
    diagnostics: Vec<Diagnostic>,
    memory: UsageMemory,
}

impl AgentKit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// Rejected when the name is taken, a parameter type is unsupported, or
    /// no executor is given. On success the tool's own usage is tracked once.
    pub fn tool(&mut self, name: impl Into<String>, config: ToolConfig) -> &mut Self {
        let name = name.into();
        match self.build_tool(&name, config) {
            Ok(definition) => {
                debug!(
                    "Registered tool '{}' ({} parameter(s))",
                    name,
                    definition.parameters.len()
                );
                self.tools.insert(name.clone(), definition);
                self.memory.track_tool_usage(&name, None);
            }
            Err(e) => {
                let code = e.code();
                self.record(code, format!("Error in tool '{}': {}", name, e));
            }
        }
        self
    }

    /// Register an agent.
    ///
    /// Every tool it names must already be registered. On success the
    /// agent's usage is tracked once, and so is each referenced tool's.
    pub fn agent(&mut self, name: impl Into<String>, config: AgentConfig) -> &mut Self {
        let name = name.into();
        match self.build_agent(&name, config) {
            Ok(definition) => {
                debug!(
                    "Registered agent '{}' on {} with {} tool(s)",
                    name,
                    definition.model,
                    definition.tools.len()
                );
                self.memory.track_agent_usage(&name);
                for tool in &definition.tools {
                    self.memory.track_tool_usage(tool, Some(&name));
                }
                self.agents.insert(name, definition);
            }
            Err(e) => {
                let code = e.code();
                self.record(code, format!("Error in agent '{}': {}", name, e));
            }
        }
        self
    }

    fn build_tool(&self, name: &str, config: ToolConfig) -> Result<ToolDefinition, RegistrationError> {
        if self.tools.contains_key(name) {
            return Err(RegistrationError::DuplicateTool(name.to_string()));
        }
        let schema = ObjectSchema::derive_checked(&config.parameters)?;
        let executor = config.execute.ok_or(RegistrationError::NotInvocable)?;

        Ok(ToolDefinition {
            name: name.to_string(),
            description: config.description,
            parameters: config.parameters,
            executor,
            dependencies: config.dependencies,
            provider: config.provider,
            schema,
        })
    }

    fn build_agent(
        &self,
        name: &str,
        config: AgentConfig,
    ) -> Result<AgentDefinition, RegistrationError> {
        if self.agents.contains_key(name) {
            return Err(RegistrationError::DuplicateAgent(name.to_string()));
        }
        let model: Model = config.model.parse()?;
        if let Some(missing) = config.tools.iter().find(|t| !self.tools.contains_key(*t)) {
            return Err(RegistrationError::UndefinedTool(missing.clone()));
        }
        Ok(AgentDefinition::from_config(name, config, model))
    }

    fn record(&mut self, code: DiagnosticCode, message: String) {
        let diagnostic = Diagnostic::new(code, message);
        warn!("[{}] {}", diagnostic.code, diagnostic.message);
        if diagnostic.is_error() {
            self.memory.record_error(diagnostic.message.as_str());
        } else {
            self.memory.record_warning(diagnostic.message.as_str());
        }
        self.diagnostics.push(diagnostic);
    }

    /// Re-check that every agent's tools are registered.
    ///
    /// Records one error per missing reference.
    pub fn validate_hierarchy(&mut self) -> bool {
        let missing = unknown_references(
            self.agents
                .iter()
                .map(|(name, agent)| (name.as_str(), agent.tools.as_slice())),
            |tool| self.tools.contains_key(tool),
        );

        for reference in &missing {
            self.record(
                DiagnosticCode::UnknownToolReference,
                format!(
                    "Agent '{}' references non-existent tool '{}'",
                    reference.agent, reference.tool
                ),
            );
        }
        missing.is_empty()
    }

    /// Look for cycles among tool dependencies.
    ///
    /// Cycles and dependencies on unregistered tools are recorded as
    /// warnings. Returns `false` only when a cycle was found.
    pub fn validate_tool_dependencies(&mut self) -> bool {
        let (cycles, dangling) = {
            let graph = DependencyGraph::from_edges(
                self.tools
                    .iter()
                    .map(|(name, tool)| (name.as_str(), tool.dependencies.as_slice())),
            );
            (graph.find_cycles(), graph.dangling())
        };

        for edge in &dangling {
            self.record(
                DiagnosticCode::UnknownDependency,
                format!(
                    "Tool '{}' depends on undefined tool '{}'",
                    edge.tool, edge.dependency
                ),
            );
        }
        for cycle in &cycles {
            self.record(
                DiagnosticCode::DependencyCycle,
                format!("Circular dependency detected: {}", cycle.trail()),
            );
        }
        cycles.is_empty()
    }

    /// Compile with the built-in defaults
    pub fn compile(&mut self) -> Result<CompiledKit, CompileError> {
        self.compile_with(&CompileOptions::default())
    }

    /// Validate, then build the compiled graph.
    ///
    /// Fails with [`CompileError::Blocked`] if any error was recorded during
    /// the session, and with [`CompileError::Fault`] if the compiler itself
    /// could not build the graph.
    pub fn compile_with(&mut self, options: &CompileOptions) -> Result<CompiledKit, CompileError> {
        self.validate_hierarchy();
        self.validate_tool_dependencies();

        let errors = self.errors();
        if !errors.is_empty() {
            for message in &errors {
                error!("{}", message);
            }
            return Err(CompileError::Blocked { errors });
        }

        let warnings = self.warnings();
        if !warnings.is_empty() {
            warn!("Compiling with {} warning(s)", warnings.len());
            for message in &warnings {
                warn!("{}", message);
            }
        }

        match Compiler::new(options.clone()).compile(&self.tools, &self.agents, &self.memory) {
            Ok(compiled) => {
                info!(
                    "Compiled {} tool(s) and {} agent(s)",
                    compiled.tools.len(),
                    compiled.agents.len()
                );
                Ok(compiled)
            }
            Err(fault) => {
                let err = CompileError::Fault(fault.to_string());
                error!("{}", err);
                self.memory.record_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Messages of every recorded error diagnostic
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| d.message.clone())
            .collect()
    }

    /// Messages of every recorded warning diagnostic
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .filter(|d| !d.is_error())
            .map(|d| d.message.clone())
            .collect()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        Diagnostic::has_errors(&self.diagnostics)
    }

    /// Value copy of the usage memory
    pub fn memory(&self) -> UsageMemory {
        self.memory.clone()
    }

    pub fn add_to_conversation(&mut self, role: impl Into<String>, content: impl Into<String>) {
        self.memory
            .add_message(ConversationMessage::new(role, content));
    }

    pub fn tools_info(&self) -> IndexMap<String, ToolInfo> {
        self.tools
            .iter()
            .map(|(name, definition)| {
                let info = ToolInfo {
                    definition: definition.clone(),
                    usage: self.memory.tool_usage_or_default(name),
                };
                (name.clone(), info)
            })
            .collect()
    }

    pub fn agents_info(&self) -> IndexMap<String, AgentInfo> {
        self.agents
            .iter()
            .map(|(name, definition)| {
                let info = AgentInfo {
                    definition: definition.clone(),
                    usage: self.memory.agent_usage_or_default(name),
                };
                (name.clone(), info)
            })
            .collect()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}
