//! Compiled graph: the runtime-usable output of `compile()`.

use agentkit_domain::core::string::truncate;
use agentkit_domain::{
    ConversationMessage, ModelProvider, ObjectSchema, ToolArguments, ToolError,
    ToolExecutor, UsageMemory,
};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::debug;

use crate::ports::agent_runtime::{AgentResponse, AgentRuntime, GenerateRequest, RuntimeError};

const ARGS_PREVIEW_LEN: usize = 120;

/// A tool ready to be invoked.
///
/// Carries the compiled schema, in which every parameter is optional: a
/// call is checked for shape only where an argument is present.
#[derive(Clone, Serialize)]
pub struct CompiledTool {
    pub name: String,
    pub description: String,
    pub schema: ObjectSchema,
    pub provider: String,
    #[serde(skip)]
    executor: Arc<dyn ToolExecutor>,
}

impl CompiledTool {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ObjectSchema,
        provider: impl Into<String>,
        executor: Arc<dyn ToolExecutor>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            provider: provider.into(),
            executor,
        }
    }

    /// Validate `args` against the compiled schema, then run the executor
    pub async fn call(&self, args: ToolArguments) -> Result<serde_json::Value, ToolError> {
        self.schema
            .validate(&args)
            .map_err(|violation| ToolError::invalid_argument(violation.to_string()))?;
        debug!(
            "Calling tool '{}' with {}",
            self.name,
            truncate(&serde_json::to_string(&args).unwrap_or_default(), ARGS_PREVIEW_LEN)
        );
        self.executor.execute(args).await
    }
}

impl std::fmt::Debug for CompiledTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTool")
            .field("name", &self.name)
            .field("provider", &self.provider)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

fn tool_names<S>(tools: &IndexMap<String, Arc<CompiledTool>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(tools.keys())
}

/// An agent wired to the compiled tools it references
#[derive(Debug, Clone, Serialize)]
pub struct CompiledAgent {
    pub name: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub model: ModelProvider,
    pub temperature: f32,
    #[serde(serialize_with = "tool_names")]
    pub tools: IndexMap<String, Arc<CompiledTool>>,
}

impl CompiledAgent {
    pub fn tool(&self, name: &str) -> Option<&Arc<CompiledTool>> {
        self.tools.get(name)
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }

    /// Ask a runtime to produce this agent's reply to `messages`.
    ///
    /// The kit only wires the graph; talking to a model provider is the
    /// runtime's job.
    pub async fn generate(
        &self,
        runtime: &dyn AgentRuntime,
        messages: Vec<ConversationMessage>,
    ) -> Result<AgentResponse, RuntimeError> {
        debug!(
            "Agent '{}' generating with {} message(s) on {}",
            self.name,
            messages.len(),
            self.model.id
        );
        runtime
            .generate(GenerateRequest {
                agent: self,
                messages,
            })
            .await
    }
}

/// Result of a successful `compile()`
#[derive(Debug, Clone, Serialize)]
pub struct CompiledKit {
    pub tools: IndexMap<String, Arc<CompiledTool>>,
    pub agents: IndexMap<String, CompiledAgent>,
    /// Value copy of the usage memory taken at compile time
    pub memory: UsageMemory,
}

impl CompiledKit {
    pub fn tool(&self, name: &str) -> Option<&Arc<CompiledTool>> {
        self.tools.get(name)
    }

    pub fn agent(&self, name: &str) -> Option<&CompiledAgent> {
        self.agents.get(name)
    }

    /// Invoke a compiled tool by name
    pub async fn call_tool(
        &self,
        name: &str,
        args: ToolArguments,
    ) -> Result<serde_json::Value, ToolError> {
        let tool = self.tool(name).ok_or_else(|| ToolError::not_found(name))?;
        tool.call(args).await
    }
}
