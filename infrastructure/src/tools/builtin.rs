//! Builtin executors for tools declared in a kit manifest.
//!
//! | kind | behaviour |
//! |---|---|
//! | `static` | returns the configured `value` |
//! | `echo` | returns the call arguments as an object |
//! | `http_get` | GETs `url` with the arguments as query parameters (`web-tools` feature) |

use agentkit_domain::{ToolArguments, ToolError, ToolExecutor};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Executor section of a manifest tool (`[tools.executor]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorSpec {
    pub kind: String,
    /// Result of a `static` executor
    #[serde(default)]
    pub value: Value,
    /// Target of an `http_get` executor
    #[serde(default)]
    pub url: Option<String>,
}

impl ExecutorSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Value::Null,
            url: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Always answers with the same value
pub struct StaticExecutor {
    value: Value,
}

impl StaticExecutor {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

#[async_trait]
impl ToolExecutor for StaticExecutor {
    async fn execute(&self, _args: ToolArguments) -> Result<Value, ToolError> {
        Ok(self.value.clone())
    }
}

/// Answers with its own arguments
pub struct EchoExecutor;

#[async_trait]
impl ToolExecutor for EchoExecutor {
    async fn execute(&self, args: ToolArguments) -> Result<Value, ToolError> {
        Ok(Value::Object(args))
    }
}

/// Build the executor a manifest entry asks for.
///
/// Returns `None` for an unknown kind or an unavailable one; the tool is then
/// registered without an executor and the registry records the error.
pub fn build_executor(tool: &str, spec: &ExecutorSpec) -> Option<Arc<dyn ToolExecutor>> {
    match spec.kind.as_str() {
        "static" => Some(Arc::new(StaticExecutor::new(spec.value.clone()))),
        "echo" => Some(Arc::new(EchoExecutor)),
        "http_get" => http_get(tool, spec),
        other => {
            warn!("Tool '{}': unknown executor kind '{}'", tool, other);
            None
        }
    }
}

#[cfg(feature = "web-tools")]
fn http_get(tool: &str, spec: &ExecutorSpec) -> Option<Arc<dyn ToolExecutor>> {
    let Some(url) = spec.url.as_deref() else {
        warn!("Tool '{}': http_get executor needs a url", tool);
        return None;
    };
    Some(Arc::new(super::web::HttpGetExecutor::new(url)))
}

#[cfg(not(feature = "web-tools"))]
fn http_get(tool: &str, _spec: &ExecutorSpec) -> Option<Arc<dyn ToolExecutor>> {
    warn!(
        "Tool '{}': http_get executor requires the web-tools feature",
        tool
    );
    None
}
