//! Tool executor abstraction
//!
//! A [`ToolExecutor`] is the asynchronous capability behind a tool. The
//! registry only stores it; nothing in registration or compilation ever
//! invokes it. Only a compiled tool's `call` does.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use super::value_objects::{ToolArguments, ToolError};

/// Asynchronous capability invoked with a mapping of argument name → value
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, args: ToolArguments) -> Result<serde_json::Value, ToolError>;
}

/// Adapter turning an async closure into a [`ToolExecutor`]
pub struct FnExecutor<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> ToolExecutor for FnExecutor<F>
where
    F: Fn(ToolArguments) -> Fut + Send + Sync,
    Fut: Future<Output = Result<serde_json::Value, ToolError>> + Send,
{
    async fn execute(&self, args: ToolArguments) -> Result<serde_json::Value, ToolError> {
        (self.f)(args).await
    }
}

/// Wrap an async closure as a shareable executor.
///
/// ```
/// use agentkit_domain::tool::executor::executor_fn;
///
/// let exec = executor_fn(|_args| async { Ok(serde_json::json!({"usd": 3120.5})) });
/// # let _ = exec;
/// ```
pub fn executor_fn<F, Fut>(f: F) -> Arc<dyn ToolExecutor>
where
    F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<serde_json::Value, ToolError>> + Send + 'static,
{
    Arc::new(FnExecutor { f })
}
