//! Tool domain value objects: arguments and error types
//!
//! Every tool invocation takes a [`ToolArguments`] mapping and resolves to
//! either a JSON value or a [`ToolError`].

use thiserror::Error;

/// Argument mapping passed to a tool executor (name → JSON value)
pub type ToolArguments = serde_json::Map<String, serde_json::Value>;

/// Failure of a single tool call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Arguments do not match the compiled schema
    #[error("[INVALID_ARGUMENT] {0}")]
    InvalidArgument(String),

    /// The executor ran and failed (I/O, HTTP status, oversized body)
    #[error("[EXECUTION_FAILED] {0}")]
    ExecutionFailed(String),

    #[error("[NOT_FOUND] Unknown tool: {0}")]
    NotFound(String),
}

impl ToolError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ToolError::InvalidArgument(message.into())
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        ToolError::ExecutionFailed(message.into())
    }

    pub fn not_found(tool: impl Into<String>) -> Self {
        ToolError::NotFound(tool.into())
    }

    /// Stable code for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ToolError::ExecutionFailed(_) => "EXECUTION_FAILED",
            ToolError::NotFound(_) => "NOT_FOUND",
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ToolError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::execution_failed("price feed unreachable");
        assert_eq!(err.code(), "EXECUTION_FAILED");
        assert_eq!(err.to_string(), "[EXECUTION_FAILED] price feed unreachable");
        assert_eq!(
            ToolError::not_found("EthPrice").to_string(),
            "[NOT_FOUND] Unknown tool: EthPrice"
        );
    }

    #[test]
    fn test_invalid_argument_check() {
        assert!(ToolError::invalid_argument("bad").is_invalid_argument());
        assert!(!ToolError::not_found("EthPrice").is_invalid_argument());
    }
}
