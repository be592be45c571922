//! Compilation errors

use agentkit_domain::SchemaError;
use thiserror::Error;

/// Terminal failure of `compile()`.
///
/// `Blocked` means the session recorded bad input; `Fault` means the
/// compiler itself could not build the graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Compilation failed due to validation errors")]
    Blocked { errors: Vec<String> },

    #[error("Failed to compile: {0}")]
    Fault(String),
}

impl CompileError {
    pub fn is_blocked(&self) -> bool {
        matches!(self, CompileError::Blocked { .. })
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, CompileError::Fault(_))
    }

    /// Validation errors behind a blocked compile (empty for faults)
    pub fn errors(&self) -> &[String] {
        match self {
            CompileError::Blocked { errors } => errors,
            CompileError::Fault(_) => &[],
        }
    }
}

/// Internal failure while building compiled tools or agents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerFault {
    #[error("tool '{tool}': {source}")]
    Schema { tool: String, source: SchemaError },

    #[error("agent '{agent}' is wired to missing tool '{tool}'")]
    MissingTool { agent: String, tool: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_display_and_errors() {
        let err = CompileError::Blocked {
            errors: vec!["Error in tool 'X': Tool 'X' already exists".to_string()],
        };
        assert!(err.is_blocked());
        assert!(!err.is_fault());
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.to_string(), "Compilation failed due to validation errors");
    }

    #[test]
    fn test_fault_display() {
        let fault = CompilerFault::MissingTool {
            agent: "Bot".to_string(),
            tool: "Quote".to_string(),
        };
        let err = CompileError::Fault(fault.to_string());
        assert!(err.is_fault());
        assert!(err.errors().is_empty());
        assert_eq!(
            err.to_string(),
            "Failed to compile: agent 'Bot' is wired to missing tool 'Quote'"
        );
    }
}
