//! Diagnostics recorded while building a kit.
//!
//! Registration never fails loudly. Every problem becomes a [`Diagnostic`]
//! with a [`Severity`]; errors block compilation, warnings do not.

use serde::{Deserialize, Serialize};

/// Severity level of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks every later `compile()` in the session.
    Error,
    /// Reported, but compilation proceeds.
    Warning,
}

/// Identifies the kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// A tool or agent name was registered twice.
    RegistrationConflict,
    /// A tool parameter declares a type outside the supported kinds.
    InvalidParameterType,
    /// A tool was registered without an executor.
    InvalidExecutable,
    /// An agent names a model outside the supported table.
    InvalidModel,
    /// An agent references a tool that is not registered.
    UnknownToolReference,
    /// Tool dependencies form a cycle.
    DependencyCycle,
    /// A tool depends on a tool that is not registered.
    UnknownDependency,
}

impl DiagnosticCode {
    /// Severity this code is recorded with
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::DependencyCycle | DiagnosticCode::UnknownDependency => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::RegistrationConflict => "registration_conflict",
            DiagnosticCode::InvalidParameterType => "invalid_parameter_type",
            DiagnosticCode::InvalidExecutable => "invalid_executable",
            DiagnosticCode::InvalidModel => "invalid_model",
            DiagnosticCode::UnknownToolReference => "unknown_tool_reference",
            DiagnosticCode::DependencyCycle => "dependency_cycle",
            DiagnosticCode::UnknownDependency => "unknown_dependency",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded problem with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check whether any diagnostic in the slice is an error
    pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
        diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
