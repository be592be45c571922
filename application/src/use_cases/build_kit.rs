//! Build Kit use case.
//!
//! Loads declarations from a [`KitSource`], registers them into a fresh
//! [`AgentKit`] (tools first, then agents, each in declaration order) and
//! compiles the result.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use agentkit_domain::Diagnostic;

use crate::compiler::{CompileError, CompiledKit};
use crate::config::CompileOptions;
use crate::kit::AgentKit;
use crate::ports::kit_logger::{KitEvent, KitEventLogger, NoKitEventLogger};
use crate::ports::kit_source::{KitSource, KitSourceError};

/// Errors that can occur while building a kit
#[derive(Error, Debug)]
pub enum BuildKitError {
    #[error(transparent)]
    Source(#[from] KitSourceError),

    #[error("{error}")]
    Compile {
        error: CompileError,
        /// Every diagnostic recorded before the failure
        diagnostics: Vec<Diagnostic>,
    },
}

/// Output of a successful build
#[derive(Debug)]
pub struct BuildKitOutput {
    /// The store, kept for introspection (`tools_info`, `agents_info`)
    pub kit: AgentKit,
    pub compiled: CompiledKit,
    pub warnings: Vec<String>,
}

/// Use case for turning declarations into a compiled kit
pub struct BuildKitUseCase {
    options: CompileOptions,
    logger: Arc<dyn KitEventLogger>,
}

impl BuildKitUseCase {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            logger: Arc::new(NoKitEventLogger),
        }
    }

    /// Set a structured event logger for diagnostics and memory snapshots.
    pub fn with_logger(mut self, logger: Arc<dyn KitEventLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Load and register every declaration without compiling.
    ///
    /// Registration problems are recorded in the returned kit, not raised.
    pub fn register(&self, source: &dyn KitSource) -> Result<AgentKit, BuildKitError> {
        let declarations = source.load()?;
        debug!(
            "Loaded {} tool(s) and {} agent(s) from {}",
            declarations.tools.len(),
            declarations.agents.len(),
            source.describe()
        );

        let mut kit = AgentKit::new();
        for (name, config) in declarations.tools {
            kit.tool(name, config);
        }
        for (name, config) in declarations.agents {
            kit.agent(name, config);
        }
        Ok(kit)
    }

    /// Register and validate without compiling; returns the kit with every
    /// diagnostic the validators recorded.
    pub fn check(&self, source: &dyn KitSource) -> Result<AgentKit, BuildKitError> {
        let mut kit = self.register(source)?;
        kit.validate_hierarchy();
        kit.validate_tool_dependencies();
        self.log_diagnostics(&kit);
        Ok(kit)
    }

    pub fn execute(&self, source: &dyn KitSource) -> Result<BuildKitOutput, BuildKitError> {
        let mut kit = self.register(source)?;

        let result = kit.compile_with(&self.options);
        self.log_diagnostics(&kit);

        match result {
            Ok(compiled) => {
                info!("Built kit from {}", source.describe());
                self.logger.log(KitEvent::new(
                    "compiled",
                    json!({
                        "tools": compiled.tools.keys().collect::<Vec<_>>(),
                        "agents": compiled.agents.keys().collect::<Vec<_>>(),
                        "memory": compiled.memory,
                    }),
                ));
                let warnings = kit.warnings();
                Ok(BuildKitOutput {
                    kit,
                    compiled,
                    warnings,
                })
            }
            Err(error) => {
                self.logger.log(KitEvent::new(
                    "compile_failed",
                    json!({
                        "error": error.to_string(),
                        "memory": kit.memory(),
                    }),
                ));
                Err(BuildKitError::Compile {
                    error,
                    diagnostics: kit.diagnostics().to_vec(),
                })
            }
        }
    }

    fn log_diagnostics(&self, kit: &AgentKit) {
        for diagnostic in kit.diagnostics() {
            self.logger.log(KitEvent::new(
                "diagnostic",
                json!({
                    "severity": diagnostic.severity,
                    "code": diagnostic.code.as_str(),
                    "message": diagnostic.message,
                }),
            ));
        }
    }
}
