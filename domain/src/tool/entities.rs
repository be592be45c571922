//! Tool domain entities

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::executor::ToolExecutor;
use super::schema::{ObjectSchema, ParamKind, SchemaError};

/// Element type hint for array parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsSpec {
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Declared parameter of a tool.
///
/// `param_type` is kept as the raw declared string so that unsupported
/// kinds can be reported as registration errors instead of parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSpec>,
}

impl ParameterSpec {
    pub fn new(param_type: impl Into<String>) -> Self {
        Self {
            param_type: param_type.into(),
            description: None,
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::new("string")
    }

    pub fn number() -> Self {
        Self::new("number")
    }

    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    pub fn object() -> Self {
        Self::new("object")
    }

    pub fn array() -> Self {
        Self::new("array")
    }

    pub fn array_of(item_type: impl Into<String>) -> Self {
        Self::array().with_items(item_type)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_items(mut self, item_type: impl Into<String>) -> Self {
        self.items = Some(ItemsSpec {
            item_type: item_type.into(),
        });
        self
    }

    /// Parse the declared type into one of the five supported kinds
    pub fn kind(&self) -> Result<ParamKind, SchemaError> {
        self.param_type.parse()
    }
}

/// Caller-supplied configuration of a tool, before validation
#[derive(Clone, Default)]
pub struct ToolConfig {
    pub description: String,
    pub parameters: IndexMap<String, ParameterSpec>,
    /// `None` means the tool has nothing to invoke; registration rejects it.
    pub execute: Option<Arc<dyn ToolExecutor>>,
    /// Other tools this one relies on (cycle detection only)
    pub dependencies: Vec<String>,
    /// Provider tag; the compiler falls back to its default when unset
    pub provider: Option<String>,
}

impl ToolConfig {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, spec: ParameterSpec) -> Self {
        self.parameters.insert(name.into(), spec);
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn ToolExecutor>) -> Self {
        self.execute = Some(executor);
        self
    }

    pub fn with_dependency(mut self, tool: impl Into<String>) -> Self {
        self.dependencies.push(tool.into());
        self
    }

    pub fn with_dependencies(mut self, tools: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dependencies.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

impl std::fmt::Debug for ToolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolConfig")
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("execute", &self.execute.as_ref().map(|_| "<executor>"))
            .field("dependencies", &self.dependencies)
            .field("provider", &self.provider)
            .finish()
    }
}

/// A registered tool: validated config plus its registration-time schema
#[derive(Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: IndexMap<String, ParameterSpec>,
    #[serde(skip)]
    pub executor: Arc<dyn ToolExecutor>,
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub schema: ObjectSchema,
}

impl ToolDefinition {
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("dependencies", &self.dependencies)
            .field("provider", &self.provider)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::executor::executor_fn;

    #[test]
    fn test_parameter_spec_builders() {
        let spec = ParameterSpec::array_of("string").with_description("Token symbols");
        assert_eq!(spec.param_type, "array");
        assert_eq!(spec.items.as_ref().unwrap().item_type, "string");
        assert_eq!(spec.kind().unwrap(), ParamKind::Array);
        assert!(ParameterSpec::new("uuid").kind().is_err());
    }

    #[test]
    fn test_parameter_spec_deserialize() {
        let spec: ParameterSpec =
            serde_json::from_str(r#"{"type":"array","items":{"type":"string"}}"#).unwrap();
        assert_eq!(spec, ParameterSpec::array_of("string"));
    }

    #[test]
    fn test_tool_config_builder() {
        let config = ToolConfig::new("Fetch ETH price")
            .with_parameter("date", ParameterSpec::string())
            .with_parameter("currency", ParameterSpec::string())
            .with_dependency("Clock")
            .with_provider("anthropic")
            .with_executor(executor_fn(|_| async { Ok(serde_json::Value::Null) }));

        assert_eq!(config.description, "Fetch ETH price");
        let names: Vec<_> = config.parameters.keys().map(String::as_str).collect();
        assert_eq!(names, ["date", "currency"]);
        assert_eq!(config.dependencies, ["Clock"]);
        assert_eq!(config.provider.as_deref(), Some("anthropic"));
        assert!(config.execute.is_some());
        assert!(format!("{:?}", config).contains("<executor>"));
    }

    #[test]
    fn test_tool_config_default_has_no_executor() {
        let config = ToolConfig::new("inert");
        assert!(config.execute.is_none());
        assert!(config.parameters.is_empty());
    }
}
