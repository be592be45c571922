//! Parameter schema derivation
//!
//! Turns a tool's declared [`ParameterSpec`]s into a structural
//! [`ObjectSchema`]. The same derivation runs twice: once at registration
//! with every parameter required (to fail fast on bad type kinds), and once
//! at compile time with every parameter optional (the runtime-facing shape).
//!
//! | declared type | schema | mock value |
//! |---|---|---|
//! | `string` | [`SchemaKind::String`] | `"test"` |
//! | `number` | [`SchemaKind::Number`] | `0` |
//! | `boolean` | [`SchemaKind::Boolean`] | `false` |
//! | `array` | [`SchemaKind::ArrayOf`] (`String` items only when `items.type = "string"`) | `[]` |
//! | `object` | [`SchemaKind::Object`] (open record) | `{}` |

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use super::entities::ParameterSpec;
use super::value_objects::ToolArguments;

/// Errors raised while deriving a schema from parameter specs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unsupported parameter type: {0}")]
    UnsupportedType(String),

    #[error("Mock arguments rejected for parameter '{param}': {reason}")]
    MockRejected { param: String, reason: String },
}

/// The five declarable parameter kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }
}

impl std::str::FromStr for ParamKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParamKind::String),
            "number" => Ok(ParamKind::Number),
            "boolean" => Ok(ParamKind::Boolean),
            "array" => Ok(ParamKind::Array),
            "object" => Ok(ParamKind::Object),
            other => Err(SchemaError::UnsupportedType(other.to_string())),
        }
    }
}

/// Element type of an array parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    String,
    Any,
}

/// Structural shape of a single parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Number,
    Boolean,
    #[serde(rename = "array")]
    ArrayOf(ElementKind),
    Object,
}

impl SchemaKind {
    fn from_spec(spec: &ParameterSpec) -> Result<Self, SchemaError> {
        Ok(match spec.kind()? {
            ParamKind::String => SchemaKind::String,
            ParamKind::Number => SchemaKind::Number,
            ParamKind::Boolean => SchemaKind::Boolean,
            ParamKind::Array => {
                let element = match &spec.items {
                    Some(items) if items.item_type == "string" => ElementKind::String,
                    _ => ElementKind::Any,
                };
                SchemaKind::ArrayOf(element)
            }
            ParamKind::Object => SchemaKind::Object,
        })
    }

    /// Placeholder value of this shape, used to self-check a schema
    pub fn mock_value(&self) -> Value {
        match self {
            SchemaKind::String => json!("test"),
            SchemaKind::Number => json!(0),
            SchemaKind::Boolean => json!(false),
            SchemaKind::ArrayOf(_) => json!([]),
            SchemaKind::Object => json!({}),
        }
    }

    /// Check a present value against this shape
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = match self {
            SchemaKind::String => value.is_string(),
            SchemaKind::Number => value.is_number(),
            SchemaKind::Boolean => value.is_boolean(),
            SchemaKind::Object => value.is_object(),
            SchemaKind::ArrayOf(element) => match value.as_array() {
                None => false,
                Some(items) => match element {
                    ElementKind::Any => true,
                    ElementKind::String => {
                        if let Some(pos) = items.iter().position(|v| !v.is_string()) {
                            return Err(format!("expected string at index {}", pos));
                        }
                        true
                    }
                },
            },
        };
        if ok {
            Ok(())
        } else {
            Err(format!("expected {}, got {}", self.name(), json_type_name(value)))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::ArrayOf(_) => "array",
            SchemaKind::Object => "object",
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether derived parameters must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Registration-time schema: every parameter required
    Required,
    /// Compiled schema: every parameter optional
    Optional,
}

/// Schema of one parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSchema {
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub optional: bool,
}

/// Schema of a tool's whole argument mapping.
///
/// Unknown keys pass through untouched; only declared keys are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectSchema {
    pub properties: IndexMap<String, ParamSchema>,
}

/// A single argument that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("Missing required parameter '{0}'")]
    Missing(String),

    #[error("Invalid value for parameter '{param}': {reason}")]
    TypeMismatch { param: String, reason: String },
}

impl ObjectSchema {
    /// Derive a schema from declared parameters, preserving declaration order.
    pub fn derive(
        parameters: &IndexMap<String, ParameterSpec>,
        presence: Presence,
    ) -> Result<Self, SchemaError> {
        let mut properties = IndexMap::with_capacity(parameters.len());
        for (name, spec) in parameters {
            let kind = SchemaKind::from_spec(spec)?;
            properties.insert(
                name.clone(),
                ParamSchema {
                    kind,
                    description: spec.description.clone(),
                    optional: presence == Presence::Optional,
                },
            );
        }
        Ok(Self { properties })
    }

    /// Derive the strict schema and prove it accepts mock arguments.
    ///
    /// Only the schema shape is exercised; no executor is involved.
    pub fn derive_checked(parameters: &IndexMap<String, ParameterSpec>) -> Result<Self, SchemaError> {
        let schema = Self::derive(parameters, Presence::Required)?;
        schema
            .validate(&schema.mock_arguments())
            .map_err(|violation| match violation {
                SchemaViolation::Missing(param) => SchemaError::MockRejected {
                    param,
                    reason: "missing".to_string(),
                },
                SchemaViolation::TypeMismatch { param, reason } => {
                    SchemaError::MockRejected { param, reason }
                }
            })?;
        Ok(schema)
    }

    /// Build placeholder arguments matching every declared parameter
    pub fn mock_arguments(&self) -> ToolArguments {
        self.properties
            .iter()
            .map(|(name, param)| (name.clone(), param.kind.mock_value()))
            .collect()
    }

    /// Validate arguments: required keys must be present, present keys must match.
    pub fn validate(&self, args: &ToolArguments) -> Result<(), SchemaViolation> {
        for (name, param) in &self.properties {
            match args.get(name) {
                None if param.optional => {}
                None => return Err(SchemaViolation::Missing(name.clone())),
                Some(value) => {
                    param
                        .kind
                        .check(value)
                        .map_err(|reason| SchemaViolation::TypeMismatch {
                            param: name.clone(),
                            reason,
                        })?
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParamSchema> {
        self.properties.get(name)
    }
}
