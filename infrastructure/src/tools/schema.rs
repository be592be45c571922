//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema for tool-calling APIs.

use agentkit_application::{CompiledTool, ToolSchemaPort};
use agentkit_domain::tool::{ElementKind, ParamSchema, SchemaKind};
use serde_json::{Map, Value, json};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Maps the structural kinds:
/// - `String` / `Number` / `Boolean` → the JSON Schema type of that name
/// - `ArrayOf(String)` → `array` with `items: {"type": "string"}`
/// - `ArrayOf(Any)` → `array` with unconstrained items
/// - `Object` → open `object`
pub struct JsonSchemaConverter;

impl JsonSchemaConverter {
    fn param_to_schema(param: &ParamSchema) -> Value {
        let mut prop = match &param.kind {
            SchemaKind::String => json!({ "type": "string" }),
            SchemaKind::Number => json!({ "type": "number" }),
            SchemaKind::Boolean => json!({ "type": "boolean" }),
            SchemaKind::ArrayOf(ElementKind::String) => {
                json!({ "type": "array", "items": { "type": "string" } })
            }
            SchemaKind::ArrayOf(ElementKind::Any) => json!({ "type": "array", "items": {} }),
            SchemaKind::Object => json!({ "type": "object", "additionalProperties": true }),
        };
        if let (Some(description), Some(map)) = (&param.description, prop.as_object_mut()) {
            map.insert("description".to_string(), json!(description));
        }
        prop
    }
}

impl ToolSchemaPort for JsonSchemaConverter {
    fn tool_to_schema(&self, tool: &CompiledTool) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (name, param) in &tool.schema.properties {
            properties.insert(name.clone(), Self::param_to_schema(param));
            if !param.optional {
                required.push(json!(name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentkit_application::AgentKit;
    use agentkit_domain::{AgentConfig, ParameterSpec, ToolConfig, executor_fn};

    fn compiled_kit() -> agentkit_application::CompiledKit {
        let mut kit = AgentKit::new();
        kit.tool(
            "Transfer",
            ToolConfig::new("Send funds")
                .with_parameter(
                    "amount",
                    ParameterSpec::number().with_description("Amount in ETH"),
                )
                .with_parameter("tags", ParameterSpec::array_of("string"))
                .with_parameter("extra", ParameterSpec::array())
                .with_parameter("meta", ParameterSpec::object())
                .with_executor(executor_fn(|_| async { Ok(json!(null)) })),
        )
        .tool(
            "Balance",
            ToolConfig::new("Read balance").with_executor(executor_fn(|_| async { Ok(json!(0)) })),
        )
        .agent(
            "Wallet",
            AgentConfig::new("wallet", "gpt-4o").with_tool("Balance"),
        );
        kit.compile().unwrap()
    }

    #[test]
    fn test_tool_to_schema() {
        let kit = compiled_kit();
        let schema = JsonSchemaConverter.tool_to_schema(&kit.tools["Transfer"]);

        assert_eq!(schema["name"], "Transfer");
        assert_eq!(schema["description"], "Send funds");
        assert_eq!(schema["input_schema"]["type"], "object");

        let props = &schema["input_schema"]["properties"];
        assert_eq!(props["amount"]["type"], "number");
        assert_eq!(props["amount"]["description"], "Amount in ETH");
        assert_eq!(props["tags"]["items"]["type"], "string");
        assert_eq!(props["extra"]["items"], json!({}));
        assert_eq!(props["meta"]["additionalProperties"], true);

        // Compiled parameters are all optional.
        assert_eq!(schema["input_schema"]["required"], json!([]));
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let kit = compiled_kit();
        let schema = JsonSchemaConverter.tool_to_schema(&kit.tools["Transfer"]);
        let keys: Vec<&String> = schema["input_schema"]["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, ["amount", "tags", "extra", "meta"]);
    }

    #[test]
    fn test_all_and_agent_tools_schema() {
        let kit = compiled_kit();
        let converter = JsonSchemaConverter;

        let all = converter.all_tools_schema(&kit);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["name"], "Transfer");

        let wallet = converter.agent_tools_schema(&kit.agents["Wallet"]);
        assert_eq!(wallet.len(), 1);
        assert_eq!(wallet[0]["name"], "Balance");
    }
}
