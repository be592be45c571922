//! Console output formatter for kit reports

use agentkit_application::{AgentInfo, CompiledKit, ToolInfo};
use agentkit_domain::{Diagnostic, OutputFormat, Severity, UsageMemory};
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;

/// Formats diagnostics, compiled graphs and store introspection for the console
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (`--no-color`, `[output] color = false`)
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format recorded diagnostics, errors first
    pub fn diagnostics(diagnostics: &[Diagnostic]) -> String {
        if diagnostics.is_empty() {
            return format!("{}\n", "No problems found.".green());
        }

        let mut output = String::new();
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diagnostics.iter().partition(|d| d.is_error());

        for d in errors.iter().chain(warnings.iter()) {
            let label = match d.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            output.push_str(&format!(
                "{}{} {}\n",
                label,
                format!("[{}]", d.code).dimmed(),
                d.message
            ));
        }

        output.push_str(&format!(
            "\n{} error(s), {} warning(s)\n",
            errors.len(),
            warnings.len()
        ));
        output
    }

    /// Format a compiled graph in the requested format
    pub fn compiled(kit: &CompiledKit, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(kit),
            OutputFormat::Summary => Self::compiled_summary(kit),
            OutputFormat::Full => Self::compiled_full(kit),
        }
    }

    /// One line per tool and agent
    pub fn compiled_summary(kit: &CompiledKit) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} ({})\n", "Tools".cyan().bold(), kit.tools.len()));
        for tool in kit.tools.values() {
            output.push_str(&format!(
                "  {} {}\n",
                tool.name.bold(),
                format!("[{}, {} param(s)]", tool.provider, tool.schema.len()).dimmed()
            ));
        }

        output.push_str(&format!(
            "{} ({})\n",
            "Agents".cyan().bold(),
            kit.agents.len()
        ));
        for agent in kit.agents.values() {
            let tools: Vec<&str> = agent.tools.keys().map(String::as_str).collect();
            output.push_str(&format!(
                "  {} {} -> {}\n",
                agent.name.bold(),
                format!("[{}, t={}]", agent.model.id, agent.temperature).dimmed(),
                if tools.is_empty() {
                    "(no tools)".to_string()
                } else {
                    tools.join(", ")
                }
            ));
        }
        output
    }

    /// Tools with their schemas, agents with instructions, then usage memory
    pub fn compiled_full(kit: &CompiledKit) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Compiled Kit"));
        output.push('\n');

        output.push_str(&Self::section_header("Tools"));
        for tool in kit.tools.values() {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {} ──", tool.name).yellow().bold()
            ));
            output.push_str(&format!("{} {}\n", "Provider:".cyan(), tool.provider));
            if !tool.description.is_empty() {
                output.push_str(&format!("{}\n", tool.description));
            }
            for (name, param) in &tool.schema.properties {
                output.push_str(&format!(
                    "  * {}: {}{}\n",
                    name,
                    param.kind.name(),
                    param
                        .description
                        .as_deref()
                        .map(|d| format!(" - {}", d))
                        .unwrap_or_default()
                ));
            }
        }

        output.push_str(&Self::section_header("Agents"));
        for agent in kit.agents.values() {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {} ──", agent.name).yellow().bold()
            ));
            output.push_str(&format!(
                "{} {} ({}), temperature {}\n",
                "Model:".cyan(),
                agent.model.id,
                agent.model.provider,
                agent.temperature
            ));
            if !agent.description.is_empty() {
                output.push_str(&format!("{}\n", agent.description));
            }
            for instruction in &agent.instructions {
                output.push_str(&format!("  > {}\n", instruction));
            }
            let tools: Vec<&str> = agent.tools.keys().map(String::as_str).collect();
            output.push_str(&format!("{} {}\n", "Tools:".cyan(), tools.join(", ")));
        }

        output.push_str(&Self::section_header("Usage Memory"));
        output.push_str(&Self::memory(&kit.memory));
        output.push_str(&Self::footer());
        output
    }

    /// Format usage counters, conversation length and recorded messages
    pub fn memory(memory: &UsageMemory) -> String {
        let mut output = String::new();

        for (name, usage) in &memory.tool_usage {
            output.push_str(&format!(
                "  tool  {:<24} used {}x",
                name, usage.usage_count
            ));
            if !usage.agents.is_empty() {
                output.push_str(&format!(" by {}", usage.agents.join(", ")));
            }
            output.push('\n');
        }
        for (name, usage) in &memory.agent_usage {
            output.push_str(&format!(
                "  agent {:<24} used {}x\n",
                name, usage.usage_count
            ));
        }
        if !memory.conversation.is_empty() {
            output.push_str(&format!(
                "  {} conversation message(s)\n",
                memory.conversation.len()
            ));
        }
        for warning in &memory.warnings {
            output.push_str(&format!("  {} {}\n", "warning:".yellow(), warning));
        }
        for error in &memory.errors {
            output.push_str(&format!("  {} {}\n", "error:".red(), error));
        }
        output
    }

    /// Store introspection: definitions joined with their usage
    pub fn info(tools: &IndexMap<String, ToolInfo>, agents: &IndexMap<String, AgentInfo>) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Tools"));
        for (name, info) in tools {
            let deps = if info.definition.has_dependencies() {
                format!(" depends on {}", info.definition.dependencies.join(", "))
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  {} {}{}\n",
                name.bold(),
                format!("(used {}x)", info.usage.usage_count).dimmed(),
                deps
            ));
            if !info.usage.agents.is_empty() {
                output.push_str(&format!("    agents: {}\n", info.usage.agents.join(", ")));
            }
        }

        output.push_str(&Self::section_header("Agents"));
        for (name, info) in agents {
            output.push_str(&format!(
                "  {} {} {}\n",
                name.bold(),
                info.definition.model,
                format!("(used {}x)", info.usage.usage_count).dimmed()
            ));
            if !info.definition.tools.is_empty() {
                output.push_str(&format!("    tools: {}\n", info.definition.tools.join(", ")));
            }
        }
        output
    }

    /// Format any serializable report as pretty JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentkit_application::AgentKit;
    use agentkit_domain::{AgentConfig, DiagnosticCode, ParameterSpec, ToolConfig, executor_fn};

    fn kit() -> AgentKit {
        colored::control::set_override(false);
        let mut kit = AgentKit::new();
        kit.tool(
            "Price",
            ToolConfig::new("ETH price")
                .with_parameter("date", ParameterSpec::string().with_description("When"))
                .with_executor(executor_fn(|_| async { Ok(serde_json::json!(1)) })),
        )
        .agent(
            "Bot",
            AgentConfig::new("bot", "gpt-4o")
                .with_instruction("Be brief")
                .with_tool("Price"),
        );
        kit
    }

    #[test]
    fn test_diagnostics_errors_first() {
        colored::control::set_override(false);
        let diagnostics = vec![
            Diagnostic::new(DiagnosticCode::DependencyCycle, "Circular dependency detected: A -> A"),
            Diagnostic::new(DiagnosticCode::InvalidModel, "Error in agent 'X': Invalid model: y"),
        ];
        let text = ConsoleFormatter::diagnostics(&diagnostics);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("error[invalid_model]"));
        assert!(lines[1].starts_with("warning[dependency_cycle]"));
        assert!(text.contains("1 error(s), 1 warning(s)"));
    }

    #[test]
    fn test_no_diagnostics() {
        colored::control::set_override(false);
        assert_eq!(ConsoleFormatter::diagnostics(&[]), "No problems found.\n");
    }

    #[test]
    fn test_compiled_summary() {
        let compiled = kit().compile().unwrap();
        let text = ConsoleFormatter::compiled(&compiled, OutputFormat::Summary);
        assert!(text.contains("Price [openai, 1 param(s)]"));
        assert!(text.contains("Bot [gpt-4o, t=0.5] -> Price"));
    }

    #[test]
    fn test_compiled_full_includes_usage() {
        let compiled = kit().compile().unwrap();
        let text = ConsoleFormatter::compiled(&compiled, OutputFormat::Full);
        assert!(text.contains("* date: string - When"));
        assert!(text.contains("> Be brief"));
        assert!(text.contains("used 2x by Bot"));
    }

    #[test]
    fn test_compiled_json() {
        let compiled = kit().compile().unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::compiled(&compiled, OutputFormat::Json))
                .unwrap();
        assert_eq!(value["agents"]["Bot"]["tools"][0], "Price");
        assert_eq!(value["tools"]["Price"]["schema"]["properties"]["date"]["type"], "string");
    }

    #[test]
    fn test_info() {
        let mut kit = kit();
        kit.tool(
            "Convert",
            ToolConfig::new("fx")
                .with_dependency("Price")
                .with_executor(executor_fn(|_| async { Ok(serde_json::json!(1)) })),
        );
        let text = ConsoleFormatter::info(&kit.tools_info(), &kit.agents_info());
        assert!(text.contains("Price (used 2x)\n"));
        assert!(text.contains("Convert (used 1x) depends on Price"));
        assert!(text.contains("agents: Bot"));
        assert!(text.contains("Bot gpt-4o (used 1x)"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
