//! CLI entrypoint for agentkit
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agentkit_application::{
    BuildKitError, BuildKitOutput, BuildKitUseCase, KitSource, ToolSchemaPort,
};
use agentkit_domain::{ConversationMessage, OutputFormat, ToolArguments};
use agentkit_infrastructure::{
    ConfigLoader, JsonSchemaConverter, JsonlKitLogger, ManifestSource, PlaceholderRuntime,
};
use agentkit_presentation::{Cli, Command, ConsoleFormatter};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        warn!("{}", issue.message());
    }

    if cli.no_color || !config.output.color {
        ConsoleFormatter::disable_color();
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let manifest = cli
        .manifest
        .clone()
        .unwrap_or_else(|| config.kit.manifest.clone());
    let source = ManifestSource::new(manifest);
    let use_case = BuildKitUseCase::new(config.compile.to_options());

    info!("Using kit manifest {}", source.describe());

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => {
            let kit = use_case.check(&source)?;
            if format == OutputFormat::Json {
                println!("{}", ConsoleFormatter::json(kit.diagnostics()));
            } else {
                print!("{}", ConsoleFormatter::diagnostics(kit.diagnostics()));
            }
            if kit.has_errors() {
                std::process::exit(1);
            }
        }

        Command::Compile { dump } => {
            let use_case = match dump {
                Some(path) => {
                    let logger = JsonlKitLogger::new(&path)
                        .with_context(|| format!("Cannot write {}", path.display()))?;
                    info!("Writing kit events to {}", logger.path().display());
                    use_case.with_logger(Arc::new(logger))
                }
                None => use_case,
            };
            let output = build(&use_case, &source)?;
            println!("{}", ConsoleFormatter::compiled(&output.compiled, format));
        }

        Command::Info => {
            let kit = use_case.register(&source)?;
            let (tools, agents) = (kit.tools_info(), kit.agents_info());
            if format == OutputFormat::Json {
                println!(
                    "{}",
                    ConsoleFormatter::json(&json!({ "tools": tools, "agents": agents }))
                );
            } else {
                print!("{}", ConsoleFormatter::info(&tools, &agents));
                if !kit.diagnostics().is_empty() {
                    eprint!("\n{}", ConsoleFormatter::diagnostics(kit.diagnostics()));
                }
            }
        }

        Command::Schema { agent } => {
            let output = build(&use_case, &source)?;
            let converter = JsonSchemaConverter;
            let schemas = match agent {
                Some(name) => {
                    let agent = output
                        .compiled
                        .agent(&name)
                        .ok_or_else(|| anyhow!("Agent '{}' not found", name))?;
                    converter.agent_tools_schema(agent)
                }
                None => converter.all_tools_schema(&output.compiled),
            };
            println!("{}", ConsoleFormatter::json(&schemas));
        }

        Command::Call { tool, args } => {
            let args: ToolArguments = serde_json::from_str(&args)
                .context("--args must be a JSON object")?;
            let output = build(&use_case, &source)?;
            let result = output.compiled.call_tool(&tool, args).await?;
            println!("{}", ConsoleFormatter::json(&result));
        }

        Command::Ask { agent, message } => {
            let mut output = build(&use_case, &source)?;
            output.kit.add_to_conversation("user", message.as_str());

            let compiled_agent = output
                .compiled
                .agent(&agent)
                .ok_or_else(|| anyhow!("Agent '{}' not found", agent))?;
            let reply = compiled_agent
                .generate(
                    &PlaceholderRuntime,
                    vec![ConversationMessage::user(message.as_str())],
                )
                .await?;
            output.kit.add_to_conversation(reply.role.as_str(), reply.value.as_str());

            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::json(&reply)),
                OutputFormat::Summary => println!("{}", reply.value),
                OutputFormat::Full => {
                    println!("{}\n", reply.value);
                    print!("{}", ConsoleFormatter::memory(&output.kit.memory()));
                }
            }
        }
    }

    Ok(())
}

/// Build the kit, printing diagnostics to stderr when there are any
fn build(use_case: &BuildKitUseCase, source: &dyn KitSource) -> Result<BuildKitOutput> {
    match use_case.execute(source) {
        Ok(output) => {
            if !output.warnings.is_empty() {
                eprint!("{}", ConsoleFormatter::diagnostics(output.kit.diagnostics()));
            }
            Ok(output)
        }
        Err(BuildKitError::Compile { error, diagnostics }) => {
            eprint!("{}", ConsoleFormatter::diagnostics(&diagnostics));
            Err(error.into())
        }
        Err(e) => Err(e.into()),
    }
}
