//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for kit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Everything, including usage memory
    Full,
    /// Names, models and counts only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for agentkit_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => agentkit_domain::OutputFormat::Full,
            OutputFormat::Summary => agentkit_domain::OutputFormat::Summary,
            OutputFormat::Json => agentkit_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agentkit
#[derive(Parser, Debug)]
#[command(name = "agentkit")]
#[command(author, version, about = "Declare, validate and compile tool + agent graphs")]
#[command(long_about = r#"
agentkit reads a kit manifest (TOML) declaring tools and agents, validates the
graph they form and compiles it into callable tools and wired agents.

Configuration files are loaded from (in priority order):
1. AGENTKIT_* environment variables
2. --config <path>     Explicit config file
3. ./agentkit.toml     Project-level config
4. ~/.config/agentkit/config.toml   Global config

Example:
  agentkit check
  agentkit -m wallet.toml compile --dump memory.jsonl
  agentkit call EthereumPriceTool --args '{"date": "2024-01-01"}'
  agentkit ask EthereumPriceAgent "What is ETH at?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Kit manifest to load (defaults to `[kit] manifest`, then ./kit.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    /// Output format (defaults to `[output] format`, then summary)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register and validate the kit, print diagnostics
    Check,

    /// Compile the kit and print the compiled graph
    Compile {
        /// Write diagnostics and the usage memory snapshot as JSONL
        #[arg(long, value_name = "PATH")]
        dump: Option<PathBuf>,
    },

    /// Show registered tools and agents with their usage
    Info,

    /// Print JSON Schemas of the compiled tools
    Schema {
        /// Only the tools wired to this agent
        #[arg(long, value_name = "AGENT")]
        agent: Option<String>,
    },

    /// Invoke a compiled tool
    Call {
        /// Tool name
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Ask a compiled agent a question
    Ask {
        /// Agent name
        agent: String,

        /// The message to send
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "agentkit", "compile", "--dump", "out.jsonl", "-m", "wallet.toml", "-vv",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Compile {
                dump: Some(PathBuf::from("out.jsonl"))
            })
        );
        assert_eq!(cli.manifest, Some(PathBuf::from("wallet.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from(["agentkit", "call", "Price", "--args", r#"{"a":1}"#])
            .unwrap();
        match cli.command {
            Some(Command::Call { tool, args }) => {
                assert_eq!(tool, "Price");
                assert_eq!(args, r#"{"a":1}"#);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let cli = Cli::try_parse_from(["agentkit", "info", "-o", "json"]).unwrap();
        let format: agentkit_domain::OutputFormat = cli.output.unwrap().into();
        assert_eq!(format, agentkit_domain::OutputFormat::Json);
    }
}
