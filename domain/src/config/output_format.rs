//! Output format value object

use serde::{Deserialize, Serialize};

/// How reports about a kit are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report: diagnostics, tools, agents and usage
    Full,
    /// One line per tool and agent (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
