//! Kit manifest location from TOML (`[kit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MANIFEST: &str = "kit.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKitConfig {
    /// Manifest used when the CLI is not given one
    pub manifest: PathBuf,
}

impl Default for FileKitConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }
}
