//! [`KitSource`] adapter reading a TOML manifest from disk

use agentkit_application::{KitDeclarations, KitSource, KitSourceError};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::file_manifest::FileKitManifest;

pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse manifest text; `origin` only labels errors
    pub fn parse(origin: &str, text: &str) -> Result<KitDeclarations, KitSourceError> {
        let manifest: FileKitManifest =
            toml::from_str(text).map_err(|e| KitSourceError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        Ok(KitDeclarations {
            tools: manifest
                .tools
                .iter()
                .map(|decl| (decl.name.clone(), decl.to_config()))
                .collect(),
            agents: manifest
                .agents
                .iter()
                .map(|decl| (decl.name.clone(), decl.to_config()))
                .collect(),
        })
    }
}

impl KitSource for ManifestSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<KitDeclarations, KitSourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| KitSourceError::Read {
            path: self.describe(),
            reason: e.to_string(),
        })?;
        debug!("Read kit manifest {} ({} bytes)", self.describe(), text.len());
        Self::parse(&self.describe(), &text)
    }
}
