//! Declarative kit manifests.
//!
//! A TOML file lists `[[tools]]` and `[[agents]]`; [`ManifestSource`] turns
//! it into declarations for the
//! [`KitSource`](agentkit_application::KitSource) port.

mod file_manifest;
mod source;

pub use file_manifest::{FileAgentDecl, FileKitManifest, FileToolDecl};
pub use source::ManifestSource;
