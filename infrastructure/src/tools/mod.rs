//! Tool adapters
//!
//! - [`schema`]: JSON Schema conversion of compiled tools
//! - [`builtin`]: executors a kit manifest can declare (`static`, `echo`, `http_get`)
//! - `web`: the HTTP executor, behind the `web-tools` feature

pub mod builtin;
pub mod schema;

#[cfg(feature = "web-tools")]
pub mod web;

pub use builtin::{EchoExecutor, ExecutorSpec, StaticExecutor, build_executor};
pub use schema::JsonSchemaConverter;
