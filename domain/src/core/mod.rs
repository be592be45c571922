//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: supported LLM models and the provider table
//! - [`diagnostic::Diagnostic`]: errors and warnings recorded during registration

pub mod diagnostic;
pub mod model;
pub mod string;
