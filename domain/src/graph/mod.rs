//! Graph validation
//!
//! Two graphs are checked independently:
//!
//! - the **agent → tool** reference graph, where every referenced tool must
//!   exist ([`hierarchy`]);
//! - the **tool → tool** dependency graph, which must not contain cycles
//!   ([`cycle`]).
//!
//! Agents are never referenced by tools, so only the second graph can cycle.

pub mod cycle;
pub mod hierarchy;

pub use cycle::{DanglingDependency, DependencyCycle, DependencyGraph};
pub use hierarchy::{UnknownReference, unknown_references};
