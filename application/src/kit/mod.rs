//! The definition store.
//!
//! [`AgentKit`] owns the registered tools and agents, the recorded
//! diagnostics and the usage memory of one session.

pub mod info;
pub mod registry;

pub use info::{AgentInfo, ToolInfo};
pub use registry::{AgentKit, RegistrationError};
