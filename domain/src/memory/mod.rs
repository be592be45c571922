//! Usage memory
//!
//! [`UsageMemory`] tracks, per session, how often and by whom each tool and
//! agent has been referenced, plus every recorded error and warning. It is
//! reset only when a new kit is constructed and is never rolled back.

pub mod entities;

pub use entities::{AgentUsage, ConversationMessage, ToolUsage, UsageMemory};
