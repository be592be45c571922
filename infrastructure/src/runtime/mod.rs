//! Agent runtime adapters

mod placeholder;

pub use placeholder::{PLACEHOLDER_REPLY, PlaceholderRuntime};
