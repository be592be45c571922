//! Application-level configuration.
//!
//! - [`CompileOptions`]: defaults the compiler applies to unset fields

pub mod compile_options;

pub use compile_options::{CompileOptions, DEFAULT_PROVIDER, DEFAULT_TEMPERATURE};
