//! **Web executors**, gated behind the `web-tools` Cargo feature flag.

mod http_get;

pub use http_get::HttpGetExecutor;
