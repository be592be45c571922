//! Use cases (application services)

pub mod build_kit;
