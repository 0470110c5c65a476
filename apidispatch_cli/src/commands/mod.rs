//! CLI subcommand implementations.

pub mod build;
pub mod call;
mod endpoint_args;

pub use endpoint_args::EndpointArgs;
