//! Layered configuration for the command line: arguments, then an optional TOML file,
//! then built-in defaults.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::AppConfig;
