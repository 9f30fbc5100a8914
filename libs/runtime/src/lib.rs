//! Process-level plumbing shared by the server binary: layered configuration
//! and logging initialization.

pub mod config;
pub mod logging;

pub use config::{AppConfig, CliArgs, DatabaseConfig, LoggingConfig, ServerConfig};
pub use logging::init_logging;
