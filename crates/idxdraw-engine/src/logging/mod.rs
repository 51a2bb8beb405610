//! Logging utilities.
//!
//! Installs the `env_logger` backend behind the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
