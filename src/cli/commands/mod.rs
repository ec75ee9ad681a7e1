//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod convert;
pub mod evaluate;
pub mod init;
pub mod validate;

use crate::config::{load_config, DepscreenConfig};

/// Exit code for a configuration error
pub(crate) const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for an unrecoverable error
pub(crate) const EXIT_FATAL: i32 = 5;

/// Exit code after a shutdown signal (standard Unix convention for SIGINT)
pub(crate) const EXIT_INTERRUPTED: i32 = 130;

/// Load the configuration for a command, printing the failure if any
fn load_command_config(config_path: &str) -> Option<DepscreenConfig> {
    match load_config(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration: {e}");
            None
        }
    }
}
