//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output for interactive runs
//! - Configurable log levels
//! - JSON-formatted local log files with rotation
//!
//! # Example
//!
//! ```no_run
//! use depscreen::logging::init_logging;
//! use depscreen::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of work on a single document
///
/// # Example
///
/// ```no_run
/// use depscreen::log_document_start;
///
/// log_document_start!("patient-001", "data/html/patient-001.html");
/// ```
#[macro_export]
macro_rules! log_document_start {
    ($document_id:expr, $path:expr) => {
        tracing::debug!(
            document_id = %$document_id,
            path = %$path,
            "Processing document"
        );
    };
}

/// Log a document that could not be converted or evaluated
///
/// # Example
///
/// ```no_run
/// use depscreen::log_document_failure;
/// use depscreen::domain::ProcessingStage;
///
/// log_document_failure!("patient-001", ProcessingStage::Parse, "empty document");
/// ```
#[macro_export]
macro_rules! log_document_failure {
    ($document_id:expr, $stage:expr, $message:expr) => {
        tracing::warn!(
            document_id = %$document_id,
            stage = ?$stage,
            error = %$message,
            "Document failed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use depscreen::log_error_with_context;
/// use depscreen::domain::MeasureError;
///
/// let error = MeasureError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
