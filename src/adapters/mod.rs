//! External system integrations for depscreen.
//!
//! - [`filesystem`] - Directory scanning and record storage on local disk
//!
//! # Filesystem Adapter
//!
//! ```rust,no_run
//! use depscreen::adapters::filesystem::{scan_directory, HTML_EXTENSION};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let documents = scan_directory(Path::new("data/html"), HTML_EXTENSION).await?;
//! println!("Found {} documents", documents.len());
//! # Ok(())
//! # }
//! ```

pub mod filesystem;
