//! Batch orchestration
//!
//! This module drives the structurer and the measure determiners over
//! whole directories of documents.
//!
//! # Workflow
//!
//! 1. **Scan**: list `*.html` or `*.json` files, sorted by name
//! 2. **Process**: read, structure, and classify each document on the
//!    blocking pool, `parallel_documents` at a time
//! 3. **Aggregate**: fold outcomes into a [`ProcessingSummary`]
//!
//! # Example
//!
//! ```rust,no_run
//! use depscreen::core::pipeline::{BatchConfig, PipelineCoordinator};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = PipelineCoordinator::new(BatchConfig::default(), shutdown_rx);
//!
//! let summary = coordinator.evaluate_records(Path::new("data/json")).await?;
//! println!("Eligible: {}", summary.eligible_count());
//! println!("Ineligible: {}", summary.ineligible_count());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod coordinator;
pub mod summary;

pub use batch::BatchConfig;
pub use coordinator::PipelineCoordinator;
pub use summary::ProcessingSummary;
