// depscreen - Depression Screening Quality Measure Engine
// Copyright (c) 2025 depscreen Contributors
// Licensed under the MIT License

//! # depscreen - Depression Screening Quality Measure Engine
//!
//! depscreen turns rendered clinical summary documents into structured
//! patient records and classifies each patient against the "Screening for
//! Depression and Follow-Up Plan" quality measure.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Structuring** HTML summaries into typed [`domain::PatientRecord`]s
//! - **Denominator** determination from age at first encounter and
//!   qualifying procedure codes
//! - **Numerator** assignment of exactly one outcome code per eligible patient
//! - **Reporting** population and outcome counts as console output or XML
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (extract, structure, measure, pipeline, report)
//! - [`adapters`] - Local filesystem access
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use depscreen::config::load_config;
//! use depscreen::core::pipeline::{BatchConfig, PipelineCoordinator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("depscreen.toml")?;
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     let coordinator = PipelineCoordinator::new(BatchConfig::from_config(&config), shutdown_rx);
//!     let summary = coordinator.evaluate_documents(&config.input.html_dir).await?;
//!
//!     println!("Eligible: {}", summary.eligible_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Single Patient
//!
//! ```rust,no_run
//! use depscreen::core::measure::{evaluate_patient, Evaluation};
//! use depscreen::core::structure::{structure_document, SectionMarkers};
//!
//! # fn example(html: &str) -> Result<(), depscreen::domain::MeasureError> {
//! let record = structure_document(html, &SectionMarkers::default())?;
//! match evaluate_patient(record)? {
//!     Evaluation::Eligible { outcome, .. } => println!("Outcome: {outcome}"),
//!     Evaluation::Ineligible { .. } => println!("Not in the denominator"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`], carrying a
//! [`domain::MeasureError`]. Missing or malformed patient data is reported as
//! a per-document error and never aborts a batch.
//!
//! ## Logging
//!
//! depscreen uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(document_id = "patient-001", "Processing document");
//! warn!(section = "medication", "Section not found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
