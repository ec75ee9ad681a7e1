//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for depscreen using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// depscreen - Depression screening quality measure engine
#[derive(Parser, Debug)]
#[command(name = "depscreen")]
#[command(version, about, long_about = None)]
#[command(author = "depscreen Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "depscreen.toml", env = "DEPSCREEN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DEPSCREEN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Structure rendered HTML documents into JSON patient records
    Convert(commands::convert::ConvertArgs),

    /// Classify patients and report measure populations
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
