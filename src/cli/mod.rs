//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for garmin-export using clap.

pub mod commands;

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};

/// garmin-export - download Garmin Connect activities to local files
#[derive(Parser, Debug)]
#[command(name = "garmin-export")]
#[command(version, about, long_about = None)]
#[command(author = "garmin-export contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "GARMIN_EXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download recent activities into the output directory
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show exported files and watermarks per format
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
