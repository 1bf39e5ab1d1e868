//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the garmin-export configuration file.

use crate::config::{load_config, ExporterConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after applying environment overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        for line in summary_lines(&config) {
            println!("  {line}");
        }
        println!();
        Ok(0)
    }
}

/// Human-readable summary with secrets redacted
fn summary_lines(config: &ExporterConfig) -> Vec<String> {
    let password = if config.garmin.password.is_some() {
        "********"
    } else {
        "(not set)"
    };

    vec![
        format!("Log Level: {}", config.application.log_level),
        format!(
            "Username: {}",
            config.garmin.username.as_deref().unwrap_or("(not set)")
        ),
        format!("Password: {password}"),
        format!("Tokenstore: {}", config.garmin.tokenstore_path().display()),
        format!("Domain: {}", config.garmin.domain),
        format!("Export Format: {}", config.export.format),
        format!("Export Count: {}", config.export.count),
        format!("Export Directory: {}", config.export.directory),
        format!("Export Mode: {}", config.export.mode),
        format!(
            "File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        ),
    ]
}
