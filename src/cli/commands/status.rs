//! Status command implementation
//!
//! This module implements the `status` command: count exported files per
//! format in the output directory and show the watermark each would resume
//! from.

use crate::config::load_config_or_default;
use crate::core::state::{directory_status, FormatStatus};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the status command
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Output directory to inspect (defaults to the configured directory)
    #[arg(short, long)]
    pub directory: Option<String>,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        println!("📊 Export Status");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let directory = PathBuf::from(
            self.directory
                .clone()
                .unwrap_or_else(|| config.export.directory.clone()),
        );

        if !directory.is_dir() {
            println!("No export directory found at {}", directory.display());
            println!("Run 'garmin-export export' to start exporting activities.");
            return Ok(0);
        }

        println!("Directory: {}", directory.display());
        println!();
        for line in render_table(&directory_status(&directory)) {
            println!("{line}");
        }
        println!();
        Ok(0)
    }
}

fn render_table(statuses: &[FormatStatus]) -> Vec<String> {
    let mut lines = vec![
        format!("{:<8} {:<8} {:<12}", "Format", "Files", "Watermark"),
        "-".repeat(30),
    ];

    for status in statuses {
        let watermark = status
            .watermark
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "None".to_string());
        lines.push(format!(
            "{:<8} {:<8} {:<12}",
            status.format.as_str(),
            status.file_count,
            watermark
        ));
    }

    lines
}
