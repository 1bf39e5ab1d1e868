//! Export command implementation
//!
//! This module implements the `export` command: sign in to Garmin Connect and
//! download recent activities into the output directory.

use crate::adapters::garmin::{establish_session, GarminConnectClient};
use crate::config::{load_config_or_default, secret_string, ExportMode, ExporterConfig};
use crate::core::export::{ExportCoordinator, ExportRequest, ExportResult, ExportSummary};
use crate::domain::{ExportFormat, ExporterError};
use clap::Args;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Number of most recent activities to fetch
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output directory
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Only export activities newer than the last exported file (default)
    #[arg(long)]
    pub since_last: bool,

    /// Export every fetched activity, ignoring files already on disk.
    /// Takes precedence over `--since-last`.
    #[arg(long)]
    pub all: bool,

    /// Garmin Connect username (email)
    #[arg(long)]
    pub username: Option<String>,

    /// Garmin Connect password
    #[arg(long)]
    pub password: Option<String>,

    /// Directory holding cached session tokens
    #[arg(long)]
    pub tokenstore: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let tokenstore = config.garmin.tokenstore_path();
        let mut client = match GarminConnectClient::new(config.garmin.clone()) {
            Ok(c) => c.with_mfa_prompt(prompt_mfa_code),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Garmin Connect client");
                eprintln!("Failed to initialize Garmin Connect client: {e}");
                return Ok(5);
            }
        };

        println!("🔐 Authenticating with Garmin Connect...");
        if let Err(e) = establish_session(&mut client, &config.garmin).await {
            return Ok(report_fatal(&e, &tokenstore));
        }
        println!("✅ Authenticated");

        let request = ExportRequest::from_config(&config.export);
        println!();
        println!("Export Configuration:");
        println!("  Format: {}", request.format);
        println!("  Count: {}", request.count);
        println!("  Directory: {}", request.output_dir.display());
        println!("  Mode: {}", config.export.mode);
        println!();

        let coordinator = ExportCoordinator::new(Arc::new(client), request);
        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => return Ok(report_fatal(&e, &tokenstore)),
        };

        print_summary(&summary);

        let exit_code = if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1
        };

        Ok(exit_code)
    }

    /// Apply command-line overrides on top of file and environment settings
    pub fn apply_overrides(&self, config: &mut ExporterConfig) {
        if let Some(count) = self.count {
            tracing::info!(count, "Overriding activity count from CLI");
            config.export.count = count;
        }

        if let Some(format) = self.format {
            tracing::info!(format = %format, "Overriding export format from CLI");
            config.export.format = format;
        }

        if let Some(directory) = &self.directory {
            tracing::info!(directory = %directory, "Overriding output directory from CLI");
            config.export.directory = directory.clone();
        }

        if self.all {
            config.export.mode = ExportMode::Full;
        } else if self.since_last {
            config.export.mode = ExportMode::Incremental;
        }

        if let Some(username) = &self.username {
            config.garmin.username = Some(username.clone());
        }

        if let Some(password) = &self.password {
            config.garmin.password = Some(secret_string(password.clone()));
        }

        if let Some(tokenstore) = &self.tokenstore {
            config.garmin.tokenstore = tokenstore.clone();
        }
    }
}

/// Read an MFA code from the terminal
fn prompt_mfa_code() -> crate::domain::Result<String> {
    print!("Enter MFA code: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Print the error that stopped the run and return its exit code
fn report_fatal(error: &ExporterError, tokenstore: &Path) -> i32 {
    tracing::error!(error = %error, "Export aborted");

    match error {
        ExporterError::Configuration(_) => {
            eprintln!("❌ Configuration error: {error}");
            2
        }
        e if e.is_authentication() => {
            eprintln!("❌ Authentication failed: {error}");
            eprintln!();
            eprintln!("Troubleshooting:");
            eprintln!("  - Check that your username and password are correct");
            eprintln!("  - If your account uses MFA, run the command again and enter the code");
            eprintln!(
                "  - Delete the cached session and sign in again: {}",
                tokenstore.display()
            );
            4
        }
        e if e.is_fatal_for_run() => {
            eprintln!("❌ Could not reach Garmin Connect: {error}");
            eprintln!("   Check your network connection and try again.");
            4
        }
        _ => {
            eprintln!("❌ Export failed: {error}");
            5
        }
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Attempted: {}", summary.attempted);
    println!("  Successful: {}", summary.succeeded);
    println!("  Failed: {}", summary.failed);
    println!("  Already exported: {}", summary.filtered_out);
    if let Some(watermark) = &summary.watermark {
        println!("  Watermark: {}", watermark.date);
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if summary.failed > 0 {
        println!("⚠️  Failed activities:");
        for failure in summary.failures() {
            if let ExportResult::Failed(message) = &failure.result {
                println!("  - {} ({}): {}", failure.name, failure.activity_id, message);
            }
        }
        println!();
    }
}
