//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

const SAMPLE_CONFIG: &str = r#"# garmin-export configuration
#
# Values may reference environment variables as ${VAR}. GARMIN_* variables
# (and a .env file) override what is set here.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[garmin]
# Only needed until a session has been cached in the tokenstore
# username = "${GARMIN_USERNAME}"
# password = "${GARMIN_PASSWORD}"

# Directory holding cached OAuth tokens
tokenstore = "~/.garminconnect"

# Use "garmin.cn" for accounts in mainland China
domain = "garmin.com"
timeout_seconds = 30

[export]
# gpx | tcx | fit | json
format = "fit"

# Number of most recent activities to fetch
count = 10

directory = "./garmin_exports"

# incremental: skip activities older than the newest exported file
# full: export everything that is fetched
mode = "incremental"

[logging]
# JSON log files next to console output
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing garmin-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set GARMIN_USERNAME and GARMIN_PASSWORD (or use a .env file)");
                println!("  3. Validate configuration: garmin-export validate-config");
                println!("  4. Run export: garmin-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
