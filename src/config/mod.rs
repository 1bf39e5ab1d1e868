//! Configuration management for the exporter.
//!
//! # Overview
//!
//! Configuration comes from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `GARMIN_*` environment overrides (a `.env` file is loaded at startup)
//! - Default values for every setting
//! - Validation before use
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use garmin_export::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("garmin-export.toml")?;
//!
//! println!("Format: {}", config.export.format);
//! println!("Directory: {}", config.export.directory);
//! println!("Mode: {}", config.export.mode);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`GarminConfig`] - Account credentials, tokenstore, domain, timeout
//! - [`ExportConfig`] - Format, count, output directory, mode
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [garmin]
//! username = "you@example.com"
//! password = "${GARMIN_PASSWORD}"
//! tokenstore = "~/.garminconnect"
//!
//! [export]
//! format = "fit"
//! count = 10
//! directory = "./garmin_exports"
//! mode = "incremental"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, ExportConfig, ExportMode, ExporterConfig, GarminConfig, LoggingConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
