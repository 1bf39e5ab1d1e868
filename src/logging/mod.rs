//! Logging setup
//!
//! Console logging is always on. A JSON log file with rotation can be
//! enabled in the `[logging]` section.
//!
//! # Example
//!
//! ```no_run
//! use garmin_export::config::LoggingConfig;
//! use garmin_export::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};
