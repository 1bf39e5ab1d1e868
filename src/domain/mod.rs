//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`ActivityId`])
//! - **Models** ([`Activity`], [`ExportFormat`], [`DownloadFormat`])
//! - **Error types** ([`ExporterError`], [`GarminError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExporterError>`]:
//!
//! ```rust
//! use garmin_export::domain::{ExportFormat, ExporterError, Result};
//! use std::str::FromStr;
//!
//! fn parse_format(s: &str) -> Result<ExportFormat> {
//!     ExportFormat::from_str(s).map_err(ExporterError::Configuration)
//! }
//!
//! assert!(parse_format("gpx").is_ok());
//! assert!(parse_format("kml").is_err());
//! ```

pub mod activity;
pub mod errors;
pub mod format;
pub mod ids;
pub mod result;

pub use activity::{Activity, ActivityType, UNKNOWN_DATE, UNNAMED_ACTIVITY};
pub use errors::{ExporterError, GarminError};
pub use format::{DownloadFormat, ExportFormat};
pub use ids::ActivityId;
pub use result::Result;
