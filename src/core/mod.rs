//! Core business logic for the exporter.
//!
//! # Modules
//!
//! - [`naming`] - Canonical filename encoding and date decoding
//! - [`state`] - Watermarks recovered from the output directory
//! - [`export`] - Per-format downloads and export coordination
//!
//! # Export Workflow
//!
//! 1. **Resolve Watermark**: Newest exported date for the format (incremental mode only)
//! 2. **List Activities**: Fetch the N most recent activities
//! 3. **Filter**: Drop activities that started at or before midnight of the watermark date
//! 4. **Download**: Write each activity in the requested format, one at a time
//! 5. **Report**: Generate export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use garmin_export::adapters::garmin::{establish_session, GarminConnectClient};
//! use garmin_export::config::load_config;
//! use garmin_export::core::export::{ExportCoordinator, ExportRequest};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("garmin-export.toml")?;
//!
//! let mut client = GarminConnectClient::new(config.garmin.clone())?;
//! establish_session(&mut client, &config.garmin).await?;
//!
//! let coordinator = ExportCoordinator::new(
//!     Arc::new(client),
//!     ExportRequest::from_config(&config.export),
//! );
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Succeeded: {}/{}", summary.succeeded, summary.attempted);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod naming;
pub mod state;
