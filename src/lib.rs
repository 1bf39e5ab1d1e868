// garmin-export - Garmin Connect activity exporter
// Copyright (c) 2025 garmin-export Contributors
// Licensed under the MIT License

//! # garmin-export
//!
//! Downloads recent activities from Garmin Connect and writes them to a local
//! directory as GPX, TCX, FIT or JSON files.
//!
//! ## Overview
//!
//! This library provides:
//! - **Signing in** to Garmin Connect with a cached OAuth session
//! - **Downloading** activities in one of four formats
//! - **Incremental export** driven by the dates encoded in existing filenames
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export pipeline, filename codec and watermark resolution
//! - [`adapters`] - Garmin Connect client and session handling
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use garmin_export::adapters::garmin::{establish_session, GarminConnectClient};
//! use garmin_export::config::load_config;
//! use garmin_export::core::export::{ExportCoordinator, ExportRequest};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("garmin-export.toml")?;
//!
//!     let mut client = GarminConnectClient::new(config.garmin.clone())?;
//!     establish_session(&mut client, &config.garmin).await?;
//!
//!     let request = ExportRequest::from_config(&config.export);
//!     let coordinator = ExportCoordinator::new(Arc::new(client), request);
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} of {} activities", summary.succeeded, summary.attempted);
//!     Ok(())
//! }
//! ```
//!
//! ## Incremental Export
//!
//! Exported files are named `{YYYY-MM-DD}_{name}_{id}.{ext}`. In incremental
//! mode the newest date among files of the requested format becomes the
//! watermark, and activities that started before that day are skipped.
//!
//! ```rust
//! use garmin_export::core::naming;
//!
//! let file = naming::encode("2024-03-15", "Morning Run", "12345", "fit");
//! assert_eq!(file, "2024-03-15_Morning Run_12345.fit");
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`], whose error type is
//! [`domain::ExporterError`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
