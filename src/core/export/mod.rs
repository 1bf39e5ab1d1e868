//! Export orchestration and per-format downloads
//!
//! This module provides the core export logic, including:
//! - Per-format download strategies
//! - Original-upload archive unpacking
//! - Export coordination and orchestration
//! - Summary and reporting

pub mod archive;
pub mod coordinator;
pub mod downloader;
pub mod summary;

pub use coordinator::{ExportCoordinator, ExportRequest};
pub use downloader::ExportTarget;
pub use summary::{ActivityExport, ExportResult, ExportSummary};
