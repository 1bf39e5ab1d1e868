//! Export state derived from the output directory
//!
//! There is no manifest: the files in the output directory are the record of
//! what has been exported. This module reads that record back.

pub mod watermark;

pub use watermark::{resolve, Watermark};

use crate::domain::ExportFormat;
use chrono::NaiveDate;
use std::path::Path;

/// Per-format snapshot of an output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatStatus {
    /// Export format
    pub format: ExportFormat,

    /// Number of files with the format's extension
    pub file_count: usize,

    /// Newest decodable export date
    pub watermark: Option<NaiveDate>,
}

/// Scan `directory` once per export format
pub fn directory_status(directory: &Path) -> Vec<FormatStatus> {
    ExportFormat::ALL
        .iter()
        .map(|format| {
            let extension = format.dotted_extension();
            FormatStatus {
                format: *format,
                file_count: watermark::matching_files(directory, &extension).len(),
                watermark: resolve(directory, &extension),
            }
        })
        .collect()
}
