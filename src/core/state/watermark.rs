//! Watermark resolution from the output directory
//!
//! The watermark is the newest export date already on disk for one format.
//! It is recomputed from the directory listing on every run and never stored
//! anywhere else.

use crate::core::naming::decode_date;
use crate::domain::ExportFormat;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fs;
use std::path::Path;

/// Newest export date present for a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watermark {
    /// Format the watermark was resolved for
    pub format: ExportFormat,

    /// Date of the newest exported activity
    pub date: NaiveDate,
}

impl Watermark {
    /// Resolve the watermark for `format` in `directory`
    ///
    /// Returns `None` when no exported file for the format is found.
    pub fn resolve(directory: &Path, format: ExportFormat) -> Option<Self> {
        resolve(directory, &format.dotted_extension()).map(|date| Self { format, date })
    }

    /// Midnight at the start of the watermark date
    ///
    /// Activities must start strictly after this instant to be exported.
    pub fn cutoff(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    /// Whether an activity starting at `start` is newer than the watermark
    ///
    /// Activities without a usable start time count as starting at the Unix
    /// epoch, so they never pass the check.
    pub fn admits(&self, start: Option<NaiveDateTime>) -> bool {
        start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH.naive_utc()) > self.cutoff()
    }
}

/// Newest decodable date among files in `directory` ending with `extension`
///
/// Shallow listing only. Files whose names don't decode are skipped silently,
/// and a missing or unreadable directory yields `None`.
pub fn resolve(directory: &Path, extension: &str) -> Option<NaiveDate> {
    matching_files(directory, extension)
        .iter()
        .filter_map(|name| decode_date(name))
        .max()
}

/// Names of the regular files in `directory` ending with `extension`
pub fn matching_files(directory: &Path, extension: &str) -> Vec<String> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(
                directory = %directory.display(),
                error = %e,
                "Output directory not readable, no watermark"
            );
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(extension))
        .collect()
}
