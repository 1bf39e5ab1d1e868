//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::core::state::Watermark;
use crate::domain::ActivityId;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one activity's download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    /// Primary artifact written to this path
    Succeeded(PathBuf),

    /// Download failed with this message
    Failed(String),
}

impl ExportResult {
    /// Whether the download succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// One dispatched activity and what happened to it
#[derive(Debug, Clone)]
pub struct ActivityExport {
    /// Activity ID
    pub activity_id: ActivityId,

    /// Display name at the time of export
    pub name: String,

    /// Outcome
    pub result: ExportResult,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Activities dispatched to the downloader
    pub attempted: usize,

    /// Activities whose download succeeded
    pub succeeded: usize,

    /// Activities whose download failed
    pub failed: usize,

    /// Activities dropped by the incremental filter
    pub filtered_out: usize,

    /// Watermark used for filtering, if any
    pub watermark: Option<Watermark>,

    /// Per-activity outcomes in dispatch order
    pub outcomes: Vec<ActivityExport>,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            attempted: 0,
            succeeded: 0,
            failed: 0,
            filtered_out: 0,
            watermark: None,
            outcomes: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome of one dispatched activity
    pub fn record(&mut self, activity_id: ActivityId, name: String, result: ExportResult) {
        self.attempted += 1;
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(ActivityExport {
            activity_id,
            name,
            result,
        });
    }

    /// Check if the export was successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 100.0;
        }
        (self.succeeded as f64 / self.attempted as f64) * 100.0
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &ActivityExport> {
        self.outcomes.iter().filter(|o| !o.result.is_success())
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            attempted = self.attempted,
            succeeded = self.succeeded,
            failed = self.failed,
            filtered_out = self.filtered_out,
            watermark = ?self.watermark.map(|w| w.date),
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export completed"
        );

        if self.failed > 0 {
            tracing::warn!(failed = self.failed, "Export completed with errors");
            for outcome in self.failures() {
                if let ExportResult::Failed(message) = &outcome.result {
                    tracing::warn!(
                        activity_id = %outcome.activity_id,
                        name = %outcome.name,
                        error = %message,
                        "Activity export failed"
                    );
                }
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
