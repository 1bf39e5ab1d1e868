//! Export coordinator - main orchestrator for the export process
//!
//! This module runs one export: resolve the watermark, fetch the activity
//! list, filter it, then download each remaining activity in order.

use crate::adapters::garmin::FitnessService;
use crate::config::schema::{ExportConfig, ExportMode};
use crate::core::export::downloader::{self, ExportTarget};
use crate::core::export::summary::{ExportResult, ExportSummary};
use crate::core::naming;
use crate::core::state::Watermark;
use crate::domain::{Activity, ExportFormat, ExporterError, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Parameters of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Format to export
    pub format: ExportFormat,

    /// Number of most recent activities to fetch
    pub count: usize,

    /// Directory the files are written to
    pub output_dir: PathBuf,

    /// Only export activities newer than the watermark
    pub incremental: bool,
}

impl ExportRequest {
    /// Build a request from the `[export]` configuration section
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            format: config.format,
            count: config.count,
            output_dir: PathBuf::from(&config.directory),
            incremental: config.mode == ExportMode::Incremental,
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    client: Arc<dyn FitnessService>,
    request: ExportRequest,
}

impl ExportCoordinator {
    /// Create a new export coordinator around an authenticated client
    pub fn new(client: Arc<dyn FitnessService>, request: ExportRequest) -> Self {
        Self { client, request }
    }

    /// Request this coordinator runs
    pub fn request(&self) -> &ExportRequest {
        &self.request
    }

    /// Execute the export
    ///
    /// Per-activity failures are recorded in the summary and never abort the
    /// run. Errors returned here are fatal: failing to list activities or to
    /// create the output directory.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        let request = &self.request;

        tracing::info!(
            format = %request.format,
            count = request.count,
            directory = %request.output_dir.display(),
            incremental = request.incremental,
            "Starting export process"
        );

        if request.incremental {
            let output_dir = request.output_dir.clone();
            let format = request.format;
            summary.watermark =
                tokio::task::spawn_blocking(move || Watermark::resolve(&output_dir, format))
                    .await
                    .map_err(|e| ExporterError::Export(format!("watermark scan failed: {e}")))?;
            match &summary.watermark {
                Some(watermark) => tracing::info!(
                    format = %request.format,
                    last_exported = %watermark.date,
                    "Loaded watermark - incremental export"
                ),
                None => tracing::info!(
                    format = %request.format,
                    "No existing exports found - exporting all fetched activities"
                ),
            }
        }

        tracing::info!(count = request.count, "Fetching recent activities");
        let activities = self.client.list_recent_activities(0, request.count).await?;

        if activities.is_empty() {
            tracing::info!("No activities found");
            return Ok(self.finish(summary, start_time));
        }

        let activities = match summary.watermark {
            Some(watermark) => {
                let total = activities.len();
                let remaining: Vec<Activity> = activities
                    .into_iter()
                    .filter(|activity| watermark.admits(activity.start_time()))
                    .collect();
                summary.filtered_out = total - remaining.len();
                tracing::info!(
                    filtered_out = summary.filtered_out,
                    remaining = remaining.len(),
                    since = %watermark.date,
                    "Filtered out activities already exported"
                );
                remaining
            }
            None => activities,
        };

        if activities.is_empty() {
            tracing::info!("No new activities to export");
            return Ok(self.finish(summary, start_time));
        }

        tokio::fs::create_dir_all(&request.output_dir)
            .await
            .map_err(|e| {
                ExporterError::Io(format!(
                    "Failed to create output directory {}: {e}",
                    request.output_dir.display()
                ))
            })?;

        let total = activities.len();
        for (index, activity) in activities.into_iter().enumerate() {
            let result = self.export_activity(index + 1, total, &activity).await;
            let name = activity.display_name().to_string();
            summary.record(activity.activity_id, name, result);
        }

        Ok(self.finish(summary, start_time))
    }

    /// Download one activity, converting any error into a failed outcome
    async fn export_activity(&self, position: usize, total: usize, activity: &Activity) -> ExportResult {
        let name = activity.display_name();
        tracing::info!(
            "[{position}/{total}] {name} ({}) - {}",
            activity.type_key(),
            activity.start_time_label()
        );

        let target = ExportTarget::new(
            &self.request.output_dir,
            &activity.date_string(),
            &naming::sanitize(name),
            &activity.activity_id,
        );

        match downloader::download(
            self.client.as_ref(),
            self.request.format,
            &activity.activity_id,
            &target,
        )
        .await
        {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::info!(
                    activity_id = %activity.activity_id,
                    path = %path.display(),
                    "Saved {file_name}"
                );
                ExportResult::Succeeded(path)
            }
            Err(e) => {
                tracing::warn!(
                    activity_id = %activity.activity_id,
                    error = %e,
                    "Failed to download activity {}: {e}",
                    activity.activity_id
                );
                ExportResult::Failed(e.to_string())
            }
        }
    }

    fn finish(&self, summary: ExportSummary, start_time: Instant) -> ExportSummary {
        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }
}
