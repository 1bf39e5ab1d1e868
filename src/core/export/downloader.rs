//! Per-format download strategies
//!
//! Each [`ExportFormat`] writes one activity's artifact(s) into the output
//! directory under the canonical name. Errors are returned to the caller,
//! which records them against the activity and moves on.

use super::archive::{unpack_original, Unpacked};
use crate::adapters::garmin::FitnessService;
use crate::core::naming;
use crate::domain::{ActivityId, DownloadFormat, ExportFormat, ExporterError, Result};
use std::path::{Path, PathBuf};

/// Where one activity's artifacts are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    output_dir: PathBuf,
    stem: String,
}

impl ExportTarget {
    /// Build the target from already-derived filename parts
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Directory the files are written to
    /// * `date` - `YYYY-MM-DD` or the unknown-date sentinel
    /// * `sanitized_name` - Output of [`naming::sanitize`]
    /// * `activity_id` - Activity identifier
    pub fn new(
        output_dir: impl Into<PathBuf>,
        date: &str,
        sanitized_name: &str,
        activity_id: &ActivityId,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: naming::stem(date, sanitized_name, activity_id.as_str()),
        }
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Canonical filename without extension
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Canonical path for an extension
    pub fn path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{extension}", self.stem))
    }

    /// Path of the secondary full-record JSON file
    pub fn full_json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_full.json", self.stem))
    }
}

/// Download one activity in one format
///
/// Returns the path of the primary artifact written.
pub async fn download(
    client: &dyn FitnessService,
    format: ExportFormat,
    activity_id: &ActivityId,
    target: &ExportTarget,
) -> Result<PathBuf> {
    match format {
        ExportFormat::Gpx => download_gpx(client, activity_id, target).await,
        ExportFormat::Tcx => download_tcx(client, activity_id, target).await,
        ExportFormat::Fit => download_fit(client, activity_id, target).await,
        ExportFormat::Json => download_json(client, activity_id, target).await,
    }
}

/// Raw track, bytes written verbatim
async fn download_gpx(
    client: &dyn FitnessService,
    activity_id: &ActivityId,
    target: &ExportTarget,
) -> Result<PathBuf> {
    let path = target.path(ExportFormat::Gpx.extension());
    let data = client
        .download_activity(activity_id, DownloadFormat::Gpx)
        .await?;
    tokio::fs::write(&path, data).await?;
    Ok(path)
}

/// Structured track, must be valid UTF-8
async fn download_tcx(
    client: &dyn FitnessService,
    activity_id: &ActivityId,
    target: &ExportTarget,
) -> Result<PathBuf> {
    let path = target.path(ExportFormat::Tcx.extension());
    let data = client
        .download_activity(activity_id, DownloadFormat::Tcx)
        .await?;
    let text = String::from_utf8(data)?;
    tokio::fs::write(&path, text).await?;
    Ok(path)
}

/// Original upload, unpacked when it arrives zipped
async fn download_fit(
    client: &dyn FitnessService,
    activity_id: &ActivityId,
    target: &ExportTarget,
) -> Result<PathBuf> {
    let archive_path = target.path("zip");
    let final_path = target.path(ExportFormat::Fit.extension());

    let data = client
        .download_activity(activity_id, DownloadFormat::Original)
        .await?;
    tokio::fs::write(&archive_path, data).await?;

    let unpacked = {
        let archive_path = archive_path.clone();
        let final_path = final_path.clone();
        tokio::task::spawn_blocking(move || unpack_original(&archive_path, &final_path))
            .await
            .map_err(|e| ExporterError::Export(format!("archive task failed: {e}")))??
    };

    match unpacked {
        Unpacked::Extracted { entry_name } => {
            tracing::debug!(
                activity_id = %activity_id,
                entry = %entry_name,
                "Extracted FIT file from archive"
            );
        }
        Unpacked::Renamed => {
            tracing::debug!(
                activity_id = %activity_id,
                "Original upload was not zipped, saved as-is"
            );
        }
    }

    Ok(final_path)
}

/// Details and full record, pretty-printed
async fn download_json(
    client: &dyn FitnessService,
    activity_id: &ActivityId,
    target: &ExportTarget,
) -> Result<PathBuf> {
    let path = target.path(ExportFormat::Json.extension());
    let details = client.get_activity_details(activity_id).await?;
    tokio::fs::write(&path, serde_json::to_string_pretty(&details)?).await?;

    let full_path = target.full_json_path();
    let full_activity = client.get_activity(activity_id).await?;
    tokio::fs::write(&full_path, serde_json::to_string_pretty(&full_activity)?).await?;

    Ok(path)
}
