//! Fitness-service client trait
//!
//! The export pipeline only needs a small slice of the Garmin Connect API.
//! This trait captures that slice so the pipeline can run against the real
//! HTTP client or an in-memory fake in tests.

use crate::domain::{Activity, ActivityId, DownloadFormat, Result};
use async_trait::async_trait;
use std::path::Path;

/// Operations the exporter needs from the fitness service
///
/// # Example
///
/// ```no_run
/// use garmin_export::adapters::garmin::{FitnessService, GarminConnectClient};
/// use garmin_export::config::GarminConfig;
/// use garmin_export::domain::DownloadFormat;
///
/// # async fn example() -> garmin_export::domain::Result<()> {
/// let mut client = GarminConnectClient::new(GarminConfig::default())?;
/// client.login(None).await?;
///
/// let activities = client.list_recent_activities(0, 5).await?;
/// for activity in &activities {
///     let gpx = client
///         .download_activity(&activity.activity_id, DownloadFormat::Gpx)
///         .await?;
///     println!("{}: {} bytes", activity.display_name(), gpx.len());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait FitnessService: Send + Sync {
    /// Establish an authenticated session
    ///
    /// With `tokenstore = None` a fresh credential login is performed. With a
    /// tokenstore directory, cached tokens are loaded from it when present and
    /// the resulting session is written back to it.
    ///
    /// # Errors
    ///
    /// Authentication or connection failures. These abort the run.
    async fn login(&mut self, tokenstore: Option<&Path>) -> Result<()>;

    /// Whether a session is established
    fn is_authenticated(&self) -> bool;

    /// Most recent activities, newest first
    ///
    /// # Arguments
    ///
    /// * `start` - Offset into the activity list
    /// * `limit` - Maximum number of activities to return
    async fn list_recent_activities(&self, start: usize, limit: usize) -> Result<Vec<Activity>>;

    /// Raw bytes of an activity in the requested encoding
    async fn download_activity(
        &self,
        activity_id: &ActivityId,
        format: DownloadFormat,
    ) -> Result<Vec<u8>>;

    /// Activity details (charts, polyline, metrics)
    async fn get_activity_details(&self, activity_id: &ActivityId) -> Result<serde_json::Value>;

    /// Full activity record
    async fn get_activity(&self, activity_id: &ActivityId) -> Result<serde_json::Value>;
}
