//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use garmin_export::adapters::garmin::FitnessService;
use garmin_export::domain::{
    Activity, ActivityId, DownloadFormat, ExporterError, GarminError, Result,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// In-memory fitness service
///
/// Every download returns the payload registered for the activity, and
/// activities marked as failing answer every request with a server error.
#[derive(Default)]
pub struct FakeService {
    activities: Vec<Activity>,
    payloads: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
    list_error: bool,
    requests: Mutex<Vec<(String, DownloadFormat)>>,
}

impl FakeService {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            ..Self::default()
        }
    }

    pub fn with_payload(mut self, activity_id: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.payloads.insert(activity_id.to_string(), payload.into());
        self
    }

    pub fn with_failure(mut self, activity_id: &str) -> Self {
        self.failing.insert(activity_id.to_string());
        self
    }

    pub fn with_list_error(mut self) -> Self {
        self.list_error = true;
        self
    }

    /// Downloads requested so far, in order
    pub fn requests(&self) -> Vec<(String, DownloadFormat)> {
        self.requests.lock().unwrap().clone()
    }

    fn check(&self, activity_id: &ActivityId) -> Result<()> {
        if self.failing.contains(activity_id.as_str()) {
            return Err(GarminError::ServerError {
                status: 500,
                message: format!("activity {activity_id} unavailable"),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl FitnessService for FakeService {
    async fn login(&mut self, _tokenstore: Option<&Path>) -> Result<()> {
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        true
    }

    async fn list_recent_activities(&self, start: usize, limit: usize) -> Result<Vec<Activity>> {
        if self.list_error {
            return Err(ExporterError::Authentication("session expired".to_string()));
        }
        Ok(self.activities.iter().skip(start).take(limit).cloned().collect())
    }

    async fn download_activity(
        &self,
        activity_id: &ActivityId,
        format: DownloadFormat,
    ) -> Result<Vec<u8>> {
        self.requests
            .lock()
            .unwrap()
            .push((activity_id.to_string(), format));
        self.check(activity_id)?;
        Ok(self
            .payloads
            .get(activity_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn get_activity_details(&self, activity_id: &ActivityId) -> Result<Value> {
        self.check(activity_id)?;
        Ok(json!({ "activityId": activity_id.as_str(), "metricDescriptors": [] }))
    }

    async fn get_activity(&self, activity_id: &ActivityId) -> Result<Value> {
        self.check(activity_id)?;
        Ok(json!({ "activityId": activity_id.as_str(), "summaryDTO": { "distance": 5000.0 } }))
    }
}

pub fn activity(id: u64, name: &str, start: &str) -> Activity {
    Activity::new(ActivityId::from(id))
        .with_name(name)
        .with_type("running")
        .with_start_time(start)
}

/// Zip archive holding the given entries
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Sorted file names in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
