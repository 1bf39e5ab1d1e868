//! Activity summary as returned by the activity list endpoint
//!
//! Only the handful of fields the exporter reads are modeled; everything else
//! in the Garmin payload is ignored during deserialization.

use super::ids::ActivityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format of `startTimeLocal`
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Name used when an activity carries no display name
pub const UNNAMED_ACTIVITY: &str = "Unnamed Activity";

/// Date segment used in filenames when the start time cannot be parsed
pub const UNKNOWN_DATE: &str = "unknown_date";

/// Activity type tag (e.g. `running`, `cycling`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    /// Machine-readable type key
    pub type_key: String,
}

/// Read-only view of one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity identifier
    pub activity_id: ActivityId,

    /// Display name given by the user or device
    #[serde(default)]
    pub activity_name: Option<String>,

    /// Type tag
    #[serde(default)]
    pub activity_type: Option<ActivityType>,

    /// Local start time, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub start_time_local: Option<String>,
}

impl Activity {
    /// Create an activity with only an identifier
    pub fn new(activity_id: ActivityId) -> Self {
        Self {
            activity_id,
            activity_name: None,
            activity_type: None,
            start_time_local: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.activity_name = Some(name.into());
        self
    }

    /// Set the type key
    pub fn with_type(mut self, type_key: impl Into<String>) -> Self {
        self.activity_type = Some(ActivityType {
            type_key: type_key.into(),
        });
        self
    }

    /// Set the local start time
    pub fn with_start_time(mut self, start_time_local: impl Into<String>) -> Self {
        self.start_time_local = Some(start_time_local.into());
        self
    }

    /// Display name, falling back to [`UNNAMED_ACTIVITY`]
    pub fn display_name(&self) -> &str {
        self.activity_name.as_deref().unwrap_or(UNNAMED_ACTIVITY)
    }

    /// Type key, falling back to `unknown`
    pub fn type_key(&self) -> &str {
        self.activity_type
            .as_ref()
            .map(|t| t.type_key.as_str())
            .unwrap_or("unknown")
    }

    /// Start time as shown to the user, falling back to `unknown time`
    pub fn start_time_label(&self) -> &str {
        self.start_time_local.as_deref().unwrap_or("unknown time")
    }

    /// Parsed local start time, if present and well formed
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time_local
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, START_TIME_FORMAT).ok())
    }

    /// Date segment for filenames: `YYYY-MM-DD` or [`UNKNOWN_DATE`]
    pub fn date_string(&self) -> String {
        self.start_time()
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string())
    }
}
