//! Domain identifier types
//!
//! Garmin Connect hands out activity identifiers as JSON integers, while some
//! endpoints and cached payloads carry them as strings. [`ActivityId`] accepts
//! both and always renders as the decimal text used in filenames and URLs.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Activity identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use garmin_export::domain::ids::ActivityId;
/// use std::str::FromStr;
///
/// let id = ActivityId::from_str("12345678901").unwrap();
/// assert_eq!(id.as_str(), "12345678901");
///
/// let from_json: ActivityId = serde_json::from_str("12345678901").unwrap();
/// assert_eq!(from_json, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityId(String);

impl ActivityId {
    /// Creates a new ActivityId from a string
    ///
    /// Returns `Err` if the identifier is empty or contains characters that
    /// cannot appear in a filename segment.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Activity ID cannot be empty".to_string());
        }
        if trimmed.contains(['/', '\\', '.']) {
            return Err(format!("Invalid activity ID: {trimmed}"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the activity ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActivityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ActivityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ActivityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for ActivityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.parse::<u64>() {
            Ok(numeric) => serializer.serialize_u64(numeric),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(ActivityId::from(n)),
            RawId::Text(s) => ActivityId::new(s).map_err(de::Error::custom),
        }
    }
}
