//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use crate::domain::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Export mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Only activities newer than the newest file already on disk
    #[default]
    Incremental,
    /// Every fetched activity
    Full,
}

impl ExportMode {
    /// Lowercase name as used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incremental => "incremental",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incremental" => Ok(Self::Incremental),
            "full" => Ok(Self::Full),
            _ => Err(format!(
                "Invalid export mode '{s}'. Must be one of: incremental, full"
            )),
        }
    }
}

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Garmin Connect account and session settings
    #[serde(default)]
    pub garmin: GarminConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.garmin.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Garmin Connect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminConfig {
    /// Account email
    #[serde(default)]
    pub username: Option<String>,

    /// Account password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Directory holding cached OAuth tokens (`~` is expanded)
    #[serde(default = "default_tokenstore")]
    pub tokenstore: String,

    /// Service domain (`garmin.com`, or `garmin.cn` for China accounts)
    #[serde(default = "default_domain")]
    pub domain: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GarminConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tokenstore.trim().is_empty() {
            return Err("garmin.tokenstore cannot be empty".to_string());
        }

        if self.domain.trim().is_empty() {
            return Err("garmin.domain cannot be empty".to_string());
        }

        if self.domain.contains("://") || self.domain.contains('/') {
            return Err(format!(
                "garmin.domain must be a bare domain such as 'garmin.com', got '{}'",
                self.domain
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("garmin.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }

    /// Tokenstore directory with a leading `~` expanded to the home directory
    pub fn tokenstore_path(&self) -> PathBuf {
        expand_home(&self.tokenstore)
    }
}

impl Default for GarminConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            tokenstore: default_tokenstore(),
            domain: default_domain(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Export format (gpx, tcx, fit, json)
    #[serde(default)]
    pub format: ExportFormat,

    /// Number of most recent activities to fetch
    #[serde(default = "default_count")]
    pub count: usize,

    /// Output directory
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Export mode (incremental or full)
    #[serde(default)]
    pub mode: ExportMode,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("export.count must be >= 1".to_string());
        }

        if self.directory.trim().is_empty() {
            return Err("export.directory cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            count: default_count(),
            directory: default_directory(),
            mode: ExportMode::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging next to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Expand a leading `~` using `HOME` (or `USERPROFILE` on Windows)
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(path),
    };

    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    match home {
        Some(home) => {
            let mut expanded = PathBuf::from(home);
            let rest = rest.trim_start_matches(['/', '\\']);
            if !rest.is_empty() {
                expanded.push(rest);
            }
            expanded
        }
        None => PathBuf::from(path),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tokenstore() -> String {
    "~/.garminconnect".to_string()
}

fn default_domain() -> String {
    "garmin.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_count() -> usize {
    10
}

fn default_directory() -> String {
    "./garmin_exports".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
