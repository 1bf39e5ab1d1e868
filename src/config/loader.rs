//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ExportMode, ExporterConfig};
use super::secret::secret_string;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use crate::domain::ExportFormat;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "garmin-export.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (GARMIN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File does not exist or cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use garmin_export::config::loader::load_config;
///
/// let config = load_config("garmin-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// A `.env` file plus environment variables are enough to run without any
/// TOML file. Overrides and validation still apply.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults and environment"
    );
    let mut config = ExporterConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut ExporterConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExporterError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the GARMIN_* prefix
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Applies overrides from `lookup`, which maps a variable name to its value
fn apply_overrides<F>(config: &mut ExporterConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    // Application overrides
    if let Some(val) = lookup("GARMIN_LOG_LEVEL") {
        config.application.log_level = val.to_lowercase();
    }

    // Garmin overrides
    if let Some(val) = lookup("GARMIN_USERNAME") {
        config.garmin.username = Some(val);
    }
    if let Some(val) = lookup("GARMIN_PASSWORD") {
        config.garmin.password = Some(secret_string(val));
    }
    if let Some(val) = lookup("GARMIN_TOKENSTORE") {
        config.garmin.tokenstore = val;
    }

    // Export overrides
    if let Some(val) = lookup("GARMIN_OUTPUT_DIR") {
        config.export.directory = val;
    }
    if let Some(val) = lookup("GARMIN_EXPORT_FORMAT") {
        config.export.format = val
            .parse::<ExportFormat>()
            .map_err(|e| ExporterError::Configuration(format!("GARMIN_EXPORT_FORMAT: {e}")))?;
    }
    if let Some(val) = lookup("GARMIN_EXPORT_COUNT") {
        config.export.count = val.trim().parse().map_err(|_| {
            ExporterError::Configuration(format!(
                "GARMIN_EXPORT_COUNT must be a positive integer, got '{val}'"
            ))
        })?;
    }
    if let Some(val) = lookup("GARMIN_EXPORT_MODE") {
        config.export.mode = val
            .parse::<ExportMode>()
            .map_err(|e| ExporterError::Configuration(format!("GARMIN_EXPORT_MODE: {e}")))?;
    }

    Ok(())
}
