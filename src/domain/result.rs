//! Result type alias for the exporter

use super::errors::ExporterError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use garmin_export::domain::result::Result;
/// use garmin_export::domain::errors::ExporterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExporterError::Configuration("count must be at least 1".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExporterError>;
