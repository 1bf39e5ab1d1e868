//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! Third-party error types (HTTP client, archive reader, parsers) are converted
//! into these types at the boundary so callers never match on foreign errors.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Garmin Connect errors
    #[error("Garmin Connect error: {0}")]
    Garmin(#[from] GarminError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Archive extraction errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Downloaded payload could not be decoded as text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ExporterError {
    /// Whether this error means the service session is unusable
    ///
    /// Authentication and connection failures abort a run when they happen
    /// before the activity loop starts (login, listing activities).
    pub fn is_fatal_for_run(&self) -> bool {
        match self {
            ExporterError::Authentication(_) | ExporterError::Connection(_) => true,
            ExporterError::Garmin(e) => e.is_authentication() || e.is_connection(),
            _ => false,
        }
    }

    /// Whether this error is an authentication failure
    pub fn is_authentication(&self) -> bool {
        match self {
            ExporterError::Authentication(_) => true,
            ExporterError::Garmin(e) => e.is_authentication(),
            _ => false,
        }
    }
}

/// Garmin Connect errors
///
/// Errors that occur when talking to the Garmin SSO or Connect API.
/// These errors don't expose the HTTP client types.
#[derive(Debug, Error)]
pub enum GarminError {
    /// Failed to reach the service
    #[error("Failed to connect to Garmin Connect: {0}")]
    ConnectionFailed(String),

    /// Credentials or tokens rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Account requires a multi-factor code and none was supplied
    #[error("MFA code required: {0}")]
    MfaRequired(String),

    /// Invalid response from server
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl GarminError {
    /// Whether this error is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            GarminError::AuthenticationFailed(_) | GarminError::MfaRequired(_)
        )
    }

    /// Whether this error is a transport-level failure
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            GarminError::ConnectionFailed(_) | GarminError::Timeout(_)
        )
    }

    /// Map an HTTP status and response body to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => GarminError::AuthenticationFailed(format!("HTTP {status}: {message}")),
            404 => GarminError::NotFound(message),
            429 => GarminError::RateLimitExceeded(message),
            400..=499 => GarminError::ClientError { status, message },
            _ => GarminError::ServerError { status, message },
        }
    }
}

impl From<reqwest::Error> for GarminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GarminError::Timeout(err.to_string())
        } else if err.is_decode() {
            GarminError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            GarminError::from_status(status.as_u16(), err.to_string())
        } else {
            GarminError::ConnectionFailed(err.to_string())
        }
    }
}

impl From<reqwest::Error> for ExporterError {
    fn from(err: reqwest::Error) -> Self {
        ExporterError::Garmin(err.into())
    }
}

impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        ExporterError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ExporterError {
    fn from(err: toml::de::Error) -> Self {
        ExporterError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<zip::result::ZipError> for ExporterError {
    fn from(err: zip::result::ZipError) -> Self {
        ExporterError::Archive(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ExporterError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExporterError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_error_display() {
        let err = ExporterError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_garmin_error_conversion() {
        let garmin_err = GarminError::ConnectionFailed("Network error".to_string());
        let err: ExporterError = garmin_err.into();
        assert!(matches!(err, ExporterError::Garmin(_)));
        assert!(err.is_fatal_for_run());
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(GarminError::from_status(401, "nope").is_authentication());
        assert!(GarminError::from_status(403, "nope").is_authentication());
        assert!(matches!(
            GarminError::from_status(404, "gone"),
            GarminError::NotFound(_)
        ));
        assert!(matches!(
            GarminError::from_status(429, "slow down"),
            GarminError::RateLimitExceeded(_)
        ));
        assert!(matches!(
            GarminError::from_status(400, "bad"),
            GarminError::ClientError { status: 400, .. }
        ));
        assert!(matches!(
            GarminError::from_status(502, "bad gateway"),
            GarminError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_per_activity_errors_are_not_fatal() {
        assert!(!ExporterError::Io("disk full".to_string()).is_fatal_for_run());
        assert!(!ExporterError::Decode("bad utf-8".to_string()).is_fatal_for_run());
        assert!(!ExporterError::Garmin(GarminError::NotFound("x".to_string())).is_fatal_for_run());
    }

    #[test]
    fn test_is_authentication() {
        assert!(ExporterError::Authentication("x".to_string()).is_authentication());
        assert!(
            ExporterError::Garmin(GarminError::MfaRequired("code".to_string())).is_authentication()
        );
        assert!(!ExporterError::Connection("x".to_string()).is_authentication());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExporterError = io_err.into();
        assert!(matches!(err, ExporterError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ExporterError = json_err.into();
        assert!(matches!(err, ExporterError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExporterError = toml_err.into();
        assert!(matches!(err, ExporterError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ExporterError = utf8_err.into();
        assert!(matches!(err, ExporterError::Decode(_)));
    }
}
