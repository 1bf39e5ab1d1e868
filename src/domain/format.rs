//! Export formats and service download encodings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format selected by the user
///
/// Each variant maps to one download strategy:
///
/// | Format | Artifact |
/// |---|---|
/// | `Gpx` | raw track bytes written verbatim |
/// | `Tcx` | structured track, decoded and written as text |
/// | `Fit` | original upload, unpacked from its archive when zipped |
/// | `Json` | activity details plus the full activity record |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// GPS Exchange Format
    Gpx,
    /// Training Center XML
    Tcx,
    /// Original device upload (FIT)
    Fit,
    /// Activity metadata as JSON
    Json,
}

impl ExportFormat {
    /// All formats, in display order
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Gpx,
        ExportFormat::Tcx,
        ExportFormat::Fit,
        ExportFormat::Json,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Gpx => "gpx",
            ExportFormat::Tcx => "tcx",
            ExportFormat::Fit => "fit",
            ExportFormat::Json => "json",
        }
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// File extension with the leading dot, as matched by the watermark scan
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension())
    }

    /// Service encoding to request, or `None` for the metadata format
    pub fn download_format(&self) -> Option<DownloadFormat> {
        match self {
            ExportFormat::Gpx => Some(DownloadFormat::Gpx),
            ExportFormat::Tcx => Some(DownloadFormat::Tcx),
            ExportFormat::Fit => Some(DownloadFormat::Original),
            ExportFormat::Json => None,
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Fit
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpx" => Ok(ExportFormat::Gpx),
            "tcx" => Ok(ExportFormat::Tcx),
            "fit" => Ok(ExportFormat::Fit),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "Invalid export format '{other}'. Must be one of: gpx, tcx, fit, json"
            )),
        }
    }
}

/// Encoding requested from the activity download endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    /// Raw GPS track
    Gpx,
    /// Structured track
    Tcx,
    /// Original upload, usually a zip holding one FIT file
    Original,
}

impl DownloadFormat {
    /// Service path for this encoding
    pub fn path(&self, activity_id: &str) -> String {
        match self {
            DownloadFormat::Gpx => format!("/download-service/export/gpx/activity/{activity_id}"),
            DownloadFormat::Tcx => format!("/download-service/export/tcx/activity/{activity_id}"),
            DownloadFormat::Original => format!("/download-service/files/activity/{activity_id}"),
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DownloadFormat::Gpx => "gpx",
            DownloadFormat::Tcx => "tcx",
            DownloadFormat::Original => "original",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(ExportFormat::from_str("GPX").unwrap(), ExportFormat::Gpx);
        assert_eq!(ExportFormat::from_str(" fit ").unwrap(), ExportFormat::Fit);
        assert!(ExportFormat::from_str("kml").is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Tcx.extension(), "tcx");
        assert_eq!(ExportFormat::Json.dotted_extension(), ".json");
    }

    #[test]
    fn test_download_format_mapping() {
        assert_eq!(ExportFormat::Fit.download_format(), Some(DownloadFormat::Original));
        assert_eq!(ExportFormat::Json.download_format(), None);
    }

    #[test]
    fn test_download_paths() {
        assert_eq!(
            DownloadFormat::Original.path("42"),
            "/download-service/files/activity/42"
        );
        assert_eq!(
            DownloadFormat::Gpx.path("42"),
            "/download-service/export/gpx/activity/42"
        );
    }

    #[test]
    fn test_default_is_fit() {
        assert_eq!(ExportFormat::default(), ExportFormat::Fit);
    }
}
