//! Canonical export filenames
//!
//! Every exported artifact is named `{date}[_{name}]_{activity_id}.{ext}`.
//! The naming scheme is the only index of what has already been exported: the
//! watermark scan reads the date back out of the leading segment.

use chrono::NaiveDate;

/// Characters replaced with `-` by [`sanitize`]
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum length of a sanitized name, in characters
pub const MAX_NAME_LEN: usize = 50;

/// Replacement for names that are empty
pub const UNNAMED: &str = "Unnamed";

/// Date format of the leading filename segment
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Make a display name safe for use inside a filename
///
/// Forbidden characters become `-`, spaces become `_`, and the result is cut
/// to [`MAX_NAME_LEN`] characters. Empty input yields [`UNNAMED`]. Never fails.
///
/// ```
/// use garmin_export::core::naming::sanitize;
///
/// assert_eq!(sanitize("Run: 5k / Park"), "Run-_5k_-_Park");
/// assert_eq!(sanitize(""), "Unnamed");
/// ```
pub fn sanitize(raw_name: &str) -> String {
    let cleaned: String = raw_name
        .chars()
        .map(|c| match c {
            c if FORBIDDEN_CHARS.contains(&c) => '-',
            ' ' => '_',
            c => c,
        })
        .take(MAX_NAME_LEN)
        .collect();

    if cleaned.is_empty() {
        UNNAMED.to_string()
    } else {
        cleaned
    }
}

/// Filename without extension: `{date}[_{name}]_{activity_id}`
pub fn stem(date: &str, sanitized_name: &str, activity_id: &str) -> String {
    if sanitized_name.is_empty() {
        format!("{date}_{activity_id}")
    } else {
        format!("{date}_{sanitized_name}_{activity_id}")
    }
}

/// Full canonical filename
///
/// ```
/// use garmin_export::core::naming::encode;
///
/// assert_eq!(encode("2024-03-15", "Evening_Ride", "42", "fit"), "2024-03-15_Evening_Ride_42.fit");
/// assert_eq!(encode("2024-03-15", "", "42", "gpx"), "2024-03-15_42.gpx");
/// ```
pub fn encode(date: &str, sanitized_name: &str, activity_id: &str, extension: &str) -> String {
    format!("{}.{extension}", stem(date, sanitized_name, activity_id))
}

/// Read the export date back out of a filename
///
/// Takes the text before the first `_` and parses it as `YYYY-MM-DD`. Files
/// that don't follow the naming scheme yield `None`.
pub fn decode_date(filename: &str) -> Option<NaiveDate> {
    let (date_part, _) = filename.split_once('_')?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}
