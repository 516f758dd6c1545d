//! Artifact naming for Final renders
//!
//! Names take the form `<type>_<Subject_Name>_<millis>.<ext>`. Two Final
//! renders of the same type for the same subject inside one millisecond get
//! the same name; no extra entropy is added.

use chrono::{DateTime, TimeZone};

const SEPARATOR: &str = "_";

/// Derive the artifact name for a Final render
pub fn artifact_name<Tz: TimeZone>(
    document_type_code: &str,
    subject_name: &str,
    timestamp: &DateTime<Tz>,
    extension: &str,
) -> String {
    let parts = [
        sanitize(document_type_code),
        sanitize(subject_name),
        timestamp.timestamp_millis().to_string(),
    ];
    let stem = parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}.{}", stem, extension.trim_start_matches('.'))
}

/// Collapse whitespace runs and path separators into single separators
fn sanitize(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
