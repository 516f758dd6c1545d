//! Diagnostic formatting for catalog and config files

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::config::ConfigError;
use crate::template::CatalogError;

/// Format a TOML error with source context using ariadne.
///
/// Falls back to the plain message when the error carries no span.
pub fn format_toml_error(err: &toml::de::Error, source: &str, filename: &str) -> String {
    let Some(span) = err.span() else {
        return format!("{}: {}", filename, err.message());
    };

    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, filename, span.start)
        .with_message("invalid TOML")
        .with_label(
            Label::new((filename, span.clone()))
                .with_message(err.message())
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf);

    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("{}: {}", filename, err.message()),
    }
}

/// Describe a catalog loading error, with source context for parse errors
pub fn describe_catalog_error(err: &CatalogError, source: &str, filename: &str) -> String {
    match err {
        CatalogError::ParseError(e) => format_toml_error(e, source, filename),
        other => format!("{}: {}", filename, other),
    }
}

/// Describe a config loading error, with source context for parse errors
pub fn describe_config_error(err: &ConfigError, source: &str, filename: &str) -> String {
    match err {
        ConfigError::ParseError(e) => format_toml_error(e, source, filename),
        other => format!("{}: {}", filename, other),
    }
}
