//! Composition configuration, optionally loaded from TOML

use std::path::Path;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{MarkupConfig, MarkupFormat};
use crate::template::DEFAULT_HONORIFIC;

pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),
}

/// Configuration for the composition pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Prefixed to the subject's name; not part of the form data
    pub honorific: String,
    /// Line under the institution name in the header
    pub office_label: String,
    /// Title printed under the signature line
    pub signatory: String,
    pub watermark: String,
    /// Author recorded in document metadata
    pub author: String,
    /// strftime pattern for the footer date
    pub date_format: String,
    pub markup: MarkupConfig,
    /// Quiet interval before a Draft preview re-renders
    pub debounce: Duration,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            honorific: DEFAULT_HONORIFIC.to_string(),
            office_label: "Office of the Registrar".to_string(),
            signatory: "Registrar".to_string(),
            watermark: "OFFICIAL DOCUMENT".to_string(),
            author: "University Registrar Office".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            markup: MarkupConfig::default(),
            debounce: Duration::from_millis(300),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    honorific: Option<String>,
    office_label: Option<String>,
    signatory: Option<String>,
    watermark: Option<String>,
    author: Option<String>,
    date_format: Option<String>,
    debounce_ms: Option<u64>,
    markup: Option<TomlMarkup>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlMarkup {
    format: Option<MarkupFormat>,
    pretty_print: Option<bool>,
    class_prefix: Option<String>,
}

impl ComposeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(v) = parsed.honorific {
            config.honorific = v;
        }
        if let Some(v) = parsed.office_label {
            config.office_label = v;
        }
        if let Some(v) = parsed.signatory {
            config.signatory = v;
        }
        if let Some(v) = parsed.watermark {
            config.watermark = v;
        }
        if let Some(v) = parsed.author {
            config.author = v;
        }
        if let Some(v) = parsed.date_format {
            if !is_valid_date_format(&v) {
                return Err(ConfigError::InvalidDateFormat(v));
            }
            config.date_format = v;
        }
        if let Some(ms) = parsed.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(markup) = parsed.markup {
            if let Some(format) = markup.format {
                config.markup.format = format;
            }
            if let Some(pretty) = markup.pretty_print {
                config.markup.pretty_print = pretty;
            }
            if let Some(prefix) = markup.class_prefix {
                // An empty prefix in TOML means no prefix
                config.markup.class_prefix = Some(prefix).filter(|p| !p.is_empty());
            }
        }

        Ok(config)
    }

    pub fn with_honorific(mut self, honorific: impl Into<String>) -> Self {
        self.honorific = honorific.into();
        self
    }

    pub fn with_office_label(mut self, label: impl Into<String>) -> Self {
        self.office_label = label.into();
        self
    }

    pub fn with_signatory(mut self, signatory: impl Into<String>) -> Self {
        self.signatory = signatory.into();
        self
    }

    pub fn with_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.watermark = watermark.into();
        self
    }

    /// Set the footer date pattern. Invalid patterns fall back to the default
    /// at render time.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_markup(mut self, markup: MarkupConfig) -> Self {
        self.markup = markup;
        self
    }

    /// Shorthand for changing only the markup format
    pub fn with_format(mut self, format: MarkupFormat) -> Self {
        self.markup.format = format;
        self
    }

    pub fn with_debounce(mut self, quiet: Duration) -> Self {
        self.debounce = quiet;
        self
    }
}

/// True when chrono can format with this strftime pattern
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
