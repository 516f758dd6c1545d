//! Configuration for markup output

use serde::Deserialize;

/// Output dialect for the composed document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    #[default]
    Html,
    Text,
}

impl MarkupFormat {
    /// File extension used for artifacts in this format
    pub fn extension(self) -> &'static str {
        match self {
            MarkupFormat::Html => "html",
            MarkupFormat::Text => "txt",
        }
    }
}

/// Configuration options for markup output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    pub format: MarkupFormat,

    /// Whether to format HTML output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "doc-" for "doc-header")
    pub class_prefix: Option<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            format: MarkupFormat::Html,
            pretty_print: true,
            class_prefix: Some("doc-".to_string()),
        }
    }
}

impl MarkupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: MarkupFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
