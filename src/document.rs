//! Typed document tree produced by the composer
//!
//! Every node carries already-resolved text. Serializing the tree into a
//! concrete markup dialect (and escaping it) is left to [`crate::renderer`].

use serde::Serialize;

/// A run of body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    /// Literal template text between field references
    Text(String),
    /// A present field value in Draft mode
    Emphasis(String),
    /// An absent field, carrying its bracketed label, e.g. `[PURPOSE]`
    Placeholder(String),
    /// A present field value in Final mode
    Plain(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(s) | Fragment::Emphasis(s) | Fragment::Placeholder(s) | Fragment::Plain(s) => s,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Fragment::Placeholder(_))
    }
}

/// Document properties attached to the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub subject: String,
    pub author: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub watermark: String,
    pub logo_caption: String,
    /// Institution name, uppercased
    pub institution_name: String,
    pub office_label: String,
    pub address: String,
    pub phone: String,
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Body {
    pub fragments: Vec<Fragment>,
}

impl Body {
    /// The paragraph with all fragments concatenated
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }

    /// Number of fields rendered as placeholders
    pub fn placeholder_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_placeholder()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub date: String,
    pub place: String,
    pub signatory: String,
    pub seal: String,
}

/// The full document: envelope plus substituted body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedDocument {
    pub metadata: Metadata,
    pub header: Header,
    pub title: Title,
    pub body: Body,
    pub footer: Footer,
}

/// Composition output, handed back to the caller and not retained
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub document: ComposedDocument,
    /// The tree serialized with the configured markup format
    pub markup: String,
    /// Present only for Final renders
    pub artifact_name: Option<String>,
}
