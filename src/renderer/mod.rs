//! Markup renderers for composed documents
//!
//! The composer produces a [`ComposedDocument`] tree; these serializers turn
//! it into a concrete dialect and own all escaping.

pub mod config;
pub mod html;
pub mod text;

pub use config::{MarkupConfig, MarkupFormat};
pub use html::render_html;
pub use text::render_text;

use crate::document::ComposedDocument;

/// Serialize a document with the configured format
pub fn render_markup(doc: &ComposedDocument, config: &MarkupConfig) -> String {
    match config.format {
        MarkupFormat::Html => render_html(doc, config),
        MarkupFormat::Text => render_text(doc),
    }
}
