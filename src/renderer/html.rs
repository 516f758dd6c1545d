//! HTML generation from a composed document

use crate::document::{ComposedDocument, Fragment};

use super::MarkupConfig;

const SIGNATURE_LINE_WIDTH: usize = 40;

/// Build HTML elements incrementally
pub struct HtmlBuilder {
    config: MarkupConfig,
    lines: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    pub fn new(config: MarkupConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 0,
        }
    }

    fn class(&self, name: &str) -> String {
        let prefix = self.config.class_prefix.as_deref().unwrap_or_default();
        format!("{}{}", prefix, name)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    /// Open a container element
    pub fn open(&mut self, tag: &str, class: &str, style: Option<&str>) {
        let style_attr = style
            .map(|s| format!(r#" style="{}""#, escape_html(s)))
            .unwrap_or_default();
        self.lines.push(format!(
            r#"{}<{} class="{}"{}>"#,
            self.indent_str(),
            tag,
            self.class(class),
            style_attr
        ));
        self.indent += 1;
    }

    /// Close the most recently opened container
    pub fn close(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.lines.push(format!("{}</{}>", self.indent_str(), tag));
    }

    /// Add an element whose text content is escaped here
    pub fn text_element(&mut self, tag: &str, class: &str, text: &str) {
        self.raw_element(tag, class, &escape_html(text));
    }

    /// Add an element whose content is already escaped HTML
    pub fn raw_element(&mut self, tag: &str, class: &str, html: &str) {
        self.lines.push(format!(
            r#"{}<{} class="{}">{}</{}>"#,
            self.indent_str(),
            tag,
            self.class(class),
            html,
            tag
        ));
    }

    /// Render body fragments to inline HTML
    pub fn inline_fragments(&self, fragments: &[Fragment]) -> String {
        fragments
            .iter()
            .map(|f| match f {
                Fragment::Text(s) | Fragment::Plain(s) => escape_html(s),
                Fragment::Emphasis(s) => format!(
                    r#"<strong class="{}">{}</strong>"#,
                    self.class("field"),
                    escape_html(s)
                ),
                Fragment::Placeholder(s) => format!(
                    r#"<span class="{}">{}</span>"#,
                    self.class("placeholder"),
                    escape_html(s)
                ),
            })
            .collect()
    }

    pub fn build(self) -> String {
        let nl = if self.config.pretty_print { "\n" } else { "" };
        self.lines.join(nl)
    }
}

/// Render a composed document to an HTML fragment
pub fn render_html(doc: &ComposedDocument, config: &MarkupConfig) -> String {
    let mut builder = HtmlBuilder::new(config.clone());

    builder.open("article", "document", None);

    let accent = doc
        .header
        .accent_color
        .as_ref()
        .map(|c| format!("border-bottom: 3px solid {}", c));
    builder.open("header", "header", accent.as_deref());
    builder.text_element("p", "watermark", &doc.header.watermark);
    builder.text_element("p", "logo", &doc.header.logo_caption);
    builder.text_element("h1", "institution", &doc.header.institution_name);
    builder.text_element("p", "office", &doc.header.office_label);
    let contact = format!(
        "{}<br/>Tel: {}",
        escape_html(&doc.header.address),
        escape_html(&doc.header.phone)
    );
    builder.raw_element("p", "contact", &contact);
    builder.close("header");

    builder.text_element("h2", "title", &doc.title.text);

    builder.open("section", "body", None);
    let paragraph = builder.inline_fragments(&doc.body.fragments);
    builder.raw_element("p", "paragraph", &paragraph);
    builder.close("section");

    builder.open("footer", "footer", None);
    builder.text_element("p", "date", &format!("Date: {}", doc.footer.date));
    builder.text_element("p", "place", &format!("Place: {}", doc.footer.place));
    builder.open("div", "signature", None);
    builder.text_element("p", "signature-line", &"_".repeat(SIGNATURE_LINE_WIDTH));
    builder.text_element("p", "signatory", &doc.footer.signatory);
    builder.text_element("p", "seal", &doc.footer.seal);
    builder.close("div");
    builder.close("footer");

    builder.close("article");
    builder.build()
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_inline_fragments() {
        let builder = HtmlBuilder::new(MarkupConfig::default());
        let html = builder.inline_fragments(&[
            Fragment::Text("for ".to_string()),
            Fragment::Emphasis("R&D".to_string()),
            Fragment::Text(", ".to_string()),
            Fragment::Placeholder("[PURPOSE]".to_string()),
        ]);
        assert_eq!(
            html,
            r#"for <strong class="doc-field">R&amp;D</strong>, <span class="doc-placeholder">[PURPOSE]</span>"#
        );
    }

    #[test]
    fn test_nesting_and_prefix() {
        let mut builder = HtmlBuilder::new(MarkupConfig::default().without_class_prefix());
        builder.open("div", "outer", None);
        builder.text_element("p", "inner", "x");
        builder.close("div");
        assert_eq!(
            builder.build(),
            "<div class=\"outer\">\n  <p class=\"inner\">x</p>\n</div>"
        );
    }

    #[test]
    fn test_compact_output() {
        let mut builder = HtmlBuilder::new(MarkupConfig::default().with_pretty_print(false));
        builder.open("div", "a", None);
        builder.text_element("p", "b", "y");
        builder.close("div");
        assert_eq!(
            builder.build(),
            r#"<div class="doc-a"><p class="doc-b">y</p></div>"#
        );
    }
}
