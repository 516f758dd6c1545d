//! Plain-text rendering

use crate::document::ComposedDocument;

const RULE_WIDTH: usize = 80;
const SIGNATURE_LINE_WIDTH: usize = 40;

/// Render a composed document as plain text. Placeholders keep their
/// brackets; emphasis is dropped.
pub fn render_text(doc: &ComposedDocument) -> String {
    let lines = [
        doc.header.watermark.clone(),
        doc.header.logo_caption.clone(),
        doc.header.institution_name.clone(),
        doc.header.office_label.clone(),
        doc.header.address.clone(),
        format!("Tel: {}", doc.header.phone),
        "_".repeat(RULE_WIDTH),
        String::new(),
        doc.title.text.clone(),
        String::new(),
        doc.body.plain_text(),
        String::new(),
        format!("Date: {}", doc.footer.date),
        format!("Place: {}", doc.footer.place),
        String::new(),
        "_".repeat(SIGNATURE_LINE_WIDTH),
        doc.footer.signatory.clone(),
        doc.footer.seal.clone(),
    ];
    lines.join("\n")
}
