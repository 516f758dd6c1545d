//! Template system: catalog of institutions and document types, body
//! templates, and per-field placeholder resolution
//!
//! # Example
//!
//! ```text
//! [[document_type]]
//! code = "bonafide"
//! title = "BONAFIDE CERTIFICATE"
//! body = "This is to certify that {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, ..."
//! ```
//!
//! Each `{FIELD}` reference is replaced by the field's value, or by a
//! bracketed `[FIELD]` placeholder when the value is absent.

mod body;
mod catalog;
mod field;
mod lexer;
mod registry;
mod resolver;

pub use body::{BodyTemplate, BodyTemplateError, Segment, GENERIC_BODY};
pub use catalog::BUILTIN_CATALOG;
pub use field::Field;
pub use lexer::{lex, Span, Token};
pub(crate) use registry::title_case;
pub use registry::{
    CatalogError, DocumentTypeTemplate, EntryKind, InstitutionProfile, ReferenceLists,
    TemplateRegistry,
};
pub use resolver::{resolve_field, Resolver, DEFAULT_HONORIFIC};
