//! Registrar - institutional document composition
//!
//! This library fills certificate and letter templates from student form
//! data. A document can be composed as a live Draft preview, where missing
//! fields show as `[PLACEHOLDER]` labels, or as a Final artifact, which is
//! only produced once every required field validates.
//!
//! # Example
//!
//! ```rust
//! use registrar::{compose, Mode, RenderRequest, SubjectRecord, TemplateRegistry};
//!
//! let registry = TemplateRegistry::builtin().unwrap();
//! let subject = SubjectRecord {
//!     student_name: "Asha Rao".into(),
//!     ..Default::default()
//! };
//! let draft = compose(&registry, &RenderRequest::new("harvard", "bonafide", subject)).unwrap();
//! assert!(draft.markup.contains("Mr./Ms. Asha Rao"));
//! assert!(draft.markup.contains("[ROLL_NUMBER]"));
//! ```

pub mod clock;
pub mod composer;
pub mod config;
pub mod debounce;
pub mod document;
pub mod error;
pub mod namer;
pub mod preview;
pub mod renderer;
pub mod subject;
pub mod template;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use composer::Composer;
pub use config::{ComposeConfig, ConfigError};
pub use document::{ComposedDocument, Fragment, RenderedDocument};
pub use namer::artifact_name;
pub use preview::DraftPreview;
pub use renderer::{render_markup, MarkupConfig, MarkupFormat};
pub use subject::{Mode, RenderRequest, SubjectRecord};
pub use template::{
    resolve_field, CatalogError, DocumentTypeTemplate, EntryKind, Field, InstitutionProfile,
    TemplateRegistry,
};
pub use validator::{validate, ValidationError};

use thiserror::Error;

/// Errors that can occur during composition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Institution or document-type code not in the registry
    #[error("unknown {kind} code '{code}'")]
    UnknownTemplate { kind: EntryKind, code: String },

    /// Final composition refused; errors are in fixed field order
    #[error("validation failed: {}", format_validation_errors(.0))]
    ValidationFailed(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ComposeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ComposeError::ValidationFailed(errors)
    }
}

impl ComposeError {
    /// The validation errors, empty for other failures
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ComposeError::ValidationFailed(errors) => errors,
            ComposeError::UnknownTemplate { .. } => &[],
        }
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Compose a document with default configuration and the system clock
pub fn compose(
    registry: &TemplateRegistry,
    request: &RenderRequest,
) -> Result<RenderedDocument, ComposeError> {
    compose_with_config(registry, request, ComposeConfig::default())
}

/// Compose a document with custom configuration
///
/// # Example
///
/// ```rust
/// use registrar::{compose_with_config, ComposeConfig, MarkupFormat, RenderRequest, SubjectRecord, TemplateRegistry};
///
/// let registry = TemplateRegistry::builtin().unwrap();
/// let config = ComposeConfig::new().with_format(MarkupFormat::Text);
/// let request = RenderRequest::new("mit", "noc", SubjectRecord::default());
///
/// let doc = compose_with_config(&registry, &request, config).unwrap();
/// assert!(doc.markup.starts_with("OFFICIAL DOCUMENT"));
/// ```
pub fn compose_with_config(
    registry: &TemplateRegistry,
    request: &RenderRequest,
    config: ComposeConfig,
) -> Result<RenderedDocument, ComposeError> {
    Composer::new(registry).with_config(config).compose(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_draft_html() {
        let registry = TemplateRegistry::builtin().unwrap();
        let request = RenderRequest::new("harvard", "noc", SubjectRecord::default());
        let doc = compose(&registry, &request).unwrap();
        assert!(doc.markup.contains("<article"));
        assert!(doc.markup.contains("HARVARD UNIVERSITY"));
        assert!(doc.markup.contains("[PURPOSE]"));
    }

    #[test]
    fn test_unknown_institution_error() {
        let registry = TemplateRegistry::builtin().unwrap();
        let request = RenderRequest::new("oxford", "noc", SubjectRecord::default());
        let err = compose(&registry, &request).unwrap_err();
        assert_eq!(
            err,
            ComposeError::UnknownTemplate {
                kind: EntryKind::Institution,
                code: "oxford".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unknown institution code 'oxford'");
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_unknown_document_type_checked_before_validation() {
        let registry = TemplateRegistry::builtin().unwrap();
        let request = RenderRequest::new("mit", "diploma", SubjectRecord::default())
            .with_mode(Mode::Final);
        let err = compose(&registry, &request).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::UnknownTemplate {
                kind: EntryKind::DocumentType,
                ..
            }
        ));
    }

    #[test]
    fn test_validation_error_display_joins_messages() {
        let err = ComposeError::from(vec![
            ValidationError::MissingField(Field::Course),
            ValidationError::InvalidEmail,
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: Course is required; Invalid email format"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }
}
