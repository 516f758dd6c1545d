//! Document composition: template lookup, validation gate, substitution and
//! the structural envelope

use std::fmt::Write;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{ComposeConfig, DEFAULT_DATE_FORMAT};
use crate::document::{
    Body, ComposedDocument, Footer, Fragment, Header, Metadata, RenderedDocument, Title,
};
use crate::namer::artifact_name;
use crate::renderer::render_markup;
use crate::subject::{Mode, RenderRequest, SubjectRecord};
use crate::template::{
    title_case, BodyTemplate, DocumentTypeTemplate, EntryKind, Field, InstitutionProfile,
    Resolver, Segment, TemplateRegistry,
};
use crate::validator::validate;
use crate::ComposeError;

/// Turns render requests into rendered documents.
///
/// Holds only shared, read-only state; one composer may serve any number of
/// requests.
pub struct Composer<'a> {
    registry: &'a TemplateRegistry,
    config: ComposeConfig,
    resolver: Resolver,
    clock: Box<dyn Clock + 'a>,
}

impl<'a> Composer<'a> {
    /// A composer with default configuration and the system clock
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        let config = ComposeConfig::default();
        Self {
            registry,
            resolver: Resolver::new(config.honorific.clone()),
            config,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_config(mut self, config: ComposeConfig) -> Self {
        self.resolver = Resolver::new(config.honorific.clone());
        self.config = config;
        self
    }

    /// Replace the clock, e.g. with a [`crate::FixedClock`] in tests
    pub fn with_clock(mut self, clock: impl Clock + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub fn registry(&self) -> &'a TemplateRegistry {
        self.registry
    }

    /// Compose a document, reading the clock once for the date stamp and
    /// artifact name
    pub fn compose(&self, request: &RenderRequest) -> Result<RenderedDocument, ComposeError> {
        self.compose_at(request, self.clock.now())
    }

    /// Compose against an explicit timestamp. Pure: identical inputs give
    /// identical output.
    pub fn compose_at(
        &self,
        request: &RenderRequest,
        now: DateTime<FixedOffset>,
    ) -> Result<RenderedDocument, ComposeError> {
        debug!(
            institution = %request.institution_code,
            document_type = %request.document_type_code,
            mode = ?request.mode,
            "composing document"
        );

        let institution = self
            .registry
            .lookup_institution(&request.institution_code)
            .ok_or_else(|| ComposeError::UnknownTemplate {
                kind: EntryKind::Institution,
                code: request.institution_code.clone(),
            })?;
        let document_type = self
            .registry
            .lookup_document_type(&request.document_type_code)
            .ok_or_else(|| ComposeError::UnknownTemplate {
                kind: EntryKind::DocumentType,
                code: request.document_type_code.clone(),
            })?;

        if request.mode == Mode::Final {
            let errors = validate(
                &request.subject,
                &request.institution_code,
                &request.document_type_code,
            );
            if !errors.is_empty() {
                warn!(
                    document_type = %request.document_type_code,
                    errors = errors.len(),
                    "final composition blocked by validation"
                );
                return Err(ComposeError::ValidationFailed(errors));
            }
        }

        let document = ComposedDocument {
            metadata: self.metadata(document_type, &request.subject, &now),
            header: self.header(institution),
            title: Title {
                text: document_type.title.clone(),
            },
            body: self.body(document_type, &request.subject, request.mode),
            footer: self.footer(institution, &now),
        };

        let markup = render_markup(&document, &self.config.markup);
        let artifact_name = match request.mode {
            Mode::Final => Some(artifact_name(
                &document_type.code,
                &request.subject.student_name,
                &now,
                self.config.markup.format.extension(),
            )),
            Mode::Draft => None,
        };

        Ok(RenderedDocument {
            document,
            markup,
            artifact_name,
        })
    }

    /// Substitute every field reference in the document type's paragraph
    fn body(&self, document_type: &DocumentTypeTemplate, subject: &SubjectRecord, mode: Mode) -> Body {
        let generic;
        let template = match &document_type.body {
            Some(body) => body,
            None => {
                generic = BodyTemplate::generic();
                &generic
            }
        };

        let fragments = template
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Fragment::Text(text.clone()),
                Segment::Field(Field::StudentName) => {
                    self.resolver.resolve_name(&subject.student_name, mode)
                }
                Segment::Field(field) => {
                    self.resolver.resolve(subject.get(*field), field.label(), mode)
                }
            })
            .collect();

        Body { fragments }
    }

    fn header(&self, institution: &InstitutionProfile) -> Header {
        Header {
            watermark: self.config.watermark.clone(),
            logo_caption: format!("[{} LOGO]", institution.display_name),
            institution_name: institution.display_name.to_uppercase(),
            office_label: self.config.office_label.clone(),
            address: institution.postal_address.clone(),
            phone: institution.phone_number.clone(),
            accent_color: institution.accent_color.clone(),
        }
    }

    fn footer(&self, institution: &InstitutionProfile, now: &DateTime<FixedOffset>) -> Footer {
        Footer {
            date: format_date(now, &self.config.date_format),
            place: institution.display_name.clone(),
            signatory: self.config.signatory.clone(),
            seal: institution.display_name.clone(),
        }
    }

    fn metadata(
        &self,
        document_type: &DocumentTypeTemplate,
        subject: &SubjectRecord,
        now: &DateTime<FixedOffset>,
    ) -> Metadata {
        let name = subject.student_name.trim();
        let name = if name.is_empty() {
            Field::StudentName.placeholder()
        } else {
            name.to_string()
        };
        Metadata {
            title: format!(
                "{} - {}",
                title_case(&document_type.code.replace('_', " ")),
                name
            ),
            subject: format!("University Document: {}", document_type.code),
            author: self.config.author.clone(),
            generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Format a date, falling back to the default pattern if `pattern` is invalid
fn format_date(now: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    out
}
