//! Template registry: institution profiles and document-type templates

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::body::{BodyTemplate, BodyTemplateError};
use super::catalog::BUILTIN_CATALOG;
use crate::subject::SubjectRecord;

/// Hex colour with or without the leading `#`
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9A-Fa-f]{3,8}$").expect("color pattern is valid"));

/// Which half of the catalog an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Institution,
    DocumentType,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Institution => f.write_str("institution"),
            EntryKind::DocumentType => f.write_str("document type"),
        }
    }
}

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Two entries of the same kind share a code
    #[error("duplicate {kind} code: {code}")]
    Duplicate { kind: EntryKind, code: String },

    /// An entry with a blank code could never be looked up
    #[error("{kind} entry has an empty code")]
    EmptyCode { kind: EntryKind },

    /// Accent colour that is not a 3 to 8 digit hex value
    #[error("invalid accent color for institution {code}: '{color}'")]
    InvalidColor { code: String, color: String },

    #[error("invalid body template for document type {code}: {source}")]
    InvalidBody {
        code: String,
        source: BodyTemplateError,
    },
}

/// A university (or other issuing institution)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionProfile {
    pub code: String,
    pub display_name: String,
    pub postal_address: String,
    pub phone_number: String,
    pub website_domain: String,
    /// Hex colour, with leading `#`
    pub accent_color: Option<String>,
}

/// A document type: title plus the paragraph shape it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypeTemplate {
    pub code: String,
    pub title: String,
    /// `None` falls back to the generic paragraph at composition time
    pub body: Option<BodyTemplate>,
    description: Option<String>,
}

impl DocumentTypeTemplate {
    pub fn new(code: impl Into<String>, title: impl Into<String>, body: Option<BodyTemplate>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            body,
            description: None,
        }
    }

    /// Override the generated listing description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Title in title case, e.g. "Bonafide Certificate"
    pub fn label(&self) -> String {
        title_case(&self.title.replace('_', " "))
    }

    /// Short description for listings
    pub fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Generate {} for students", self.title.to_lowercase()))
    }
}

/// Option lists offered by the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceLists {
    pub courses: Vec<String>,
    pub departments: Vec<String>,
    pub year_options: Vec<String>,
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default, rename = "institution")]
    institutions: Vec<TomlInstitution>,
    #[serde(default, rename = "document_type")]
    document_types: Vec<TomlDocumentType>,
    #[serde(default)]
    reference: ReferenceLists,
    #[serde(default, rename = "sample")]
    samples: Vec<SubjectRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlInstitution {
    code: String,
    name: String,
    address: String,
    phone: String,
    website: String,
    color: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocumentType {
    code: String,
    title: String,
    body: Option<String>,
    description: Option<String>,
}

/// Read-only catalog, built once and shared by reference
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    institutions: Vec<InstitutionProfile>,
    document_types: Vec<DocumentTypeTemplate>,
    institution_index: HashMap<String, usize>,
    document_type_index: HashMap<String, usize>,
    reference: ReferenceLists,
    samples: Vec<SubjectRecord>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        let mut registry = Self::new();

        for inst in parsed.institutions {
            let accent_color = inst
                .color
                .map(|color| normalize_color(&inst.code, color))
                .transpose()?;
            registry.register_institution(InstitutionProfile {
                code: inst.code,
                display_name: inst.name,
                postal_address: inst.address,
                phone_number: inst.phone,
                website_domain: inst.website,
                accent_color,
            })?;
        }

        for doc in parsed.document_types {
            let body = doc
                .body
                .as_deref()
                .map(BodyTemplate::parse)
                .transpose()
                .map_err(|source| CatalogError::InvalidBody {
                    code: doc.code.clone(),
                    source,
                })?;
            registry.register_document_type(DocumentTypeTemplate {
                code: doc.code,
                title: doc.title,
                body,
                description: doc.description,
            })?;
        }

        registry.reference = parsed.reference;
        registry.samples = parsed.samples;
        Ok(registry)
    }

    /// Add an institution; codes must be unique
    pub fn register_institution(&mut self, profile: InstitutionProfile) -> Result<(), CatalogError> {
        check_code(EntryKind::Institution, &profile.code)?;
        if self.institution_index.contains_key(&profile.code) {
            return Err(CatalogError::Duplicate {
                kind: EntryKind::Institution,
                code: profile.code,
            });
        }
        self.institution_index
            .insert(profile.code.clone(), self.institutions.len());
        self.institutions.push(profile);
        Ok(())
    }

    /// Add a document type; codes must be unique
    pub fn register_document_type(
        &mut self,
        template: DocumentTypeTemplate,
    ) -> Result<(), CatalogError> {
        check_code(EntryKind::DocumentType, &template.code)?;
        if self.document_type_index.contains_key(&template.code) {
            return Err(CatalogError::Duplicate {
                kind: EntryKind::DocumentType,
                code: template.code,
            });
        }
        self.document_type_index
            .insert(template.code.clone(), self.document_types.len());
        self.document_types.push(template);
        Ok(())
    }

    /// Overlay another catalog: same codes are replaced, new codes appended
    pub fn merge(&mut self, other: TemplateRegistry) {
        for profile in other.institutions {
            match self.institution_index.get(&profile.code) {
                Some(&idx) => self.institutions[idx] = profile,
                None => {
                    self.institution_index
                        .insert(profile.code.clone(), self.institutions.len());
                    self.institutions.push(profile);
                }
            }
        }
        for template in other.document_types {
            match self.document_type_index.get(&template.code) {
                Some(&idx) => self.document_types[idx] = template,
                None => {
                    self.document_type_index
                        .insert(template.code.clone(), self.document_types.len());
                    self.document_types.push(template);
                }
            }
        }
        extend_unique(&mut self.reference.courses, other.reference.courses);
        extend_unique(&mut self.reference.departments, other.reference.departments);
        extend_unique(&mut self.reference.year_options, other.reference.year_options);
        self.samples.extend(other.samples);
    }

    /// Look up an institution by code
    pub fn lookup_institution(&self, code: &str) -> Option<&InstitutionProfile> {
        self.institution_index
            .get(code)
            .map(|&idx| &self.institutions[idx])
    }

    /// Look up a document type by code
    pub fn lookup_document_type(&self, code: &str) -> Option<&DocumentTypeTemplate> {
        self.document_type_index
            .get(code)
            .map(|&idx| &self.document_types[idx])
    }

    /// Institutions in catalog order
    pub fn institutions(&self) -> impl Iterator<Item = &InstitutionProfile> {
        self.institutions.iter()
    }

    /// Document types in catalog order
    pub fn document_types(&self) -> impl Iterator<Item = &DocumentTypeTemplate> {
        self.document_types.iter()
    }

    pub fn reference(&self) -> &ReferenceLists {
        &self.reference
    }

    /// Example subject records for trying the system out
    pub fn samples(&self) -> &[SubjectRecord] {
        &self.samples
    }
}

fn check_code(kind: EntryKind, code: &str) -> Result<(), CatalogError> {
    if code.trim().is_empty() {
        return Err(CatalogError::EmptyCode { kind });
    }
    Ok(())
}

fn normalize_color(code: &str, color: String) -> Result<String, CatalogError> {
    let trimmed = color.trim();
    if !HEX_COLOR.is_match(trimmed) {
        return Err(CatalogError::InvalidColor {
            code: code.to_string(),
            color,
        });
    }
    Ok(match trimmed.strip_prefix('#') {
        Some(_) => trimmed.to_string(),
        None => format!("#{}", trimmed),
    })
}

fn extend_unique(target: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Capitalize the first letter of each word, lowercase the rest
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
