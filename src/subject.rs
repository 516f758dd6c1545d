//! Form data and render requests

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::template::Field;

/// Rendering variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Live preview: present values emphasized, missing ones shown as placeholders
    #[default]
    Draft,
    /// Downloadable artifact: only produced once validation passes
    Final,
}

/// The subject's form data. Every field may be empty while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectRecord {
    #[serde(alias = "name")]
    pub student_name: String,
    pub roll_number: String,
    pub course: String,
    pub department: String,
    pub year_of_study: String,
    pub admission_date: String,
    pub email: String,
    pub phone: String,
    pub purpose: String,
}

impl SubjectRecord {
    /// Raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::StudentName => &self.student_name,
            Field::RollNumber => &self.roll_number,
            Field::Course => &self.course,
            Field::Department => &self.department,
            Field::YearOfStudy => &self.year_of_study,
            Field::AdmissionDate => &self.admission_date,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Purpose => &self.purpose,
        }
    }

    /// Mutable access for form editing
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::StudentName => &mut self.student_name,
            Field::RollNumber => &mut self.roll_number,
            Field::Course => &mut self.course,
            Field::Department => &mut self.department,
            Field::YearOfStudy => &mut self.year_of_study,
            Field::AdmissionDate => &mut self.admission_date,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Purpose => &mut self.purpose,
        }
    }

    /// Set a field, returning the record for chaining
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    /// Parse a record from TOML
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a record from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SubjectError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

/// Errors that can occur when loading subject data
#[derive(Debug, thiserror::Error)]
pub enum SubjectError {
    #[error("Failed to read subject file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse subject TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Everything needed for one composition. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub institution_code: String,
    pub document_type_code: String,
    pub subject: SubjectRecord,
    #[serde(default)]
    pub mode: Mode,
}

impl RenderRequest {
    /// Create a Draft request
    pub fn new(
        institution_code: impl Into<String>,
        document_type_code: impl Into<String>,
        subject: SubjectRecord,
    ) -> Self {
        Self {
            institution_code: institution_code.into(),
            document_type_code: document_type_code.into(),
            subject,
            mode: Mode::Draft,
        }
    }

    /// Set the rendering mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let subject = SubjectRecord::from_toml(r#"student_name = "Asha Rao""#).unwrap();
        assert_eq!(subject.student_name, "Asha Rao");
        assert_eq!(subject.purpose, "");
        assert_eq!(subject.email, "");
    }

    #[test]
    fn test_name_alias() {
        let subject = SubjectRecord::from_toml(r#"name = "John Smith""#).unwrap();
        assert_eq!(subject.get(Field::StudentName), "John Smith");
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = SubjectRecord::from_toml(r#"purpse = "Visa""#).unwrap_err();
        assert!(err.message().contains("purpse"));
    }

    #[test]
    fn test_with_sets_field() {
        let subject = SubjectRecord::default().with(Field::Purpose, "Visa");
        assert_eq!(subject.purpose, "Visa");
    }

    #[test]
    fn test_request_defaults_to_draft() {
        let req = RenderRequest::new("mit", "noc", SubjectRecord::default());
        assert_eq!(req.mode, Mode::Draft);
        assert_eq!(req.with_mode(Mode::Final).mode, Mode::Final);
    }
}
