//! Required-field and format rules gating Final composition

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::subject::SubjectRecord;
use crate::template::Field;

/// Permissive `local@domain.tld` shape check, not full RFC validation
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Fields that must be non-empty, in reporting order
const REQUIRED_FIELDS: [Field; 7] = [
    Field::StudentName,
    Field::RollNumber,
    Field::Course,
    Field::Department,
    Field::YearOfStudy,
    Field::AdmissionDate,
    Field::Purpose,
];

/// One violated rule. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "rule", content = "field", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Institution is required")]
    MissingInstitution,

    #[error("Document type is required")]
    MissingDocumentType,

    #[error("{} is required", .0.display_name())]
    MissingField(Field),

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Check a subject record and the selected codes.
///
/// Every rule is checked; the returned list is in fixed field order and is
/// empty when the record is valid.
pub fn validate(
    subject: &SubjectRecord,
    institution_code: &str,
    document_type_code: &str,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if institution_code.trim().is_empty() {
        errors.push(ValidationError::MissingInstitution);
    }
    if document_type_code.trim().is_empty() {
        errors.push(ValidationError::MissingDocumentType);
    }

    errors.extend(
        REQUIRED_FIELDS
            .into_iter()
            .filter(|f| subject.get(*f).trim().is_empty())
            .map(ValidationError::MissingField),
    );

    // Optional; phone has no format rule at all
    if !is_valid_email(&subject.email) {
        errors.push(ValidationError::InvalidEmail);
    }

    errors
}

/// Empty counts as valid since the field is optional
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.is_empty() || EMAIL_SHAPE.is_match(email)
}
