//! Integration tests for Draft and Final composition

use chrono::{DateTime, FixedOffset, TimeZone};
use pretty_assertions::assert_eq;

use registrar::document::Fragment;
use registrar::template::{BodyTemplate, DocumentTypeTemplate};
use registrar::{
    ComposeConfig, ComposeError, Composer, Field, FixedClock, MarkupFormat, Mode, RenderRequest,
    SubjectRecord, TemplateRegistry, ValidationError,
};

const REQUIRED: [Field; 7] = [
    Field::StudentName,
    Field::RollNumber,
    Field::Course,
    Field::Department,
    Field::YearOfStudy,
    Field::AdmissionDate,
    Field::Purpose,
];

fn frozen() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 5, 10, 30, 0)
        .unwrap()
}

fn asha() -> SubjectRecord {
    SubjectRecord {
        student_name: "Asha Rao".to_string(),
        roll_number: "CS2024099".to_string(),
        course: "Bachelor of Science (B.Sc.)".to_string(),
        department: "Computer Science".to_string(),
        year_of_study: "2nd Year".to_string(),
        admission_date: "2023-08-15".to_string(),
        email: String::new(),
        phone: String::new(),
        purpose: "Internship application".to_string(),
    }
}

fn registry() -> TemplateRegistry {
    TemplateRegistry::builtin().expect("builtin catalog")
}

#[test]
fn test_bonafide_final_scenario() {
    let registry = registry();
    let composer = Composer::new(&registry).with_clock(FixedClock::new(frozen()));
    let request = RenderRequest::new("harvard", "bonafide", asha()).with_mode(Mode::Final);

    let rendered = composer.compose(&request).expect("should compose");
    let body = rendered.document.body.plain_text();
    assert!(body.contains("Mr./Ms. Asha Rao"));
    assert!(body.contains("CS2024099"));
    assert!(body.contains("Internship application"));
    assert_eq!(rendered.document.body.placeholder_count(), 0);

    let name = rendered.artifact_name.expect("final has an artifact name");
    assert_eq!(name, "bonafide_Asha_Rao_1709634600000.html");
    let stamp = name
        .strip_prefix("bonafide_Asha_Rao_")
        .and_then(|rest| rest.strip_suffix(".html"))
        .expect("prefix and extension");
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_missing_purpose_blocks_final() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let subject = SubjectRecord {
        purpose: String::new(),
        ..asha()
    };
    let request = RenderRequest::new("harvard", "bonafide", subject).with_mode(Mode::Final);

    let err = composer.compose(&request).unwrap_err();
    let messages: Vec<String> = err.validation_errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(messages, vec!["Purpose is required".to_string()]);
}

#[test]
fn test_envelope() {
    let registry = registry();
    let composer = Composer::new(&registry).with_clock(FixedClock::new(frozen()));
    let rendered = composer
        .compose(&RenderRequest::new("stanford", "character", asha()))
        .unwrap();
    let doc = &rendered.document;

    assert_eq!(doc.header.institution_name, "STANFORD UNIVERSITY");
    assert_eq!(doc.header.office_label, "Office of the Registrar");
    assert_eq!(doc.header.address, "Stanford, CA 94305");
    assert_eq!(doc.header.phone, "(650) 723-2300");
    assert_eq!(doc.header.accent_color.as_deref(), Some("#CC0000"));
    assert_eq!(doc.title.text, "CHARACTER CERTIFICATE");
    assert_eq!(doc.footer.date, "March 05, 2024");
    assert_eq!(doc.footer.place, "Stanford University");
    assert_eq!(doc.footer.signatory, "Registrar");
    assert_eq!(doc.footer.seal, "Stanford University");
}

#[test]
fn test_compose_is_pure_for_a_frozen_clock() {
    let registry = registry();
    let composer = Composer::new(&registry).with_clock(FixedClock::new(frozen()));
    for mode in [Mode::Draft, Mode::Final] {
        let request = RenderRequest::new("mit", "transfer", asha()).with_mode(mode);
        let first = composer.compose(&request).unwrap();
        let second = composer.compose(&request).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_draft_marks_present_and_missing_fields() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let subject = SubjectRecord {
        course: String::new(),
        ..asha()
    };
    let rendered = composer
        .compose(&RenderRequest::new("harvard", "noc", subject))
        .unwrap();
    let fragments = &rendered.document.body.fragments;
    assert!(fragments.contains(&Fragment::Emphasis("Mr./Ms. Asha Rao".to_string())));
    assert!(fragments.contains(&Fragment::Placeholder("[COURSE]".to_string())));
    assert!(!fragments.iter().any(|f| matches!(f, Fragment::Plain(_))));
    assert!(rendered.artifact_name.is_none());
}

/// Every combination of empty required fields, for every document type
fn each_subset(mut check: impl FnMut(&SubjectRecord, &[Field])) {
    for mask in 0u32..(1 << REQUIRED.len()) {
        let mut subject = asha();
        let mut emptied = Vec::new();
        for (bit, field) in REQUIRED.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                *subject.get_mut(*field) = if bit % 2 == 0 { String::new() } else { "  ".to_string() };
                emptied.push(*field);
            }
        }
        check(&subject, &emptied);
    }
}

#[test]
fn test_draft_never_fails_validation() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let codes: Vec<String> = registry.document_types().map(|d| d.code.clone()).collect();

    each_subset(|subject, emptied| {
        for code in &codes {
            let rendered = composer
                .compose(&RenderRequest::new("generic", code.as_str(), subject.clone()))
                .expect("draft composition never fails validation");
            let body = rendered.document.body.plain_text();
            let template = registry.lookup_document_type(code).unwrap().body.clone().unwrap();
            for field in emptied {
                if template.references(*field) > 0 {
                    assert!(body.contains(&field.placeholder()), "{} missing in {}", field, code);
                }
            }
        }
    });
}

#[test]
fn test_final_gate_reports_each_violation_in_order() {
    let registry = registry();
    let composer = Composer::new(&registry);

    each_subset(|subject, emptied| {
        let request = RenderRequest::new("harvard", "transcript", subject.clone()).with_mode(Mode::Final);
        let result = composer.compose(&request);
        if emptied.is_empty() {
            assert!(result.is_ok());
            return;
        }
        let expected: Vec<ValidationError> = emptied
            .iter()
            .map(|f| ValidationError::MissingField(*f))
            .collect();
        assert_eq!(result, Err(ComposeError::ValidationFailed(expected)));
    });
}

#[test]
fn test_values_substituted_once_per_reference() {
    let mut registry = registry();
    let body = BodyTemplate::parse(
        "{STUDENT_NAME}|{ROLL_NUMBER}|{COURSE}|{DEPARTMENT}|{YEAR_OF_STUDY}|{ADMISSION_DATE}|{EMAIL}|{PHONE}|{PURPOSE}|{EMAIL}|{COURSE}",
    )
    .unwrap();
    registry
        .register_document_type(DocumentTypeTemplate::new("everything", "EVERYTHING", Some(body.clone())))
        .unwrap();
    let composer = Composer::new(&registry);

    for field in Field::ALL {
        let token = match field {
            Field::Email => "tok3n@example.org".to_string(),
            other => format!("Tok3n{}", other.label()),
        };
        let subject = asha().with(field, token.clone());
        let request = RenderRequest::new("mit", "everything", subject).with_mode(Mode::Final);
        let text = composer.compose(&request).unwrap().document.body.plain_text();
        assert_eq!(
            text.matches(token.as_str()).count(),
            body.references(field),
            "{}",
            field
        );
    }
}

#[test]
fn test_whitespace_name_renders_placeholder_not_honorific() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let subject = SubjectRecord {
        student_name: "   ".to_string(),
        ..asha()
    };
    let rendered = composer
        .compose(&RenderRequest::new("harvard", "bonafide", subject))
        .unwrap();
    let body = rendered.document.body.plain_text();
    assert!(body.contains("[STUDENT_NAME]"));
    assert!(!body.contains("Mr./Ms."));
}

#[test]
fn test_honorific_text_in_purpose_is_substituted() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let subject = SubjectRecord {
        purpose: "Mr./Ms.".to_string(),
        ..asha()
    };
    let rendered = composer
        .compose(&RenderRequest::new("harvard", "bonafide", subject).with_mode(Mode::Final))
        .unwrap();
    let body = &rendered.document.body;
    assert_eq!(body.placeholder_count(), 0);
    assert!(body.fragments.contains(&Fragment::Plain("Mr./Ms.".to_string())));
    assert!(body.plain_text().ends_with("for the purpose of Mr./Ms.."));
}

#[test]
fn test_email_gate() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let final_with = |email: &str| {
        let subject = SubjectRecord {
            email: email.to_string(),
            ..asha()
        };
        composer.compose(&RenderRequest::new("mit", "noc", subject).with_mode(Mode::Final))
    };

    assert!(final_with("jane@doe.com").is_ok());
    assert!(final_with("").is_ok());
    assert_eq!(
        final_with("not-an-email").unwrap_err(),
        ComposeError::ValidationFailed(vec![ValidationError::InvalidEmail])
    );
}

#[test]
fn test_text_format_changes_extension() {
    let registry = registry();
    let composer = Composer::new(&registry)
        .with_config(ComposeConfig::new().with_format(MarkupFormat::Text))
        .with_clock(FixedClock::new(frozen()));
    let rendered = composer
        .compose(&RenderRequest::new("generic", "fee_structure", asha()).with_mode(Mode::Final))
        .unwrap();
    assert_eq!(
        rendered.artifact_name.as_deref(),
        Some("fee_structure_Asha_Rao_1709634600000.txt")
    );
    assert!(!rendered.markup.contains('<'));
}

#[test]
fn test_html_escapes_user_input() {
    let registry = registry();
    let composer = Composer::new(&registry);
    let subject = SubjectRecord {
        purpose: "<script>alert(1)</script>".to_string(),
        ..asha()
    };
    let rendered = composer
        .compose(&RenderRequest::new("harvard", "bonafide", subject).with_mode(Mode::Final))
        .unwrap();
    assert!(!rendered.markup.contains("<script>"));
    assert!(rendered.markup.contains("&lt;script&gt;"));
}

#[test]
fn test_json_shape() {
    let registry = registry();
    let composer = Composer::new(&registry).with_clock(FixedClock::new(frozen()));
    let rendered = composer
        .compose(&RenderRequest::new("harvard", "bonafide", asha()).with_mode(Mode::Final))
        .unwrap();
    let value = serde_json::to_value(&rendered).unwrap();
    assert_eq!(value["artifact_name"], "bonafide_Asha_Rao_1709634600000.html");
    assert_eq!(value["document"]["title"]["text"], "BONAFIDE CERTIFICATE");
    assert_eq!(value["document"]["body"]["fragments"][1]["kind"], "plain");
}
