//! Parsed body templates: literal text interleaved with field references

use thiserror::Error;

use super::field::Field;
use super::lexer::{lex, Span, Token};

/// The paragraph used when a document type defines no body of its own
pub const GENERIC_BODY: &str =
    "This is to certify that {STUDENT_NAME} is a student of this institution.";

/// Errors raised while parsing a body template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyTemplateError {
    /// A `{NAME}` reference that is not a known form field
    #[error("unknown field reference '{{{name}}}' at {span:?}")]
    UnknownField { name: String, span: Span },
}

/// One piece of a parsed body template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// A body template split into segments once, at catalog load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl BodyTemplate {
    /// Parse a template such as `"This is to certify that {STUDENT_NAME} ..."`
    pub fn parse(source: &str) -> Result<Self, BodyTemplateError> {
        let mut segments: Vec<Segment> = Vec::new();

        for (token, span) in lex(source) {
            let literal = match token {
                Token::FieldRef(name) => {
                    let field = Field::from_label(&name)
                        .ok_or(BodyTemplateError::UnknownField { name, span })?;
                    segments.push(Segment::Field(field));
                    continue;
                }
                Token::Text(text) => text,
                Token::OpenBrace => "{".to_string(),
                Token::CloseBrace => "}".to_string(),
            };

            // Adjacent literals are merged
            match segments.last_mut() {
                Some(Segment::Literal(prev)) => prev.push_str(&literal),
                _ => segments.push(Segment::Literal(literal)),
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The fallback paragraph referencing only the subject name
    pub fn generic() -> Self {
        Self {
            source: GENERIC_BODY.to_string(),
            segments: vec![
                Segment::Literal("This is to certify that ".to_string()),
                Segment::Field(Field::StudentName),
                Segment::Literal(" is a student of this institution.".to_string()),
            ],
        }
    }

    /// The unparsed template text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Field references in order of appearance (with repeats)
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(f) => Some(*f),
            Segment::Literal(_) => None,
        })
    }

    /// Number of times a field is referenced
    pub fn references(&self, field: Field) -> usize {
        self.fields().filter(|f| *f == field).count()
    }
}
