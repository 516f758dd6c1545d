//! Placeholder resolution: actual value or bracketed label, per rendering mode

use super::field::Field;
use crate::document::Fragment;
use crate::subject::Mode;

/// Honorific prefixed to the subject's name
pub const DEFAULT_HONORIFIC: &str = "Mr./Ms.";

/// Decides how a single field value is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    honorific: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_HONORIFIC)
    }
}

impl Resolver {
    pub fn new(honorific: impl Into<String>) -> Self {
        Self {
            honorific: honorific.into(),
        }
    }

    pub fn honorific(&self) -> &str {
        &self.honorific
    }

    /// A value is present when it is non-empty after trimming
    pub fn is_present(&self, raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    /// A displayed name is present unless it is blank or just the bare
    /// honorific left over from an empty name
    pub fn is_name_present(&self, displayed: &str) -> bool {
        self.is_present(displayed) && displayed.trim() != self.honorific.trim()
    }

    /// The subject's name as displayed: `"<honorific> <name>"`
    pub fn display_name(&self, name: &str) -> String {
        format!("{} {}", self.honorific, name)
    }

    /// Resolve one field into a display fragment. `label` is the bare field
    /// label (`PURPOSE`); the placeholder carries it bracketed.
    pub fn resolve(&self, raw: &str, label: &str, mode: Mode) -> Fragment {
        if !self.is_present(raw) {
            return placeholder(label);
        }
        present(raw, mode)
    }

    /// Resolve the subject's name with the honorific prefixed
    pub fn resolve_name(&self, name: &str, mode: Mode) -> Fragment {
        let displayed = self.display_name(name);
        if !self.is_name_present(&displayed) {
            return placeholder(Field::StudentName.label());
        }
        present(&displayed, mode)
    }
}

fn placeholder(label: &str) -> Fragment {
    Fragment::Placeholder(format!("[{}]", label))
}

fn present(raw: &str, mode: Mode) -> Fragment {
    match mode {
        Mode::Draft => Fragment::Emphasis(raw.to_string()),
        Mode::Final => Fragment::Plain(raw.to_string()),
    }
}

/// Resolve with the default honorific
pub fn resolve_field(raw: &str, label: &str, mode: Mode) -> Fragment {
    Resolver::default().resolve(raw, label, mode)
}
