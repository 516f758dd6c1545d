//! Form fields that body templates may reference

use serde::Serialize;

/// A field of the subject record that can appear in a body template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    StudentName,
    RollNumber,
    Course,
    Department,
    YearOfStudy,
    AdmissionDate,
    Email,
    Phone,
    Purpose,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 9] = [
        Field::StudentName,
        Field::RollNumber,
        Field::Course,
        Field::Department,
        Field::YearOfStudy,
        Field::AdmissionDate,
        Field::Email,
        Field::Phone,
        Field::Purpose,
    ];

    /// The reference name used inside templates, e.g. `STUDENT_NAME`
    pub fn label(self) -> &'static str {
        match self {
            Field::StudentName => "STUDENT_NAME",
            Field::RollNumber => "ROLL_NUMBER",
            Field::Course => "COURSE",
            Field::Department => "DEPARTMENT",
            Field::YearOfStudy => "YEAR_OF_STUDY",
            Field::AdmissionDate => "ADMISSION_DATE",
            Field::Email => "EMAIL",
            Field::Phone => "PHONE",
            Field::Purpose => "PURPOSE",
        }
    }

    /// Human-readable name used in validation messages
    pub fn display_name(self) -> &'static str {
        match self {
            Field::StudentName => "Student name",
            Field::RollNumber => "Roll number",
            Field::Course => "Course",
            Field::Department => "Department",
            Field::YearOfStudy => "Year of study",
            Field::AdmissionDate => "Admission date",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Purpose => "Purpose",
        }
    }

    /// The bracketed placeholder shown when the field has no value
    pub fn placeholder(self) -> String {
        format!("[{}]", self.label())
    }

    /// Look up a field by reference name, ignoring case
    pub fn from_label(name: &str) -> Option<Field> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Field::from_label("student_name"), Some(Field::StudentName));
        assert_eq!(Field::from_label("Year_Of_Study"), Some(Field::YearOfStudy));
        assert_eq!(Field::from_label("GPA"), None);
    }

    #[test]
    fn test_placeholder_brackets_label() {
        assert_eq!(Field::Purpose.placeholder(), "[PURPOSE]");
    }

    #[test]
    fn test_labels_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_label(field.label()), Some(field));
        }
    }
}
