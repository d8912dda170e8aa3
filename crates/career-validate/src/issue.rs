//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Validators turn
//! issues into messages when they write them into a [`FieldErrors`] map.

use serde::{Deserialize, Serialize};

use career_model::{Field, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldIssue {
    // Presence
    /// Required field is empty or absent
    Required,

    // Format
    /// Name contains something other than letters and spaces
    NotAlphabetic,
    /// Date of birth could not be read as a date
    InvalidDate,
    /// Mobile number is not exactly ten digits
    InvalidMobile,
    /// Email is not shaped `local@domain.tld`
    InvalidEmail,

    // Ranges
    /// Applicant is younger than the minimum age
    Underage { min_age: i32 },
    /// Applicant is older than the maximum age
    OverAge,
    /// Passing year outside the accepted window
    YearOutOfRange { min: i32, max: i32 },
    /// Duration is not a positive whole number of months
    NonPositiveDuration,
    /// Salary is not a positive number
    NonPositiveSalary,

    // Uploads
    /// Image media type is not accepted
    UnsupportedMediaType,
    /// Image exceeds the upload cap
    FileTooLarge { limit: String },

    // Collections
    /// Entry id already used by another entry
    DuplicateId { id: String },
}

impl FieldIssue {
    /// Message shown next to the field.
    pub fn message(&self, field: Field) -> String {
        match self {
            FieldIssue::Required => format!("{} is required", field.label()),
            FieldIssue::NotAlphabetic => "Name should contain alphabets only".to_string(),
            FieldIssue::InvalidDate => "Invalid date of birth".to_string(),
            FieldIssue::InvalidMobile => "Mobile number must be 10 digits".to_string(),
            FieldIssue::InvalidEmail => "Invalid email format".to_string(),
            FieldIssue::Underage { min_age } => {
                format!("You must be at least {min_age} years old")
            }
            FieldIssue::OverAge => "Age exceeds the maximum limit".to_string(),
            FieldIssue::YearOutOfRange { min, max } => {
                format!("Year must be between {min} and {max}")
            }
            FieldIssue::NonPositiveDuration => "Duration must be a positive number".to_string(),
            FieldIssue::NonPositiveSalary => "Salary must be a positive number".to_string(),
            FieldIssue::UnsupportedMediaType => "Only JPG and PNG files are allowed".to_string(),
            FieldIssue::FileTooLarge { limit } => {
                format!("File size should not exceed {limit}")
            }
            FieldIssue::DuplicateId { id } => format!("An entry with id {id} already exists"),
        }
    }
}

/// Record an issue against a field, replacing any earlier message.
pub(crate) fn report(errors: &mut FieldErrors, field: Field, issue: &FieldIssue) {
    errors.insert(field, issue.message(field));
}
