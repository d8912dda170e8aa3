//! Work experience entry checks (step 3).

use career_model::{Field, FieldErrors, WorkExperienceEntry};

use super::require_all;
use crate::issue::{FieldIssue, report};
use crate::parse::parse_leading_int;

pub fn validate_work_experience(entry: &WorkExperienceEntry) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require_all(
        &mut errors,
        &[
            (Field::CompanyName, entry.company_name.as_str()),
            (Field::Designation, entry.designation.as_str()),
            (Field::DurationMonths, entry.duration_months.as_str()),
        ],
    );

    if let Some(issue) = duration_issue(&entry.duration_months) {
        report(&mut errors, Field::DurationMonths, &issue);
    }

    // responsibilities is optional

    errors
}

/// Positivity check for a non-empty duration.
pub(crate) fn duration_issue(value: &str) -> Option<FieldIssue> {
    if value.is_empty() {
        return None;
    }
    match parse_leading_int(value) {
        Some(months) if months > 0 => None,
        _ => Some(FieldIssue::NonPositiveDuration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(duration: &str) -> WorkExperienceEntry {
        WorkExperienceEntry {
            id: "exp-1".to_string(),
            company_name: "ABC Company".to_string(),
            designation: "Junior Officer".to_string(),
            duration_months: duration.to_string(),
            responsibilities: String::new(),
        }
    }

    #[test]
    fn positive_duration_without_responsibilities_is_valid() {
        assert!(validate_work_experience(&entry("24")).is_empty());
    }

    #[test]
    fn zero_negative_and_text_durations_are_rejected() {
        for bad in ["0", "-6", "two years"] {
            let errors = validate_work_experience(&entry(bad));
            assert_eq!(
                errors.get(Field::DurationMonths),
                Some("Duration must be a positive number"),
                "{bad}"
            );
        }
    }
}
