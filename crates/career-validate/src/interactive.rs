//! Per-keystroke hints for collection drafts.
//!
//! These are advisory and lighter than the full validators: only the edited
//! field is looked at. The full validator still runs when the draft is
//! committed.

use career_model::Field;

use crate::ValidationContext;
use crate::checks::education_year_issue;
use crate::checks::work_duration_issue;
use crate::issue::FieldIssue;

/// Hint for one edited field of an education draft.
pub fn education_field_hint(field: Field, value: &str, ctx: &ValidationContext) -> Option<String> {
    let required = matches!(
        field,
        Field::Degree | Field::Institution | Field::PassingYear | Field::Grade
    );
    if value.is_empty() {
        return required.then(|| FieldIssue::Required.message(field));
    }
    match field {
        Field::PassingYear => education_year_issue(value, ctx).map(|issue| issue.message(field)),
        _ => None,
    }
}

/// Hint for one edited field of a work experience draft.
pub fn work_experience_field_hint(field: Field, value: &str) -> Option<String> {
    let required = matches!(
        field,
        Field::CompanyName | Field::Designation | Field::DurationMonths
    );
    if value.is_empty() {
        return required.then(|| FieldIssue::Required.message(field));
    }
    match field {
        Field::DurationMonths => work_duration_issue(value).map(|issue| issue.message(field)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_field_hints_required() {
        let ctx = ValidationContext::default().with_current_year(2026);
        assert_eq!(
            education_field_hint(Field::Degree, "", &ctx).as_deref(),
            Some("Degree is required")
        );
        assert_eq!(
            work_experience_field_hint(Field::CompanyName, "").as_deref(),
            Some("Company name is required")
        );
        assert_eq!(work_experience_field_hint(Field::Responsibilities, ""), None);
    }

    #[test]
    fn numeric_fields_are_range_checked() {
        let ctx = ValidationContext::default().with_current_year(2026);
        assert_eq!(
            education_field_hint(Field::PassingYear, "1900", &ctx).as_deref(),
            Some("Year must be between 1950 and 2026")
        );
        assert_eq!(education_field_hint(Field::PassingYear, "2001", &ctx), None);
        assert_eq!(
            work_experience_field_hint(Field::DurationMonths, "0").as_deref(),
            Some("Duration must be a positive number")
        );
        assert_eq!(work_experience_field_hint(Field::DurationMonths, "12"), None);
    }
}
