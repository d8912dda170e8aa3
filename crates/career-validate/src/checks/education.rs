//! Education entry checks (step 2).

use career_model::{EducationEntry, Field, FieldErrors};

use super::require_all;
use crate::ValidationContext;
use crate::issue::{FieldIssue, report};
use crate::parse::parse_leading_int;

pub fn validate_education(entry: &EducationEntry, ctx: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require_all(
        &mut errors,
        &[
            (Field::Degree, entry.degree.as_str()),
            (Field::Institution, entry.institution.as_str()),
            (Field::PassingYear, entry.passing_year.as_str()),
            (Field::Grade, entry.grade.as_str()),
        ],
    );

    if let Some(issue) = passing_year_issue(&entry.passing_year, ctx) {
        report(&mut errors, Field::PassingYear, &issue);
    }

    errors
}

/// Range check for a non-empty passing year.
pub(crate) fn passing_year_issue(value: &str, ctx: &ValidationContext) -> Option<FieldIssue> {
    if value.is_empty() {
        return None;
    }
    let min = ctx.settings.min_passing_year;
    let max = ctx.current_year;
    match parse_leading_int(value) {
        Some(year) if year >= i64::from(min) && year <= i64::from(max) => None,
        _ => Some(FieldIssue::YearOutOfRange { min, max }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::default().with_current_year(2026)
    }

    fn entry(passing_year: &str) -> EducationEntry {
        EducationEntry {
            id: String::new(),
            degree: "Bachelor of Business Administration".to_string(),
            institution: "Tribhuvan University".to_string(),
            passing_year: passing_year.to_string(),
            grade: "A".to_string(),
        }
    }

    #[test]
    fn year_window_is_inclusive() {
        assert!(validate_education(&entry("1950"), &ctx()).is_empty());
        assert!(validate_education(&entry("2026"), &ctx()).is_empty());
    }

    #[test]
    fn year_outside_window_is_reported() {
        for bad in ["1949", "2027", "soon"] {
            let errors = validate_education(&entry(bad), &ctx());
            assert_eq!(
                errors.get(Field::PassingYear),
                Some("Year must be between 1950 and 2026"),
                "{bad}"
            );
        }
    }

    #[test]
    fn empty_entry_reports_required_fields_only() {
        let errors = validate_education(&EducationEntry::default(), &ctx());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::PassingYear), Some("Passing year is required"));
        assert!(!errors.contains(Field::Id));
    }
}
