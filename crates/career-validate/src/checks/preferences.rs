//! Job preference checks (step 4).

use career_model::{Field, FieldErrors, Preferences};

use crate::issue::{FieldIssue, report};
use crate::parse::parse_leading_float;

pub fn validate_preferences(preferences: &Preferences) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !preferences.job_position.is_set() {
        report(&mut errors, Field::JobPosition, &FieldIssue::Required);
    }

    if preferences.expected_salary.is_empty() {
        report(&mut errors, Field::ExpectedSalary, &FieldIssue::Required);
    } else {
        match parse_leading_float(&preferences.expected_salary) {
            Some(salary) if salary > 0.0 => {}
            _ => report(&mut errors, Field::ExpectedSalary, &FieldIssue::NonPositiveSalary),
        }
    }

    if preferences.preferred_location.is_empty() {
        report(&mut errors, Field::PreferredLocation, &FieldIssue::Required);
    }

    errors
}

#[cfg(test)]
mod tests {
    use career_model::JobPosition;

    use super::*;

    #[test]
    fn unset_position_is_required() {
        let preferences = Preferences {
            job_position: JobPosition::Unset,
            expected_salary: "50000".to_string(),
            preferred_location: "Kathmandu".to_string(),
        };
        let errors = validate_preferences(&preferences);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::JobPosition), Some("Job position is required"));
    }

    #[test]
    fn salary_must_be_positive() {
        for bad in ["0", "-100", "negotiable"] {
            let preferences = Preferences {
                job_position: JobPosition::Manager,
                expected_salary: bad.to_string(),
                preferred_location: "Pokhara".to_string(),
            };
            let errors = validate_preferences(&preferences);
            assert_eq!(
                errors.get(Field::ExpectedSalary),
                Some("Salary must be a positive number"),
                "{bad}"
            );
        }
    }
}
