//! Per-entity validators.
//!
//! Each validator returns only the fields that fail. An empty map means the
//! record is valid.

mod documents;
mod education;
mod personal;
mod preferences;
mod work;

pub use documents::{check_image, validate_documents};
pub use education::validate_education;
pub use personal::{age_in_years, validate_personal_info};
pub use preferences::validate_preferences;
pub use work::validate_work_experience;

pub(crate) use education::passing_year_issue as education_year_issue;
pub(crate) use work::duration_issue as work_duration_issue;

use career_model::{Field, FieldErrors};

use crate::issue::{FieldIssue, report};

/// Report `Required` for every listed field whose value is empty.
fn require_all(errors: &mut FieldErrors, fields: &[(Field, &str)]) {
    for (field, value) in fields {
        if value.is_empty() {
            report(errors, *field, &FieldIssue::Required);
        }
    }
}
