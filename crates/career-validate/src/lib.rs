//! Validation and step completion for the job application wizard.
//!
//! Validators are pure: they read a sub-record of the application and return
//! a [`FieldErrors`](career_model::FieldErrors) map. Completion predicates
//! build on them to decide whether the wizard may move past a step.

mod checks;
mod completion;
mod interactive;
mod issue;
mod parse;
mod report;

pub use checks::{
    age_in_years, check_image, validate_documents, validate_education, validate_personal_info,
    validate_preferences, validate_work_experience,
};
pub use completion::{all_steps_complete, first_incomplete_step, is_step_complete, validate_step};
pub use interactive::{education_field_hint, work_experience_field_hint};
pub use issue::FieldIssue;
pub use parse::{parse_leading_float, parse_leading_int};
pub use report::{Finding, StepReport, completion_report};

use chrono::{Datelike, Local};

use career_model::FormSettings;

/// Inputs the validators need beyond the record itself.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Year used for age and passing-year checks.
    pub current_year: i32,
    pub settings: FormSettings,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}

impl ValidationContext {
    /// Context for today's date in the local timezone.
    pub fn new(settings: FormSettings) -> Self {
        Self {
            current_year: Local::now().year(),
            settings,
        }
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }
}
