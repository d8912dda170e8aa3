//! Step completion predicates.

use career_model::{ApplicationState, FieldErrors, Step};

use crate::ValidationContext;
use crate::checks::{
    validate_documents, validate_education, validate_personal_info, validate_preferences,
    validate_work_experience,
};

/// Whether the data behind `step` is satisfied.
///
/// The summary step and any number outside 1..=5 are never complete: there is
/// nothing to validate there, and the submit gate uses
/// [`all_steps_complete`] instead.
pub fn is_step_complete(step: u8, state: &ApplicationState, ctx: &ValidationContext) -> bool {
    match Step::from_number(step) {
        Some(Step::PersonalInfo) => validate_personal_info(&state.personal_info, ctx).is_empty(),
        Some(Step::Education) => {
            !state.educations.is_empty()
                && state
                    .educations
                    .iter()
                    .all(|entry| validate_education(entry, ctx).is_empty())
        }
        // Optional step: no entries passes, but any entry present must be valid
        Some(Step::WorkExperience) => state
            .work_experiences
            .iter()
            .all(|entry| validate_work_experience(entry).is_empty()),
        Some(Step::Preferences) => validate_preferences(&state.preferences).is_empty(),
        Some(Step::Documents) => validate_documents(&state.documents, ctx).is_empty(),
        Some(Step::Summary) | None => false,
    }
}

/// Steps 1 through 5 are all complete.
pub fn all_steps_complete(state: &ApplicationState, ctx: &ValidationContext) -> bool {
    first_incomplete_step(state, ctx).is_none()
}

/// The earliest data step that is not complete.
pub fn first_incomplete_step(state: &ApplicationState, ctx: &ValidationContext) -> Option<Step> {
    Step::ALL
        .into_iter()
        .filter(|step| *step != Step::Summary)
        .find(|step| !is_step_complete(step.number(), state, ctx))
}

/// Field errors to display for a singleton step.
///
/// Collection steps and the summary report nothing here; their errors live in
/// the collection editors.
pub fn validate_step(step: Step, state: &ApplicationState, ctx: &ValidationContext) -> FieldErrors {
    match step {
        Step::PersonalInfo => validate_personal_info(&state.personal_info, ctx),
        Step::Preferences => validate_preferences(&state.preferences),
        Step::Documents => validate_documents(&state.documents, ctx),
        Step::Education | Step::WorkExperience | Step::Summary => FieldErrors::new(),
    }
}
