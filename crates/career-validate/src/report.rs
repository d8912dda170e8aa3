//! Whole-application completion report.
//!
//! Collects every finding for steps 1 through 5 in one structure, for
//! front ends that show the state of the wizard at a glance.

use serde::Serialize;

use career_model::{ApplicationState, Field, FieldErrors, Step};

use crate::ValidationContext;
use crate::checks::{
    validate_documents, validate_education, validate_personal_info, validate_preferences,
    validate_work_experience,
};
use crate::completion::is_step_complete;

/// One field error, optionally tied to a collection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Id of the education or work experience entry, for collection steps.
    pub entry: Option<String>,
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub complete: bool,
    pub findings: Vec<Finding>,
    /// Step-level reason not tied to a field.
    pub note: Option<String>,
}

impl StepReport {
    pub fn error_count(&self) -> usize {
        self.findings.len() + usize::from(self.note.is_some())
    }
}

/// Report for every data step, in wizard order.
pub fn completion_report(state: &ApplicationState, ctx: &ValidationContext) -> Vec<StepReport> {
    Step::ALL
        .into_iter()
        .filter(|step| *step != Step::Summary)
        .map(|step| step_report(step, state, ctx))
        .collect()
}

fn step_report(step: Step, state: &ApplicationState, ctx: &ValidationContext) -> StepReport {
    let mut findings = Vec::new();
    let mut note = None;

    match step {
        Step::PersonalInfo => {
            push_findings(&mut findings, None, validate_personal_info(&state.personal_info, ctx));
        }
        Step::Education => {
            if state.educations.is_empty() {
                note = Some("At least one education entry is required".to_string());
            }
            for entry in &state.educations {
                push_findings(
                    &mut findings,
                    Some(entry.id.as_str()),
                    validate_education(entry, ctx),
                );
            }
        }
        Step::WorkExperience => {
            for entry in &state.work_experiences {
                push_findings(
                    &mut findings,
                    Some(entry.id.as_str()),
                    validate_work_experience(entry),
                );
            }
        }
        Step::Preferences => {
            push_findings(&mut findings, None, validate_preferences(&state.preferences));
        }
        Step::Documents => {
            push_findings(&mut findings, None, validate_documents(&state.documents, ctx));
        }
        Step::Summary => {}
    }

    StepReport {
        step,
        complete: is_step_complete(step.number(), state, ctx),
        findings,
        note,
    }
}

fn push_findings(findings: &mut Vec<Finding>, entry: Option<&str>, errors: FieldErrors) {
    findings.extend(errors.into_iter().map(|(field, message)| Finding {
        entry: entry.map(str::to_string),
        field,
        message,
    }));
}
