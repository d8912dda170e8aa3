//! Non-interactive runs of the wizard over a complete application document.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, warn};

use career_form::{ApplicationGateway, FormSession};
use career_model::{ApplicationId, ApplicationState, FieldErrors, Notice, Step};
use career_validate::{StepReport, ValidationContext, completion_report, first_incomplete_step};

/// Outcome of checking every step of an application.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub steps: Vec<StepReport>,
    pub first_incomplete: Option<Step>,
}

impl CheckResult {
    pub fn is_ready(&self) -> bool {
        self.first_incomplete.is_none()
    }

    pub fn error_count(&self) -> usize {
        self.steps.iter().map(StepReport::error_count).sum()
    }
}

pub fn check_application(state: &ApplicationState, ctx: &ValidationContext) -> CheckResult {
    CheckResult {
        steps: completion_report(state, ctx),
        first_incomplete: first_incomplete_step(state, ctx),
    }
}

/// What happened when an application was walked through the wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Navigation stopped before the summary step.
    Blocked {
        step: Step,
        reason: String,
        errors: FieldErrors,
    },
    Submitted {
        application_id: ApplicationId,
        notices: Vec<Notice>,
    },
    /// The gateway rejected the application or could not be reached.
    Failed { notices: Vec<Notice> },
}

/// Walk `state` from the first step to the summary with the navigation
/// gate, then submit it through `gateway`.
pub fn submit_application<G>(
    state: ApplicationState,
    ctx: ValidationContext,
    gateway: &G,
) -> Result<SubmitOutcome>
where
    G: ApplicationGateway + ?Sized,
{
    let span = info_span!("submit");
    let _guard = span.enter();

    let state = ApplicationState {
        current_step: Step::PersonalInfo.number(),
        is_submitting: false,
        is_submitted: false,
        errors: FieldErrors::new(),
        ..state
    };
    let mut session = FormSession::from_state(state, ctx)?;

    while !session.current_step().is_last() {
        let step = session.current_step();
        if let Err(error) = session.next() {
            warn!(step = step.number(), %error, "wizard stopped");
            return Ok(SubmitOutcome::Blocked {
                step,
                reason: error.to_string(),
                errors: session.state().errors.clone(),
            });
        }
    }

    let submitted = session.submit(gateway)?;
    let notices = session.take_notices();
    Ok(match submitted {
        Some(application_id) => {
            info!(application_id = %application_id, "submitted");
            SubmitOutcome::Submitted {
                application_id,
                notices,
            }
        }
        None => SubmitOutcome::Failed { notices },
    })
}
