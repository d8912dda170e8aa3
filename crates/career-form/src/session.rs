//! One applicant's pass through the wizard.
//!
//! [`FormSession`] owns the store, both collection editors and the id
//! generator, and is threaded explicitly through every step handler. It adds
//! the navigation gate and the submission flow on top of the raw store.

use serde::Serialize;
use tracing::{info, warn};

use career_model::{
    ApplicationId, ApplicationState, DocumentsPatch, Field, FieldErrors, FormSettings, Notice,
    PersonalInfoPatch, PreferencesPatch, Step,
};
use career_validate::{
    ValidationContext, first_incomplete_step, is_step_complete, validate_documents,
    validate_personal_info, validate_preferences, validate_step,
};

use crate::action::Action;
use crate::editor::{CommitOutcome, EducationEditor, WorkExperienceEditor};
use crate::error::{FormError, Result};
use crate::gateway::{ApplicationGateway, GatewayError, SubmissionResponse};
use crate::id::EntryIdGenerator;
use crate::store::FormStore;

const SUBMITTED_MESSAGE: &str = "Application submitted successfully!";
const REJECTED_FALLBACK_MESSAGE: &str = "Failed to submit application";
const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Active,
    Completed,
    Pending,
}

/// Progress indicator entry for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: Step,
    pub active: bool,
    pub completed: bool,
}

impl StepProgress {
    pub fn status(&self) -> StepStatus {
        if self.active {
            StepStatus::Active
        } else if self.completed {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSession {
    store: FormStore,
    /// Mirrors `current_step` in the store; only `go_to` moves it.
    step: Step,
    ctx: ValidationContext,
    education: EducationEditor,
    work_experience: WorkExperienceEditor,
    ids: EntryIdGenerator,
    notices: Vec<Notice>,
    application_id: Option<ApplicationId>,
}

impl FormSession {
    /// Start an empty session.
    ///
    /// Settings are checked first; a session is never built on top of
    /// settings that fail [`FormSettings::validate`].
    pub fn new(settings: FormSettings) -> Result<Self> {
        Self::with_context(ValidationContext::new(settings))
    }

    pub fn with_context(ctx: ValidationContext) -> Result<Self> {
        Self::from_state(ApplicationState::new(), ctx)
    }

    /// Resume a session from a saved state.
    ///
    /// A saved state cannot carry an in-flight submission: the request that
    /// set the flag belongs to another session.
    pub fn from_state(state: ApplicationState, ctx: ValidationContext) -> Result<Self> {
        ctx.settings.validate()?;
        if state.is_submitting {
            return Err(FormError::SubmissionInFlight);
        }
        let step = state
            .step()
            .ok_or(FormError::StepOutOfRange(state.current_step))?;
        Ok(Self {
            store: FormStore::from_state(state),
            step,
            ctx,
            education: EducationEditor::new(),
            work_experience: WorkExperienceEditor::new(),
            ids: EntryIdGenerator::new(),
            notices: Vec::new(),
            application_id: None,
        })
    }

    pub fn state(&self) -> &ApplicationState {
        self.store.state()
    }

    pub fn context(&self) -> &ValidationContext {
        &self.ctx
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Application id from the last successful submission.
    pub fn application_id(&self) -> Option<&ApplicationId> {
        self.application_id.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain pending notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn into_state(self) -> ApplicationState {
        self.store.into_state()
    }

    // =========================================================================
    // Singleton steps
    // =========================================================================

    /// Merge a personal info edit and revalidate the record.
    ///
    /// Only allowed while the personal info step is active, so the stored
    /// errors always belong to the step on screen.
    pub fn edit_personal_info(&mut self, patch: PersonalInfoPatch) -> Result<&FieldErrors> {
        self.require_step(Step::PersonalInfo)?;
        self.store.dispatch(Action::UpdatePersonalInfo(patch));
        let errors = validate_personal_info(&self.state().personal_info, &self.ctx);
        Ok(self.set_errors(errors))
    }

    pub fn edit_preferences(&mut self, patch: PreferencesPatch) -> Result<&FieldErrors> {
        self.require_step(Step::Preferences)?;
        self.store.dispatch(Action::UpdatePreferences(patch));
        let errors = validate_preferences(&self.state().preferences);
        Ok(self.set_errors(errors))
    }

    pub fn edit_documents(&mut self, patch: DocumentsPatch) -> Result<&FieldErrors> {
        self.require_step(Step::Documents)?;
        self.store.dispatch(Action::UpdateDocuments(patch));
        let errors = validate_documents(&self.state().documents, &self.ctx);
        Ok(self.set_errors(errors))
    }

    fn set_errors(&mut self, errors: FieldErrors) -> &FieldErrors {
        self.store.dispatch(Action::SetErrors(errors));
        &self.state().errors
    }

    fn require_step(&self, expected: Step) -> Result<()> {
        if self.step != expected {
            return Err(FormError::WrongStep {
                expected: expected.number(),
                actual: self.step.number(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Collection steps
    // =========================================================================

    pub fn education_editor(&self) -> &EducationEditor {
        &self.education
    }

    pub fn edit_education_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.education.edit_field(field, value, &self.ctx)
    }

    pub fn commit_education(&mut self) -> std::result::Result<CommitOutcome, FieldErrors> {
        self.education.commit(&mut self.store, &mut self.ids, &self.ctx)
    }

    pub fn begin_edit_education(&mut self, id: &str) -> bool {
        self.education.begin_edit(self.store.state(), id)
    }

    pub fn cancel_education_edit(&mut self) {
        self.education.cancel_edit();
    }

    pub fn remove_education(&mut self, id: &str) {
        self.education.remove(&mut self.store, id);
    }

    pub fn work_experience_editor(&self) -> &WorkExperienceEditor {
        &self.work_experience
    }

    pub fn edit_work_experience_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.work_experience.edit_field(field, value, &self.ctx)
    }

    pub fn commit_work_experience(&mut self) -> std::result::Result<CommitOutcome, FieldErrors> {
        self.work_experience
            .commit(&mut self.store, &mut self.ids, &self.ctx)
    }

    pub fn begin_edit_work_experience(&mut self, id: &str) -> bool {
        self.work_experience.begin_edit(self.store.state(), id)
    }

    pub fn cancel_work_experience_edit(&mut self) {
        self.work_experience.cancel_edit();
    }

    pub fn remove_work_experience(&mut self, id: &str) {
        self.work_experience.remove(&mut self.store, id);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance one step if the current step is complete.
    ///
    /// When it is not, the step's field errors are stored so they can be
    /// shown, and the step does not change.
    pub fn next(&mut self) -> Result<Step> {
        let current = self.current_step();
        if current.is_last() {
            return Err(FormError::AtLastStep);
        }
        if !is_step_complete(current.number(), self.state(), &self.ctx) {
            let errors = validate_step(current, self.state(), &self.ctx);
            self.store.dispatch(Action::SetErrors(errors));
            warn!(step = current.number(), "step incomplete");
            return Err(FormError::StepIncomplete(current.number()));
        }
        self.go_to(current.number() + 1)
    }

    pub fn previous(&mut self) -> Result<Step> {
        let current = self.current_step();
        if current == Step::PersonalInfo {
            return Err(FormError::AtFirstStep);
        }
        self.go_to(current.number() - 1)
    }

    /// Return to an earlier (or the current) step.
    pub fn jump_to(&mut self, step: u8) -> Result<Step> {
        let target = Step::from_number(step).ok_or(FormError::StepOutOfRange(step))?;
        let current = self.current_step();
        if target > current {
            return Err(FormError::CannotSkipAhead {
                current: current.number(),
                target: step,
            });
        }
        self.go_to(step)
    }

    /// Declare no work experience: drop every entry and move on to
    /// preferences.
    pub fn skip_work_experience(&mut self) -> Result<Step> {
        self.require_step(Step::WorkExperience)?;
        self.work_experience.cancel_edit();
        self.store.dispatch(Action::ClearWorkExperiences);
        self.go_to(Step::Preferences.number())
    }

    fn go_to(&mut self, step: u8) -> Result<Step> {
        let target = Step::from_number(step).ok_or(FormError::StepOutOfRange(step))?;
        self.store.dispatch(Action::SetCurrentStep(step));
        self.store.dispatch(Action::ClearErrors);
        self.step = target;
        info!(step = step, title = target.title(), "step changed");
        Ok(target)
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        let current = self.current_step();
        Step::ALL
            .into_iter()
            .map(|step| StepProgress {
                step,
                active: step == current,
                completed: step < current
                    || is_step_complete(step.number(), self.state(), &self.ctx),
            })
            .collect()
    }

    // =========================================================================
    // Submission
    // =========================================================================

    pub fn can_submit(&self) -> bool {
        self.submit_gate().is_ok()
    }

    fn submit_gate(&self) -> Result<()> {
        let state = self.state();
        if !self.current_step().is_last() {
            return Err(FormError::NotOnFinalStep);
        }
        if state.is_submitting {
            return Err(FormError::SubmissionInFlight);
        }
        if state.is_submitted {
            return Err(FormError::AlreadySubmitted);
        }
        if let Some(step) = first_incomplete_step(state, &self.ctx) {
            return Err(FormError::StepIncomplete(step.number()));
        }
        Ok(())
    }

    /// Mark a submission as in flight and return the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<ApplicationState> {
        self.submit_gate()?;
        self.store.dispatch(Action::SetIsSubmitting(true));
        info!("submission started");
        Ok(self.state().clone())
    }

    /// Apply the collaborator's answer to the submission started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// The in-flight flag is cleared whatever the outcome. Returns the
    /// application id on success.
    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<SubmissionResponse, GatewayError>,
    ) -> Result<Option<ApplicationId>> {
        if !self.state().is_submitting {
            return Err(FormError::NoSubmissionInFlight);
        }
        self.store.dispatch(Action::SetIsSubmitting(false));
        Ok(match outcome {
            Ok(response) if response.success => {
                let id = response
                    .application_id
                    .and_then(|id| ApplicationId::new(id).ok())
                    .unwrap_or_else(ApplicationId::placeholder);
                self.store.dispatch(Action::SetIsSubmitted(true));
                self.notices.push(Notice::success(SUBMITTED_MESSAGE));
                info!(application_id = %id, "application submitted");
                self.application_id = Some(id.clone());
                Some(id)
            }
            Ok(response) => {
                warn!(message = %response.message, "submission rejected");
                let message = if response.message.trim().is_empty() {
                    REJECTED_FALLBACK_MESSAGE.to_string()
                } else {
                    response.message
                };
                self.notices.push(Notice::error(message));
                None
            }
            Err(error) => {
                warn!(%error, "submission failed");
                self.notices.push(Notice::error(UNEXPECTED_FAILURE_MESSAGE));
                None
            }
        })
    }

    /// Submit through `gateway`: begin, call, finish.
    pub fn submit<G>(&mut self, gateway: &G) -> Result<Option<ApplicationId>>
    where
        G: ApplicationGateway + ?Sized,
    {
        let snapshot = self.begin_submit()?;
        let outcome = gateway.submit(&snapshot);
        self.finish_submit(outcome)
    }
}
