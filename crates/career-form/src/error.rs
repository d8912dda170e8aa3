//! Error types for the wizard session.

use thiserror::Error;

use career_model::SettingsError;

/// Navigation and submission refusals.
///
/// Field validation failures are not errors: they land in
/// `ApplicationState::errors` instead.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    #[error("step {0} is outside the wizard")]
    StepOutOfRange(u8),

    #[error("already on the last step")]
    AtLastStep,

    #[error("already on the first step")]
    AtFirstStep,

    #[error("step {0} is not complete")]
    StepIncomplete(u8),

    #[error("cannot jump ahead to step {target} from step {current}")]
    CannotSkipAhead { current: u8, target: u8 },

    #[error("this action is only available on step {expected}, not step {actual}")]
    WrongStep { expected: u8, actual: u8 },

    #[error("submission is only possible from the summary step")]
    NotOnFinalStep,

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("no submission is in progress")]
    NoSubmissionInFlight,

    #[error("the application has already been submitted")]
    AlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, FormError>;
