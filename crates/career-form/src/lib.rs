//! Application state store and wizard session.
//!
//! The store applies a closed set of [`Action`]s to an
//! [`ApplicationState`](career_model::ApplicationState). The collection
//! editors and [`FormSession`] build the interactive workflow on top: draft
//! entries, step navigation, and submission through an
//! [`ApplicationGateway`].

mod action;
mod editor;
mod error;
mod gateway;
mod id;
mod session;
mod store;

pub use action::Action;
pub use editor::{
    CollectionEditor, CollectionEntry, CommitOutcome, EducationEditor, WorkExperienceEditor,
};
pub use error::{FormError, Result};
pub use gateway::{ApplicationGateway, GatewayError, MockGateway, SubmissionResponse};
pub use id::EntryIdGenerator;
pub use session::{FormSession, StepProgress, StepStatus};
pub use store::{FormStore, reduce};
