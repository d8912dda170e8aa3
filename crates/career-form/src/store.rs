//! The application state store.
//!
//! [`reduce`] is a pure function from (state, action) to the next state. It
//! never fails: an update or removal that targets an unknown id leaves the
//! state unchanged. [`FormStore`] owns one state and applies actions to it.

use tracing::debug;

use career_model::ApplicationState;

use crate::action::Action;

/// Apply one action to `state`, returning the next state.
pub fn reduce(mut state: ApplicationState, action: Action) -> ApplicationState {
    match action {
        Action::SetCurrentStep(step) => state.current_step = step,
        Action::UpdatePersonalInfo(patch) => patch.apply_to(&mut state.personal_info),
        Action::UpdatePreferences(patch) => patch.apply_to(&mut state.preferences),
        Action::UpdateDocuments(patch) => patch.apply_to(&mut state.documents),
        Action::AddEducation(entry) => state.educations.push(entry),
        Action::UpdateEducation { id, patch } => {
            if let Some(entry) = state.educations.iter_mut().find(|entry| entry.id == id) {
                patch.apply_to(entry);
            }
        }
        Action::RemoveEducation(id) => state.educations.retain(|entry| entry.id != id),
        Action::AddWorkExperience(entry) => state.work_experiences.push(entry),
        Action::UpdateWorkExperience { id, patch } => {
            if let Some(entry) = state
                .work_experiences
                .iter_mut()
                .find(|entry| entry.id == id)
            {
                patch.apply_to(entry);
            }
        }
        Action::RemoveWorkExperience(id) => state.work_experiences.retain(|entry| entry.id != id),
        Action::ClearWorkExperiences => state.work_experiences.clear(),
        Action::SetIsSubmitting(value) => state.is_submitting = value,
        Action::SetIsSubmitted(value) => state.is_submitted = value,
        Action::SetErrors(errors) => state.errors = errors,
        Action::ClearErrors => state.errors.clear(),
    }
    state
}

/// Owner of one session's application state.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: ApplicationState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state, e.g. one read from a JSON document.
    pub fn from_state(state: ApplicationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn into_state(self) -> ApplicationState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), step = self.state.current_step, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_model::{EducationEntry, EducationPatch, Field, FieldErrors};

    fn education(id: &str, degree: &str) -> EducationEntry {
        EducationEntry {
            id: id.to_string(),
            degree: degree.to_string(),
            institution: "Tribhuvan University".to_string(),
            passing_year: "2018".to_string(),
            grade: "A".to_string(),
        }
    }

    #[test]
    fn update_education_merges_in_place() {
        let mut store = FormStore::new();
        store.dispatch(Action::AddEducation(education("edu-1", "SLC")));
        store.dispatch(Action::AddEducation(education("edu-2", "BBA")));
        store.dispatch(Action::UpdateEducation {
            id: "edu-2".to_string(),
            patch: EducationPatch {
                grade: Some("A+".to_string()),
                ..EducationPatch::default()
            },
        });

        let educations = &store.state().educations;
        assert_eq!(educations.len(), 2);
        assert_eq!(educations[0], education("edu-1", "SLC"));
        assert_eq!(educations[1].id, "edu-2");
        assert_eq!(educations[1].grade, "A+");
        assert_eq!(educations[1].degree, "BBA");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = FormStore::new();
        store.dispatch(Action::AddEducation(education("edu-1", "BBA")));
        let before = store.state().clone();

        store.dispatch(Action::UpdateEducation {
            id: "edu-9".to_string(),
            patch: EducationPatch {
                grade: Some("F".to_string()),
                ..EducationPatch::default()
            },
        });
        store.dispatch(Action::RemoveEducation("edu-9".to_string()));
        store.dispatch(Action::RemoveWorkExperience("exp-9".to_string()));

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn set_errors_replaces_rather_than_merges() {
        let mut store = FormStore::new();
        let mut first = FieldErrors::new();
        first.insert(Field::Name, "Name is required");
        store.dispatch(Action::SetErrors(first));

        let mut second = FieldErrors::new();
        second.insert(Field::Email, "Email is required");
        store.dispatch(Action::SetErrors(second.clone()));
        assert_eq!(store.state().errors, second);

        store.dispatch(Action::ClearErrors);
        assert!(store.state().errors.is_empty());
    }

    #[test]
    fn set_current_step_is_unchecked() {
        let state = reduce(ApplicationState::new(), Action::SetCurrentStep(9));
        assert_eq!(state.current_step, 9);
    }
}
