//! Update operations accepted by the application store.
//!
//! Every change to an [`ApplicationState`](career_model::ApplicationState)
//! is expressed as one of these variants and applied by
//! [`reduce`](crate::reduce).

use career_model::{
    DocumentsPatch, EducationEntry, EducationPatch, FieldErrors, PersonalInfoPatch,
    PreferencesPatch, WorkExperienceEntry, WorkExperiencePatch,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Replace the current step. Bounds are checked by the session, not here.
    SetCurrentStep(u8),

    // =========================================================================
    // Singleton records
    // =========================================================================
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdatePreferences(PreferencesPatch),
    UpdateDocuments(DocumentsPatch),

    // =========================================================================
    // Collections
    // =========================================================================
    /// Append an entry. The caller supplies its id.
    AddEducation(EducationEntry),
    /// Merge into the entry with `id`; unknown ids are ignored.
    UpdateEducation { id: String, patch: EducationPatch },
    /// Drop the entry with this id; unknown ids are ignored.
    RemoveEducation(String),

    AddWorkExperience(WorkExperienceEntry),
    UpdateWorkExperience {
        id: String,
        patch: WorkExperiencePatch,
    },
    RemoveWorkExperience(String),
    /// Drop every work experience entry.
    ClearWorkExperiences,

    // =========================================================================
    // Submission and errors
    // =========================================================================
    SetIsSubmitting(bool),
    SetIsSubmitted(bool),
    /// Replace the error mapping wholesale.
    SetErrors(FieldErrors),
    ClearErrors,
}

impl Action {
    /// Variant name, safe to log (carries no field values).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetCurrentStep(_) => "set_current_step",
            Action::UpdatePersonalInfo(_) => "update_personal_info",
            Action::UpdatePreferences(_) => "update_preferences",
            Action::UpdateDocuments(_) => "update_documents",
            Action::AddEducation(_) => "add_education",
            Action::UpdateEducation { .. } => "update_education",
            Action::RemoveEducation(_) => "remove_education",
            Action::AddWorkExperience(_) => "add_work_experience",
            Action::UpdateWorkExperience { .. } => "update_work_experience",
            Action::RemoveWorkExperience(_) => "remove_work_experience",
            Action::ClearWorkExperiences => "clear_work_experiences",
            Action::SetIsSubmitting(_) => "set_is_submitting",
            Action::SetIsSubmitted(_) => "set_is_submitted",
            Action::SetErrors(_) => "set_errors",
            Action::ClearErrors => "clear_errors",
        }
    }
}
