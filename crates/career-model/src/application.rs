//! The in-progress application record and its typed partial updates.
//!
//! Each singleton entity has a matching `*Patch` struct. A patch holds only
//! the fields being changed; `apply_to` merges them shallowly, leaving every
//! `None` field untouched.

use serde::{Deserialize, Serialize};

use crate::enums::{JobPosition, Step};
use crate::field::FieldErrors;
use crate::upload::ImageUpload;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    /// Optional; not validated.
    pub name_nepali: String,
    /// Date of birth as entered, `YYYY-MM-DD`.
    pub dob: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    /// Empty until the entry is committed.
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub passing_year: String,
    pub grade: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceEntry {
    /// Empty until the entry is committed.
    pub id: String,
    pub company_name: String,
    pub designation: String,
    pub duration_months: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub job_position: JobPosition,
    pub expected_salary: String,
    pub preferred_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Documents {
    pub national_id_front: Option<ImageUpload>,
    pub national_id_back: Option<ImageUpload>,
    pub national_id_details: String,
}

/// Entire state of one application session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationState {
    pub current_step: u8,
    pub personal_info: PersonalInfo,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub preferences: Preferences,
    pub documents: Documents,
    pub is_submitting: bool,
    pub is_submitted: bool,
    /// Errors for the active step only.
    pub errors: FieldErrors,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            current_step: Step::PersonalInfo.number(),
            personal_info: PersonalInfo::default(),
            educations: Vec::new(),
            work_experiences: Vec::new(),
            preferences: Preferences::default(),
            documents: Documents::default(),
            is_submitting: false,
            is_submitted: false,
            errors: FieldErrors::default(),
        }
    }
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active step, if `current_step` is inside the wizard.
    pub fn step(&self) -> Option<Step> {
        Step::from_number(self.current_step)
    }

    pub fn education(&self, id: &str) -> Option<&EducationEntry> {
        self.educations.iter().find(|entry| entry.id == id)
    }

    pub fn work_experience(&self, id: &str) -> Option<&WorkExperienceEntry> {
        self.work_experiences.iter().find(|entry| entry.id == id)
    }
}

// =============================================================================
// PARTIAL UPDATES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub name_nepali: Option<String>,
    pub dob: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply_to(self, target: &mut PersonalInfo) {
        merge(&mut target.name, self.name);
        merge(&mut target.name_nepali, self.name_nepali);
        merge(&mut target.dob, self.dob);
        merge(&mut target.mobile, self.mobile);
        merge(&mut target.email, self.email);
        merge(&mut target.address, self.address);
    }
}

/// Changes to an education entry. The id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub passing_year: Option<String>,
    pub grade: Option<String>,
}

impl EducationPatch {
    /// Patch that overwrites every data field with the entry's values.
    pub fn from_entry(entry: EducationEntry) -> Self {
        Self {
            degree: Some(entry.degree),
            institution: Some(entry.institution),
            passing_year: Some(entry.passing_year),
            grade: Some(entry.grade),
        }
    }

    pub fn apply_to(self, target: &mut EducationEntry) {
        merge(&mut target.degree, self.degree);
        merge(&mut target.institution, self.institution);
        merge(&mut target.passing_year, self.passing_year);
        merge(&mut target.grade, self.grade);
    }
}

/// Changes to a work experience entry. The id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkExperiencePatch {
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub duration_months: Option<String>,
    pub responsibilities: Option<String>,
}

impl WorkExperiencePatch {
    pub fn from_entry(entry: WorkExperienceEntry) -> Self {
        Self {
            company_name: Some(entry.company_name),
            designation: Some(entry.designation),
            duration_months: Some(entry.duration_months),
            responsibilities: Some(entry.responsibilities),
        }
    }

    pub fn apply_to(self, target: &mut WorkExperienceEntry) {
        merge(&mut target.company_name, self.company_name);
        merge(&mut target.designation, self.designation);
        merge(&mut target.duration_months, self.duration_months);
        merge(&mut target.responsibilities, self.responsibilities);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub job_position: Option<JobPosition>,
    pub expected_salary: Option<String>,
    pub preferred_location: Option<String>,
}

impl PreferencesPatch {
    pub fn apply_to(self, target: &mut Preferences) {
        merge(&mut target.job_position, self.job_position);
        merge(&mut target.expected_salary, self.expected_salary);
        merge(&mut target.preferred_location, self.preferred_location);
    }
}

/// Changes to the documents step.
///
/// Image fields are doubly optional: `Some(None)` clears a picked image,
/// `None` leaves it as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentsPatch {
    pub national_id_front: Option<Option<ImageUpload>>,
    pub national_id_back: Option<Option<ImageUpload>>,
    pub national_id_details: Option<String>,
}

impl DocumentsPatch {
    pub fn apply_to(self, target: &mut Documents) {
        merge(&mut target.national_id_front, self.national_id_front);
        merge(&mut target.national_id_back, self.national_id_back);
        merge(&mut target.national_id_details, self.national_id_details);
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_first_step() {
        let state = ApplicationState::new();
        assert_eq!(state.current_step, 1);
        assert_eq!(state.step(), Some(Step::PersonalInfo));
        assert!(state.errors.is_empty());
        assert!(state.educations.is_empty());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut info = PersonalInfo {
            name: "Sita Sharma".to_string(),
            email: "sita@example.com".to_string(),
            ..PersonalInfo::default()
        };
        PersonalInfoPatch {
            mobile: Some("9812345678".to_string()),
            ..PersonalInfoPatch::default()
        }
        .apply_to(&mut info);

        assert_eq!(info.name, "Sita Sharma");
        assert_eq!(info.email, "sita@example.com");
        assert_eq!(info.mobile, "9812345678");
    }

    #[test]
    fn documents_patch_can_clear_an_image() {
        let mut documents = Documents {
            national_id_front: Some(ImageUpload::png("front.png", 1024)),
            ..Documents::default()
        };
        DocumentsPatch {
            national_id_front: Some(None),
            ..DocumentsPatch::default()
        }
        .apply_to(&mut documents);
        assert!(documents.national_id_front.is_none());
    }

    #[test]
    fn state_deserializes_from_partial_document() {
        let json = r#"{
            "currentStep": 2,
            "personalInfo": { "name": "Ram Thapa" },
            "educations": [{ "id": "edu-1", "degree": "BBA" }],
            "preferences": { "jobPosition": "Officer" }
        }"#;
        let state: ApplicationState = serde_json::from_str(json).expect("parse state");
        assert_eq!(state.current_step, 2);
        assert_eq!(state.personal_info.name, "Ram Thapa");
        assert_eq!(state.educations[0].degree, "BBA");
        assert_eq!(state.preferences.job_position, JobPosition::Officer);
        assert!(state.documents.national_id_front.is_none());
    }
}
