//! Application records as seen by reviewers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use career_model::{
    ApplicationId, EducationEntry, JobPosition, PersonalInfo, Preferences, WorkExperienceEntry,
};

use crate::status::ApplicationStatus;

/// One row of the applications list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub position: JobPosition,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationSummary {
    /// Case-insensitive substring match over name, email and id.
    ///
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.id.as_str().to_lowercase().contains(&term)
    }
}

/// Stored document references. Reviewers only see file names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFiles {
    pub national_id_front: String,
    pub national_id_back: String,
    pub national_id_details: String,
}

/// Full record shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(flatten)]
    pub summary: ApplicationSummary,
    pub personal_info: PersonalInfo,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub preferences: Preferences,
    pub documents: DocumentFiles,
}

impl ApplicationDetails {
    pub fn id(&self) -> &ApplicationId {
        &self.summary.id
    }

    pub fn status(&self) -> ApplicationStatus {
        self.summary.status
    }
}

/// Number of applications per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub shortlisted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally<'a>(rows: impl IntoIterator<Item = &'a ApplicationSummary>) -> Self {
        let mut counts = Self::default();
        for row in rows {
            counts.total += 1;
            match row.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Reviewed => counts.reviewed += 1,
                ApplicationStatus::Shortlisted => counts.shortlisted += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Pending => self.pending,
            ApplicationStatus::Reviewed => self.reviewed,
            ApplicationStatus::Shortlisted => self.shortlisted,
            ApplicationStatus::Rejected => self.rejected,
        }
    }
}
