//! Review service collaborator and its in-process mock.

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use career_model::{
    ApplicationId, EducationEntry, JobPosition, PersonalInfo, Preferences, WorkExperienceEntry,
};

use crate::error::{Result, ReviewError};
use crate::record::{ApplicationDetails, ApplicationSummary, DocumentFiles};
use crate::status::ApplicationStatus;

pub trait ReviewBackend {
    fn fetch_applications(&self) -> Result<Vec<ApplicationSummary>>;

    /// Full record for `id`, or `None` if no application has that id.
    fn application_details(&self, id: &str) -> Result<Option<ApplicationDetails>>;

    /// Change an application's status. Returns `false` if the service
    /// declined the change.
    fn update_status(&mut self, id: &str, status: ApplicationStatus) -> Result<bool>;
}

/// Backend seeded with a fixed set of applications.
#[derive(Debug, Clone)]
pub struct MockReviewBackend {
    applications: Vec<ApplicationSummary>,
    offline: bool,
}

impl Default for MockReviewBackend {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MockReviewBackend {
    pub fn seeded() -> Self {
        Self {
            applications: seed_applications(),
            offline: false,
        }
    }

    /// Backend whose every call fails.
    pub fn offline() -> Self {
        Self {
            applications: Vec::new(),
            offline: true,
        }
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline {
            return Err(ReviewError::Backend("review service unavailable".to_string()));
        }
        Ok(())
    }
}

impl ReviewBackend for MockReviewBackend {
    fn fetch_applications(&self) -> Result<Vec<ApplicationSummary>> {
        self.ensure_online()?;
        debug!(count = self.applications.len(), "mock fetch");
        Ok(self.applications.clone())
    }

    fn application_details(&self, id: &str) -> Result<Option<ApplicationDetails>> {
        self.ensure_online()?;
        Ok(self
            .applications
            .iter()
            .find(|row| row.id.as_str() == id)
            .map(synthesize_details))
    }

    fn update_status(&mut self, id: &str, status: ApplicationStatus) -> Result<bool> {
        self.ensure_online()?;
        let Some(row) = self.applications.iter_mut().find(|row| row.id.as_str() == id) else {
            return Ok(false);
        };
        row.status = status;
        Ok(true)
    }
}

/// Fill in a detail record around a listed application.
fn synthesize_details(summary: &ApplicationSummary) -> ApplicationDetails {
    ApplicationDetails {
        personal_info: PersonalInfo {
            name: summary.name.clone(),
            name_nepali: "नाम थर".to_string(),
            dob: "1990-01-01".to_string(),
            mobile: "9876543210".to_string(),
            email: summary.email.clone(),
            address: "Kathmandu, Nepal".to_string(),
        },
        educations: vec![EducationEntry {
            id: "edu-1".to_string(),
            degree: "Bachelor of Business Administration".to_string(),
            institution: "Tribhuvan University".to_string(),
            passing_year: "2018".to_string(),
            grade: "A".to_string(),
        }],
        work_experiences: vec![WorkExperienceEntry {
            id: "exp-1".to_string(),
            company_name: "ABC Company".to_string(),
            designation: "Junior Officer".to_string(),
            duration_months: "24".to_string(),
            responsibilities: "Handled customer service and administrative tasks".to_string(),
        }],
        preferences: Preferences {
            job_position: summary.position,
            expected_salary: "50000".to_string(),
            preferred_location: "Kathmandu".to_string(),
        },
        documents: DocumentFiles {
            national_id_front: "id-front.jpg".to_string(),
            national_id_back: "id-back.jpg".to_string(),
            national_id_details: "ID number: 12345678".to_string(),
        },
        summary: summary.clone(),
    }
}

fn seed_applications() -> Vec<ApplicationSummary> {
    [
        (
            123_456,
            "John Doe",
            "john.doe@example.com",
            JobPosition::Officer,
            ApplicationStatus::Pending,
            utc(2023, 6, 15, 10, 30),
        ),
        (
            234_567,
            "Jane Smith",
            "jane.smith@example.com",
            JobPosition::Manager,
            ApplicationStatus::Reviewed,
            utc(2023, 6, 14, 9, 15),
        ),
        (
            345_678,
            "Robert Johnson",
            "robert.johnson@example.com",
            JobPosition::Assistant,
            ApplicationStatus::Rejected,
            utc(2023, 6, 13, 14, 45),
        ),
        (
            456_789,
            "Emily Williams",
            "emily.williams@example.com",
            JobPosition::Officer,
            ApplicationStatus::Shortlisted,
            utc(2023, 6, 12, 11, 20),
        ),
        (
            567_890,
            "Michael Brown",
            "michael.brown@example.com",
            JobPosition::Manager,
            ApplicationStatus::Pending,
            utc(2023, 6, 11, 16, 0),
        ),
    ]
    .into_iter()
    .filter_map(|(serial, name, email, position, status, submitted_at)| {
        Some(ApplicationSummary {
            id: ApplicationId::from_serial(serial).ok()?,
            name: name.to_string(),
            email: email.to_string(),
            position,
            status,
            submitted_at: submitted_at?,
        })
    })
    .collect()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_applications() {
        let backend = MockReviewBackend::seeded();
        let rows = backend.fetch_applications().expect("fetch");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id.as_str(), "APP-123456");
        assert_eq!(rows[0].submitted_at.to_rfc3339(), "2023-06-15T10:30:00+00:00");
        assert_eq!(rows[4].name, "Michael Brown");
    }

    #[test]
    fn details_wrap_the_listed_row() {
        let backend = MockReviewBackend::seeded();
        let details = backend
            .application_details("APP-456789")
            .expect("fetch")
            .expect("known id");
        assert_eq!(details.summary.name, "Emily Williams");
        assert_eq!(details.personal_info.name, "Emily Williams");
        assert_eq!(details.preferences.job_position, JobPosition::Officer);
        assert_eq!(details.documents.national_id_front, "id-front.jpg");
        assert!(backend.application_details("APP-000001").expect("fetch").is_none());
    }

    #[test]
    fn status_updates_are_recorded() {
        let mut backend = MockReviewBackend::seeded();
        assert!(backend
            .update_status("APP-123456", ApplicationStatus::Shortlisted)
            .expect("update"));
        assert!(!backend
            .update_status("APP-999999", ApplicationStatus::Rejected)
            .expect("update"));
        let rows = backend.fetch_applications().expect("fetch");
        assert_eq!(rows[0].status, ApplicationStatus::Shortlisted);
    }

    #[test]
    fn offline_backend_fails_every_call() {
        let mut backend = MockReviewBackend::offline();
        assert!(backend.fetch_applications().is_err());
        assert!(backend.application_details("APP-123456").is_err());
        assert!(backend
            .update_status("APP-123456", ApplicationStatus::Reviewed)
            .is_err());
    }
}
