//! Submission collaborator.
//!
//! The session hands a snapshot of the finished application to an
//! [`ApplicationGateway`] and applies its response. [`MockGateway`] stands in
//! for the real service.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use career_model::{ApplicationId, ApplicationState};

/// Reply from the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl SubmissionResponse {
    pub fn accepted(application_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Application submitted successfully".to_string(),
            application_id: Some(application_id.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            application_id: None,
        }
    }
}

/// The submission call itself failed (as opposed to being rejected).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

pub trait ApplicationGateway {
    fn submit(&self, application: &ApplicationState) -> Result<SubmissionResponse, GatewayError>;
}

/// In-process gateway that accepts every application, or rejects every one
/// with a fixed message.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    failure: Option<String>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }
}

impl ApplicationGateway for MockGateway {
    fn submit(&self, application: &ApplicationState) -> Result<SubmissionResponse, GatewayError> {
        debug!(
            educations = application.educations.len(),
            work_experiences = application.work_experiences.len(),
            "mock submission"
        );
        if let Some(message) = &self.failure {
            return Ok(SubmissionResponse::rejected(message.clone()));
        }
        // Six-digit serial in 100000..=999999
        let serial = 100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32;
        Ok(SubmissionResponse::accepted(format!(
            "{}{serial}",
            ApplicationId::PREFIX
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_issues_six_digit_ids() {
        let gateway = MockGateway::new();
        for _ in 0..20 {
            let response = gateway.submit(&ApplicationState::new()).expect("submit");
            assert!(response.success);
            let id = response.application_id.expect("id present");
            assert!(ApplicationId::new(&id).is_ok(), "bad id {id}");
            assert!(!id.starts_with("APP-0"));
        }
    }

    #[test]
    fn failing_mock_rejects_with_message() {
        let gateway = MockGateway::failing("Service closed");
        let response = gateway.submit(&ApplicationState::new()).expect("submit");
        assert!(!response.success);
        assert_eq!(response.message, "Service closed");
        assert_eq!(response.application_id, None);
    }

    #[test]
    fn response_reads_camel_case() {
        let response: SubmissionResponse = serde_json::from_str(
            r#"{"success":true,"message":"ok","applicationId":"APP-123456"}"#,
        )
        .expect("parse");
        assert_eq!(response.application_id.as_deref(), Some("APP-123456"));
    }
}
