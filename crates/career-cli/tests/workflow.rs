//! Integration tests for the non-interactive workflow.

use std::path::{Path, PathBuf};

use career_cli::input::{load_settings, parse_application, read_application};
use career_cli::workflow::{SubmitOutcome, check_application, submit_application};
use career_form::MockGateway;
use career_model::{NoticeKind, Step};
use career_validate::ValidationContext;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn ctx() -> ValidationContext {
    ValidationContext::default().with_current_year(2026)
}

#[test]
fn complete_application_is_ready() {
    let state = read_application(&fixture("complete_application.json")).expect("read");
    let result = check_application(&state, &ctx());
    assert!(result.is_ready());
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.steps.len(), 5);
}

#[test]
fn incomplete_application_reports_every_step() {
    let state = read_application(&fixture("incomplete_application.json")).expect("read");
    let result = check_application(&state, &ctx());
    assert_eq!(result.first_incomplete, Some(Step::PersonalInfo));
    insta::assert_json_snapshot!(result, @r#"
    {
      "steps": [
        {
          "step": "PersonalInfo",
          "complete": false,
          "findings": [
            {
              "entry": null,
              "field": "name",
              "message": "Name should contain alphabets only"
            },
            {
              "entry": null,
              "field": "dob",
              "message": "You must be at least 18 years old"
            },
            {
              "entry": null,
              "field": "mobile",
              "message": "Mobile number must be 10 digits"
            }
          ],
          "note": null
        },
        {
          "step": "Education",
          "complete": false,
          "findings": [],
          "note": "At least one education entry is required"
        },
        {
          "step": "WorkExperience",
          "complete": true,
          "findings": [],
          "note": null
        },
        {
          "step": "Preferences",
          "complete": false,
          "findings": [
            {
              "entry": null,
              "field": "expectedSalary",
              "message": "Salary must be a positive number"
            }
          ],
          "note": null
        },
        {
          "step": "Documents",
          "complete": false,
          "findings": [
            {
              "entry": null,
              "field": "nationalIdFront",
              "message": "Only JPG and PNG files are allowed"
            },
            {
              "entry": null,
              "field": "nationalIdBack",
              "message": "National ID Back image is required"
            }
          ],
          "note": null
        }
      ],
      "first_incomplete": "PersonalInfo"
    }
    "#);
}

#[test]
fn complete_application_submits_through_the_wizard() {
    let state = read_application(&fixture("complete_application.json")).expect("read");
    let outcome = submit_application(state, ctx(), &MockGateway::new()).expect("submit");
    let SubmitOutcome::Submitted {
        application_id,
        notices,
    } = outcome
    else {
        panic!("expected submission, got {outcome:?}");
    };
    assert!(application_id.as_str().starts_with("APP-"));
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[test]
fn submission_stops_at_first_incomplete_step() {
    let mut state = read_application(&fixture("complete_application.json")).expect("read");
    state.educations.clear();
    let outcome = submit_application(state, ctx(), &MockGateway::new()).expect("submit");
    match outcome {
        SubmitOutcome::Blocked { step, reason, .. } => {
            assert_eq!(step, Step::Education);
            assert_eq!(reason, "step 2 is not complete");
        }
        other => panic!("expected a blocked run, got {other:?}"),
    }
}

#[test]
fn rejected_submission_reports_the_message() {
    let state = read_application(&fixture("complete_application.json")).expect("read");
    let gateway = MockGateway::failing("Vacancy closed");
    let outcome = submit_application(state, ctx(), &gateway).expect("submit");
    let SubmitOutcome::Failed { notices } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(notices[0].message, "Vacancy closed");
    assert!(notices[0].is_error());
}

#[test]
fn malformed_document_is_an_error() {
    assert!(parse_application("{\"currentStep\": \"two\"}").is_err());
}

#[test]
fn missing_settings_file_is_reported() {
    let error = load_settings(Some(Path::new("/nonexistent/career.toml"))).unwrap_err();
    assert!(format!("{error:#}").contains("load settings from /nonexistent/career.toml"));
    assert_eq!(load_settings(None).expect("defaults").max_age, 65);
}
