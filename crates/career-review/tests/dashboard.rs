//! Dashboard behaviour against the seeded mock backend.

use career_model::NoticeKind;
use career_review::{
    ApplicationStatus, MockReviewBackend, ReviewBackend, ReviewDashboard, StatusFilter,
};

fn loaded() -> ReviewDashboard<MockReviewBackend> {
    let mut dashboard = ReviewDashboard::new(MockReviewBackend::seeded());
    assert_eq!(dashboard.load(), 5);
    assert!(!dashboard.is_loading());
    dashboard
}

fn ids(dashboard: &ReviewDashboard<MockReviewBackend>) -> Vec<String> {
    dashboard
        .filtered()
        .iter()
        .map(|row| row.id.to_string())
        .collect()
}

#[test]
fn search_matches_name_email_and_id() {
    let mut dashboard = loaded();

    dashboard.set_search("SMITH");
    assert_eq!(ids(&dashboard), ["APP-234567"]);

    dashboard.set_search("emily.williams@");
    assert_eq!(ids(&dashboard), ["APP-456789"]);

    dashboard.set_search("app-5");
    assert_eq!(ids(&dashboard), ["APP-567890"]);

    dashboard.set_search("");
    assert_eq!(dashboard.filtered().len(), 5);
}

#[test]
fn search_and_status_filter_combine() {
    let mut dashboard = loaded();
    dashboard.set_status_filter("pending".parse().expect("filter"));
    assert_eq!(ids(&dashboard), ["APP-123456", "APP-567890"]);

    dashboard.set_search("brown");
    assert_eq!(ids(&dashboard), ["APP-567890"]);

    dashboard.set_status_filter(StatusFilter::Only(ApplicationStatus::Rejected));
    assert!(dashboard.filtered().is_empty());
}

#[test]
fn counts_cover_the_whole_list() {
    let mut dashboard = loaded();
    dashboard.set_search("john");
    let counts = dashboard.status_counts();
    assert_eq!(counts.total, 5);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.reviewed, 1);
    assert_eq!(counts.shortlisted, 1);
    assert_eq!(counts.rejected, 1);
    assert_eq!(counts.get(ApplicationStatus::Pending), 2);
}

#[test]
fn status_update_is_applied_to_row_and_open_details() {
    let mut dashboard = loaded();
    let details = dashboard.open_details("APP-123456").expect("known id");
    assert_eq!(details.status(), ApplicationStatus::Pending);

    assert!(dashboard.update_status("APP-123456", ApplicationStatus::Shortlisted));
    assert!(!dashboard.is_updating_status());
    assert_eq!(
        dashboard.selected().map(|details| details.status()),
        Some(ApplicationStatus::Shortlisted)
    );
    assert_eq!(dashboard.applications()[0].status, ApplicationStatus::Shortlisted);
    assert_eq!(dashboard.status_counts().shortlisted, 2);

    let backend_rows = dashboard.backend().fetch_applications().expect("fetch");
    assert_eq!(backend_rows[0].status, ApplicationStatus::Shortlisted);

    let notices = dashboard.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].message, "Application status updated to Shortlisted");
}

#[test]
fn declined_update_leaves_cache_alone() {
    let mut dashboard = loaded();
    assert!(!dashboard.update_status("APP-999999", ApplicationStatus::Rejected));
    assert!(!dashboard.is_updating_status());
    assert_eq!(dashboard.status_counts().rejected, 1);
    assert!(dashboard.notices()[0].is_error());
}

#[test]
fn unknown_details_clear_selection_and_report() {
    let mut dashboard = loaded();
    assert!(dashboard.open_details("APP-234567").is_some());
    assert!(dashboard.open_details("APP-999999").is_none());
    assert!(dashboard.selected().is_none());
    assert_eq!(dashboard.notices().len(), 1);
    assert!(dashboard.notices()[0].is_error());
    assert_eq!(
        dashboard.notices()[0].message,
        "Failed to fetch application details"
    );

    dashboard.open_details("APP-234567");
    dashboard.close_details();
    assert!(dashboard.selected().is_none());
}

#[test]
fn offline_backend_yields_empty_list_and_notice() {
    let mut dashboard = ReviewDashboard::new(MockReviewBackend::offline());
    assert_eq!(dashboard.load(), 0);
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.notices()[0].message, "Failed to fetch applications");

    assert!(!dashboard.update_status("APP-123456", ApplicationStatus::Reviewed));
    assert!(!dashboard.is_updating_status());
    assert_eq!(
        dashboard.notices()[1].message,
        "An error occurred while updating status"
    );
}

#[test]
fn csv_export_uses_filtered_rows() {
    let mut dashboard = loaded();
    dashboard.set_status_filter(StatusFilter::Only(ApplicationStatus::Pending));
    let csv = dashboard.export_csv_string().expect("export");
    insta::assert_snapshot!(csv, @r"
    id,name,email,position,status,submitted_at
    APP-123456,John Doe,john.doe@example.com,Officer,Pending,2023-06-15T10:30:00+00:00
    APP-567890,Michael Brown,michael.brown@example.com,Manager,Pending,2023-06-11T16:00:00+00:00
    ");
}

#[test]
fn details_serialize_flat() {
    let dashboard = loaded();
    let details = dashboard
        .backend()
        .application_details("APP-345678")
        .expect("fetch")
        .expect("known id");
    let json = serde_json::to_value(&details).expect("serialize");
    assert_eq!(json["id"], "APP-345678");
    assert_eq!(json["status"], "Rejected");
    assert_eq!(json["personalInfo"]["address"], "Kathmandu, Nepal");
    assert_eq!(json["educations"][0]["degree"], "Bachelor of Business Administration");
    assert_eq!(json["documents"]["nationalIdBack"], "id-back.jpg");
}
