//! Reviewer dashboard state.
//!
//! Mirrors what the admin screen shows: the application list narrowed by a
//! search term and a status filter, counts per status, one open detail
//! record, and transient notices.

use std::io::Write;

use tracing::{info, warn};

use career_model::Notice;

use crate::backend::ReviewBackend;
use crate::error::Result;
use crate::export::{to_csv_string, write_csv};
use crate::record::{ApplicationDetails, ApplicationSummary, StatusCounts};
use crate::status::{ApplicationStatus, StatusFilter};

const LOAD_FAILED_MESSAGE: &str = "Failed to fetch applications";
const DETAILS_FAILED_MESSAGE: &str = "Failed to fetch application details";
const UPDATE_DECLINED_MESSAGE: &str = "Failed to update application status";
const UPDATE_FAILED_MESSAGE: &str = "An error occurred while updating status";

#[derive(Debug)]
pub struct ReviewDashboard<B> {
    backend: B,
    applications: Vec<ApplicationSummary>,
    search: String,
    filter: StatusFilter,
    selected: Option<ApplicationDetails>,
    loading: bool,
    updating_status: bool,
    notices: Vec<Notice>,
}

impl<B: ReviewBackend> ReviewDashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            applications: Vec::new(),
            search: String::new(),
            filter: StatusFilter::All,
            selected: None,
            loading: false,
            updating_status: false,
            notices: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch the application list.
    ///
    /// A failed fetch leaves an empty list and an error notice. Returns the
    /// number of applications loaded.
    pub fn load(&mut self) -> usize {
        self.loading = true;
        match self.backend.fetch_applications() {
            Ok(applications) => {
                info!(count = applications.len(), "applications loaded");
                self.applications = applications;
            }
            Err(error) => {
                warn!(%error, "failed to load applications");
                self.applications.clear();
                self.notices.push(Notice::error(LOAD_FAILED_MESSAGE));
            }
        }
        self.loading = false;
        self.applications.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_updating_status(&self) -> bool {
        self.updating_status
    }

    pub fn applications(&self) -> &[ApplicationSummary] {
        &self.applications
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Rows matching both the search term and the status filter, in list
    /// order.
    pub fn filtered(&self) -> Vec<&ApplicationSummary> {
        self.applications
            .iter()
            .filter(|row| row.matches_search(&self.search) && self.filter.matches(row.status))
            .collect()
    }

    /// Counts over the whole list, ignoring search and filter.
    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.applications)
    }

    pub fn selected(&self) -> Option<&ApplicationDetails> {
        self.selected.as_ref()
    }

    /// Load and open the detail record for `id`.
    ///
    /// An unknown id or a failed lookup closes the open record and leaves an
    /// error notice.
    pub fn open_details(&mut self, id: &str) -> Option<&ApplicationDetails> {
        match self.backend.application_details(id) {
            Ok(Some(details)) => {
                self.selected = Some(details);
            }
            Ok(None) => {
                warn!(id, "application not found");
                self.selected = None;
                self.notices.push(Notice::error(DETAILS_FAILED_MESSAGE));
            }
            Err(error) => {
                warn!(%error, id, "failed to load application details");
                self.selected = None;
                self.notices.push(Notice::error(DETAILS_FAILED_MESSAGE));
            }
        }
        self.selected.as_ref()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// Ask the backend to change a status, then update the cached row and
    /// the open detail record without refetching.
    ///
    /// Returns whether the change was accepted.
    pub fn update_status(&mut self, id: &str, status: ApplicationStatus) -> bool {
        self.updating_status = true;
        let accepted = match self.backend.update_status(id, status) {
            Ok(true) => {
                self.apply_status(id, status);
                info!(id, %status, "status updated");
                self.notices.push(Notice::success(format!(
                    "Application status updated to {status}"
                )));
                true
            }
            Ok(false) => {
                warn!(id, %status, "status update declined");
                self.notices.push(Notice::error(UPDATE_DECLINED_MESSAGE));
                false
            }
            Err(error) => {
                warn!(%error, id, "status update failed");
                self.notices.push(Notice::error(UPDATE_FAILED_MESSAGE));
                false
            }
        };
        self.updating_status = false;
        accepted
    }

    fn apply_status(&mut self, id: &str, status: ApplicationStatus) {
        for row in self.applications.iter_mut().filter(|row| row.id.as_str() == id) {
            row.status = status;
        }
        if let Some(details) = self.selected.as_mut()
            && details.summary.id.as_str() == id
        {
            details.summary.status = status;
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Write the filtered rows as CSV.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        write_csv(self.filtered(), writer)
    }

    pub fn export_csv_string(&self) -> Result<String> {
        to_csv_string(self.filtered())
    }
}
