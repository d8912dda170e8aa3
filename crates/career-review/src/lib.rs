//! Admin review of submitted applications.
//!
//! A [`ReviewDashboard`] sits on top of a [`ReviewBackend`] and keeps the
//! list, filters, open detail record and notices a reviewer works with.

mod backend;
mod dashboard;
mod error;
mod export;
mod record;
mod status;

pub use backend::{MockReviewBackend, ReviewBackend};
pub use dashboard::ReviewDashboard;
pub use error::{Result, ReviewError};
pub use export::{to_csv_string, write_csv};
pub use record::{ApplicationDetails, ApplicationSummary, DocumentFiles, StatusCounts};
pub use status::{ApplicationStatus, StatusFilter};
