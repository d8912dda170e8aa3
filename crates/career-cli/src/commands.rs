use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use career_cli::input::{load_settings, read_application};
use career_cli::logging::redact_value;
use career_cli::workflow::{SubmitOutcome, check_application, submit_application};
use career_form::MockGateway;
use career_review::{ApplicationStatus, MockReviewBackend, ReviewDashboard, StatusFilter};
use career_validate::ValidationContext;

use crate::cli::{ApplicationArgs, ListArgs, SubmitArgs};
use crate::summary::{
    print_applications, print_check_result, print_details, print_notices, print_submit_outcome,
};

fn validation_context(config: Option<&Path>, args: &ApplicationArgs) -> Result<ValidationContext> {
    let settings = load_settings(config)?;
    let ctx = ValidationContext::new(settings);
    Ok(match args.current_year {
        Some(year) => ctx.with_current_year(year),
        None => ctx,
    })
}

/// Returns whether every step is complete.
pub fn run_validate(config: Option<&Path>, args: &ApplicationArgs) -> Result<bool> {
    let ctx = validation_context(config, args)?;
    let state = read_application(&args.file)?;
    let span = info_span!("validate", applicant = redact_value(&state.personal_info.name));
    let _guard = span.enter();

    let result = check_application(&state, &ctx);
    info!(errors = result.error_count(), ready = result.is_ready(), "checked");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_check_result(&result);
    }
    Ok(result.is_ready())
}

/// Returns whether the application was submitted.
pub fn run_submit(config: Option<&Path>, args: &SubmitArgs) -> Result<bool> {
    let ctx = validation_context(config, &args.application)?;
    let state = read_application(&args.application.file)?;
    let gateway = match &args.reject_with {
        Some(message) => MockGateway::failing(message.clone()),
        None => MockGateway::new(),
    };

    let outcome = submit_application(state, ctx, &gateway)?;
    if args.application.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_submit_outcome(&outcome);
    }
    Ok(matches!(outcome, SubmitOutcome::Submitted { .. }))
}

fn dashboard(list: &ListArgs) -> Result<ReviewDashboard<MockReviewBackend>> {
    let filter: StatusFilter = list
        .status
        .parse()
        .with_context(|| format!("invalid --status '{}'", list.status))?;
    let mut dashboard = ReviewDashboard::new(MockReviewBackend::seeded());
    dashboard.load();
    print_notices(&dashboard.take_notices());
    dashboard.set_status_filter(filter);
    if let Some(search) = &list.search {
        dashboard.set_search(search.clone());
    }
    Ok(dashboard)
}

pub fn run_review_list(list: &ListArgs) -> Result<()> {
    let dashboard = dashboard(list)?;
    print_applications(&dashboard.filtered(), &dashboard.status_counts());
    Ok(())
}

pub fn run_review_show(id: &str) -> Result<()> {
    let mut dashboard = ReviewDashboard::new(MockReviewBackend::seeded());
    let Some(details) = dashboard.open_details(id).cloned() else {
        print_notices(&dashboard.take_notices());
        bail!("application {id} not found");
    };
    print_details(&details);
    Ok(())
}

pub fn run_review_set_status(id: &str, status: &str) -> Result<bool> {
    let status: ApplicationStatus = status.parse()?;
    let mut dashboard = dashboard(&ListArgs {
        search: None,
        status: "all".to_string(),
    })?;
    let accepted = dashboard.update_status(id, status);
    print_notices(&dashboard.take_notices());
    if accepted {
        print_applications(&dashboard.filtered(), &dashboard.status_counts());
    }
    Ok(accepted)
}

pub fn run_review_export(list: &ListArgs, output: Option<&Path>) -> Result<()> {
    let dashboard = dashboard(list)?;
    let written = match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let written = dashboard.export_csv(&mut writer)?;
            writer.flush()?;
            written
        }
        None => dashboard.export_csv(io::stdout().lock())?,
    };
    info!(rows = written, "export complete");
    Ok(())
}
