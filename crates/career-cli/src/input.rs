//! Reading settings and application documents from disk.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use career_model::{ApplicationState, FormSettings};

use crate::logging::redact_value;

/// Settings from `path`, or the defaults when no file was given.
pub fn load_settings(path: Option<&Path>) -> Result<FormSettings> {
    let Some(path) = path else {
        debug!("using default settings");
        return Ok(FormSettings::default());
    };
    let settings = FormSettings::load_from(path)
        .with_context(|| format!("load settings from {}", path.display()))?;
    info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Read an application document (camelCase JSON).
pub fn read_application(path: &Path) -> Result<ApplicationState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read application {}", path.display()))?;
    let state = parse_application(&content)
        .with_context(|| format!("parse application {}", path.display()))?;
    debug!(
        applicant = redact_value(&state.personal_info.name),
        educations = state.educations.len(),
        work_experiences = state.work_experiences.len(),
        "application read"
    );
    Ok(state)
}

pub fn parse_application(content: &str) -> Result<ApplicationState> {
    Ok(serde_json::from_str(content)?)
}
