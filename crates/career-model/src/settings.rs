//! Form settings - limits used by validation and navigation.
//!
//! Settings can be loaded from a TOML file. Missing keys fall back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::upload::{MEDIA_TYPE_JPEG, MEDIA_TYPE_PNG};

/// Five mebibytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Minimum applicant age in years (inclusive).
    pub min_age: i32,
    /// Maximum applicant age in years (inclusive).
    pub max_age: i32,
    /// Earliest accepted passing year (inclusive).
    pub min_passing_year: i32,
    /// Largest accepted document image.
    pub max_upload_bytes: u64,
    /// Media types accepted for document images.
    pub accepted_media_types: Vec<String>,
    /// Id prefixes for committed collection entries.
    pub entry_id_prefixes: EntryIdPrefixes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryIdPrefixes {
    pub education: String,
    pub work_experience: String,
}

impl Default for EntryIdPrefixes {
    fn default() -> Self {
        Self {
            education: "edu".to_string(),
            work_experience: "exp".to_string(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 65,
            min_passing_year: 1950,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_media_types: vec![MEDIA_TYPE_JPEG.to_string(), MEDIA_TYPE_PNG.to_string()],
            entry_id_prefixes: EntryIdPrefixes::default(),
        }
    }
}

impl FormSettings {
    /// Load and check settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no session can run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_age > self.max_age {
            return Err(SettingsError::Invalid(format!(
                "min_age ({}) exceeds max_age ({})",
                self.min_age, self.max_age
            )));
        }
        if self.max_upload_bytes == 0 {
            return Err(SettingsError::Invalid(
                "max_upload_bytes must be positive".to_string(),
            ));
        }
        if self.accepted_media_types.is_empty() {
            return Err(SettingsError::Invalid(
                "accepted_media_types must not be empty".to_string(),
            ));
        }
        if self.entry_id_prefixes.education.trim().is_empty()
            || self.entry_id_prefixes.work_experience.trim().is_empty()
        {
            return Err(SettingsError::Invalid(
                "entry id prefixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn accepts_media_type(&self, media_type: &str) -> bool {
        self.accepted_media_types
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(media_type.trim()))
    }

    /// Upload cap rendered for messages, e.g. `5MB`.
    pub fn max_upload_label(&self) -> String {
        let mib = self.max_upload_bytes / (1024 * 1024);
        if mib > 0 && self.max_upload_bytes % (1024 * 1024) == 0 {
            format!("{mib}MB")
        } else {
            format!("{} bytes", self.max_upload_bytes)
        }
    }
}
