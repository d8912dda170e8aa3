//! Uploaded document images.

use serde::{Deserialize, Serialize};

pub const MEDIA_TYPE_JPEG: &str = "image/jpeg";
pub const MEDIA_TYPE_PNG: &str = "image/png";

/// Handle to an image picked by the applicant.
///
/// Only the metadata the validators need is kept; the bytes stay with the
/// upload layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    /// Media type declared by the browser or client, e.g. `image/png`.
    pub media_type: String,
    pub size_bytes: u64,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size_bytes,
        }
    }

    pub fn jpeg(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self::new(file_name, MEDIA_TYPE_JPEG, size_bytes)
    }

    pub fn png(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self::new(file_name, MEDIA_TYPE_PNG, size_bytes)
    }
}
