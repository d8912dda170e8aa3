//! Document upload checks (step 5).
//!
//! Each image gets at most one message. When several checks fail the
//! priority is: missing, then oversize, then unsupported media type.

use career_model::{Documents, Field, FieldErrors, FormSettings, ImageUpload};

use crate::ValidationContext;
use crate::issue::{FieldIssue, report};

pub fn validate_documents(documents: &Documents, ctx: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let images = [
        (Field::NationalIdFront, documents.national_id_front.as_ref()),
        (Field::NationalIdBack, documents.national_id_back.as_ref()),
    ];
    for (field, upload) in images {
        if let Some(issue) = check_image(upload, &ctx.settings) {
            report(&mut errors, field, &issue);
        }
    }

    // national_id_details is optional

    errors
}

/// The highest-priority issue with one image slot, if any.
pub fn check_image(upload: Option<&ImageUpload>, settings: &FormSettings) -> Option<FieldIssue> {
    let Some(upload) = upload else {
        return Some(FieldIssue::Required);
    };
    if upload.size_bytes > settings.max_upload_bytes {
        return Some(FieldIssue::FileTooLarge {
            limit: settings.max_upload_label(),
        });
    }
    if !settings.accepts_media_type(&upload.media_type) {
        return Some(FieldIssue::UnsupportedMediaType);
    }
    None
}

#[cfg(test)]
mod tests {
    use career_model::DEFAULT_MAX_UPLOAD_BYTES;

    use super::*;

    #[test]
    fn size_limit_is_inclusive() {
        let settings = FormSettings::default();
        let at_limit = ImageUpload::jpeg("front.jpg", DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(check_image(Some(&at_limit), &settings), None);
        let over = ImageUpload::jpeg("front.jpg", DEFAULT_MAX_UPLOAD_BYTES + 1);
        assert!(matches!(
            check_image(Some(&over), &settings),
            Some(FieldIssue::FileTooLarge { .. })
        ));
    }

    #[test]
    fn oversize_takes_priority_over_media_type() {
        let settings = FormSettings::default();
        let gif = ImageUpload::new("front.gif", "image/gif", 8 * 1024 * 1024);
        let issue = check_image(Some(&gif), &settings).expect("issue");
        assert_eq!(
            issue.message(Field::NationalIdFront),
            "File size should not exceed 5MB"
        );

        let small_gif = ImageUpload::new("front.gif", "image/gif", 1024);
        assert_eq!(
            check_image(Some(&small_gif), &settings),
            Some(FieldIssue::UnsupportedMediaType)
        );
    }
}
