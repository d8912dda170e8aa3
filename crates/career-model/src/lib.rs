pub mod application;
pub mod enums;
pub mod error;
pub mod field;
pub mod ids;
pub mod notice;
pub mod settings;
pub mod upload;

pub use application::{
    ApplicationState, Documents, DocumentsPatch, EducationEntry, EducationPatch, PersonalInfo,
    PersonalInfoPatch, Preferences, PreferencesPatch, WorkExperienceEntry, WorkExperiencePatch,
};
pub use enums::{JobPosition, Step};
pub use error::{ModelError, Result, SettingsError};
pub use field::{Field, FieldErrors};
pub use ids::ApplicationId;
pub use notice::{Notice, NoticeKind};
pub use settings::{DEFAULT_MAX_UPLOAD_BYTES, EntryIdPrefixes, FormSettings};
pub use upload::{ImageUpload, MEDIA_TYPE_JPEG, MEDIA_TYPE_PNG};
