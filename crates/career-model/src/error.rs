use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid application id: {0:?} (expected APP-######)")]
    InvalidApplicationId(String),
    #[error("unknown job position: {0}")]
    UnknownJobPosition(String),
    #[error("step {0} is outside the wizard")]
    InvalidStep(u8),
}

/// Errors raised while loading or checking [`crate::FormSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
