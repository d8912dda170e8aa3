use std::fmt;

use crate::ModelError;

/// Identifier assigned to a submitted application, shaped `APP-######`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    pub const PREFIX: &'static str = "APP-";

    /// Shown when a collaborator reports success without a usable id.
    pub const PLACEHOLDER: &'static str = "APP-000000";

    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix(Self::PREFIX).unwrap_or_default();
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidApplicationId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build an id from a six-digit serial number.
    pub fn from_serial(serial: u32) -> Result<Self, ModelError> {
        Self::new(format!("{}{serial:06}", Self::PREFIX))
    }

    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationId> for String {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_digit_ids() {
        let id = ApplicationId::new("APP-123456").unwrap();
        assert_eq!(id.as_str(), "APP-123456");
        assert_eq!(ApplicationId::from_serial(42).unwrap().as_str(), "APP-000042");
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["APP-12345", "APP-1234567", "app-123456", "APP-12a456", ""] {
            assert!(ApplicationId::new(bad).is_err(), "{bad} should be rejected");
        }
        assert!(ApplicationId::from_serial(1_000_000).is_err());
    }
}
