//! Field keys and the field-error mapping.
//!
//! Every validator reports its findings as a [`FieldErrors`] map keyed by
//! [`Field`]. An empty map means the record is valid.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A form field that can carry an error message.
///
/// Serialized names match the keys used in application JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Personal information
    Name,
    NameNepali,
    Dob,
    Mobile,
    Email,
    Address,

    // Education / work experience entries
    Id,
    Degree,
    Institution,
    PassingYear,
    Grade,
    CompanyName,
    Designation,
    DurationMonths,
    Responsibilities,

    // Preferences
    JobPosition,
    ExpectedSalary,
    PreferredLocation,

    // Documents
    NationalIdFront,
    NationalIdBack,
    NationalIdDetails,
}

impl Field {
    /// Key as it appears in serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::NameNepali => "nameNepali",
            Field::Dob => "dob",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Address => "address",
            Field::Id => "id",
            Field::Degree => "degree",
            Field::Institution => "institution",
            Field::PassingYear => "passingYear",
            Field::Grade => "grade",
            Field::CompanyName => "companyName",
            Field::Designation => "designation",
            Field::DurationMonths => "durationMonths",
            Field::Responsibilities => "responsibilities",
            Field::JobPosition => "jobPosition",
            Field::ExpectedSalary => "expectedSalary",
            Field::PreferredLocation => "preferredLocation",
            Field::NationalIdFront => "nationalIdFront",
            Field::NationalIdBack => "nationalIdBack",
            Field::NationalIdDetails => "nationalIdDetails",
        }
    }

    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::NameNepali => "Name in Nepali",
            Field::Dob => "Date of Birth",
            Field::Mobile => "Mobile number",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::Id => "Id",
            Field::Degree => "Degree",
            Field::Institution => "Institution",
            Field::PassingYear => "Passing year",
            Field::Grade => "Grade",
            Field::CompanyName => "Company name",
            Field::Designation => "Designation",
            Field::DurationMonths => "Duration",
            Field::Responsibilities => "Responsibilities",
            Field::JobPosition => "Job position",
            Field::ExpectedSalary => "Expected salary",
            Field::PreferredLocation => "Preferred location",
            Field::NationalIdFront => "National ID Front image",
            Field::NationalIdBack => "National ID Back image",
            Field::NationalIdDetails => "National ID details",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of field to human-readable error message.
///
/// At most one message is held per field; inserting again replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, String);
    type IntoIter = btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_message() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::NationalIdFront, "first");
        errors.insert(Field::NationalIdFront, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::NationalIdFront), Some("second"));
    }

    #[test]
    fn serializes_with_document_keys() {
        let errors: FieldErrors = [(Field::PassingYear, "Passing year is required".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&errors).expect("serialize errors");
        assert_eq!(json, r#"{"passingYear":"Passing year is required"}"#);
    }
}
