//! Type-safe enumerations for the application wizard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Wizard step, numbered 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    PersonalInfo,
    Education,
    WorkExperience,
    Preferences,
    Documents,
    Summary,
}

impl Step {
    /// All steps in navigation order.
    pub const ALL: [Step; 6] = [
        Step::PersonalInfo,
        Step::Education,
        Step::WorkExperience,
        Step::Preferences,
        Step::Documents,
        Step::Summary,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: u8 = 6;

    /// One-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::Education => 2,
            Step::WorkExperience => 3,
            Step::Preferences => 4,
            Step::Documents => 5,
            Step::Summary => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn is_last(&self) -> bool {
        self.number() == Self::COUNT
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Education => "Education",
            Step::WorkExperience => "Work Experience",
            Step::Preferences => "Preferences",
            Step::Documents => "Documents",
            Step::Summary => "Summary",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(ModelError::InvalidStep(value))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Position the applicant is applying for.
///
/// `Unset` is the initial selection and fails the required check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobPosition {
    #[default]
    #[serde(rename = "")]
    Unset,
    Assistant,
    Officer,
    Manager,
}

impl JobPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobPosition::Unset => "",
            JobPosition::Assistant => "Assistant",
            JobPosition::Officer => "Officer",
            JobPosition::Manager => "Manager",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, JobPosition::Unset)
    }
}

impl fmt::Display for JobPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobPosition {
    type Err = ModelError;

    /// Case-insensitive; the empty string parses to `Unset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(JobPosition::Unset),
            "assistant" => Ok(JobPosition::Assistant),
            "officer" => Ok(JobPosition::Officer),
            "manager" => Ok(JobPosition::Manager),
            _ => Err(ModelError::UnknownJobPosition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(7), None);
    }

    #[test]
    fn job_position_parses_case_insensitively() {
        assert_eq!("OFFICER".parse::<JobPosition>().unwrap(), JobPosition::Officer);
        assert_eq!("".parse::<JobPosition>().unwrap(), JobPosition::Unset);
        assert!("Director".parse::<JobPosition>().is_err());
    }

    #[test]
    fn unset_position_serializes_as_empty_string() {
        let json = serde_json::to_string(&JobPosition::Unset).unwrap();
        assert_eq!(json, r#""""#);
    }
}
