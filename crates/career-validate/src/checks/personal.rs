//! Personal information checks (step 1).

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;

use career_model::{Field, FieldErrors, PersonalInfo};

use crate::ValidationContext;
use crate::issue::{FieldIssue, report};

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name regex"));

static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid mobile regex"));

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub fn validate_personal_info(info: &PersonalInfo, ctx: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if info.name.is_empty() {
        report(&mut errors, Field::Name, &FieldIssue::Required);
    } else if !NAME_REGEX.is_match(&info.name) {
        report(&mut errors, Field::Name, &FieldIssue::NotAlphabetic);
    }

    // name_nepali is free text

    if info.dob.is_empty() {
        report(&mut errors, Field::Dob, &FieldIssue::Required);
    } else {
        match age_in_years(&info.dob, ctx.current_year) {
            None => report(&mut errors, Field::Dob, &FieldIssue::InvalidDate),
            Some(age) if age < ctx.settings.min_age => report(
                &mut errors,
                Field::Dob,
                &FieldIssue::Underage {
                    min_age: ctx.settings.min_age,
                },
            ),
            Some(age) if age > ctx.settings.max_age => {
                report(&mut errors, Field::Dob, &FieldIssue::OverAge);
            }
            Some(_) => {}
        }
    }

    if info.mobile.is_empty() {
        report(&mut errors, Field::Mobile, &FieldIssue::Required);
    } else if !MOBILE_REGEX.is_match(&info.mobile) {
        report(&mut errors, Field::Mobile, &FieldIssue::InvalidMobile);
    }

    if info.email.is_empty() {
        report(&mut errors, Field::Email, &FieldIssue::Required);
    } else if !EMAIL_REGEX.is_match(&info.email) {
        report(&mut errors, Field::Email, &FieldIssue::InvalidEmail);
    }

    if info.address.is_empty() {
        report(&mut errors, Field::Address, &FieldIssue::Required);
    }

    errors
}

/// Age implied by a date of birth, counting calendar years only.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Month and day are ignored,
/// so someone born in December is counted a year older all year.
pub fn age_in_years(dob: &str, current_year: i32) -> Option<i32> {
    let dob = dob.trim();
    let birth_year = NaiveDate::parse_from_str(dob, "%Y-%m-%d")
        .map(|date| date.year())
        .or_else(|_| DateTime::parse_from_rfc3339(dob).map(|dt| dt.year()))
        .ok()?;
    Some(current_year - birth_year)
}
