//! Lenient numeric readers for form input.
//!
//! Both readers skip leading whitespace and read the longest numeric prefix,
//! ignoring whatever follows (`"2019 (expected)"` reads as 2019).

use std::sync::LazyLock;

use regex::Regex;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("Invalid integer prefix regex"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")
        .expect("Invalid float prefix regex")
});

/// Read a leading integer. Out-of-range magnitudes saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let found = INT_PREFIX.find(input.trim_start())?.as_str();
    match found.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if found.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Read a leading decimal number.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let found = FLOAT_PREFIX.find(input.trim_start())?.as_str();
    found.parse::<f64>().ok()
}
