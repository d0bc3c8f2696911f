//! Birth date form validation.
//!
//! Field-level checks (required, range) are all collected. The calendar
//! checks (round-trip and "not in the future") only run once every field is
//! individually plausible.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const REQUIRED: &str = "This field is required";
pub const INVALID_DAY: &str = "Must be a valid day";
pub const INVALID_MONTH: &str = "Must be a valid month";
pub const INVALID_YEAR: &str = "Must be a valid year";
pub const YEAR_IN_FUTURE: &str = "Must be in the past";
pub const YEAR_TOO_EARLY: &str = "Must be after 1900";
pub const INVALID_DATE: &str = "Must be a valid date";
pub const DATE_IN_FUTURE: &str = "Date must be in the past";

/// Marks a field as erroneous without repeating a message already shown
/// on another field.
pub const PLACEHOLDER: &str = " ";

pub const MIN_YEAR: i32 = 1900;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Day,
    Month,
    Year,
    General,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::General => "general",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message. Empty means the input is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", self.summary())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the field should be styled as erroneous.
    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// The visible message for a field; placeholders yield `None`.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|msg| !msg.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub(crate) fn set(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn summary(&self) -> String {
        self.iter()
            .filter(|(_, msg)| !msg.trim().is_empty())
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate raw input against `today`. An empty result means valid.
pub fn validate(input: &DateInput, today: NaiveDate) -> ValidationErrors {
    parse_birth_date(input, today).err().unwrap_or_default()
}

/// Validate and, on success, return the birth date.
pub fn parse_birth_date(input: &DateInput, today: NaiveDate) -> Result<NaiveDate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let day = check_day(&input.day);
    let month = check_month(&input.month);
    let year = check_year(&input.year, today.year());

    if let Err(msg) = day {
        errors.set(Field::Day, msg);
    }
    if let Err(msg) = month {
        errors.set(Field::Month, msg);
    }
    if let Err(msg) = year {
        errors.set(Field::Year, msg);
    }

    let (Ok(day), Ok(month), Ok(year)) = (day, month, year) else {
        return Err(errors);
    };

    match round_trip(year, month, day) {
        None => {
            errors.set(Field::Day, INVALID_DATE);
            errors.set(Field::Month, PLACEHOLDER);
            errors.set(Field::Year, PLACEHOLDER);
            Err(errors)
        }
        Some(date) if date > today => {
            errors.set(Field::General, DATE_IN_FUTURE);
            errors.set(Field::Day, PLACEHOLDER);
            errors.set(Field::Month, PLACEHOLDER);
            errors.set(Field::Year, PLACEHOLDER);
            Err(errors)
        }
        Some(date) => Ok(date),
    }
}

/// Build the date and confirm the parts read back unchanged (rejects 31 April).
fn round_trip(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
}

fn number(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn check_day(raw: &str) -> Result<u32, &'static str> {
    if raw.trim().is_empty() {
        return Err(REQUIRED);
    }
    match number(raw) {
        Some(d) if (1..=31).contains(&d) => Ok(d as u32),
        _ => Err(INVALID_DAY),
    }
}

fn check_month(raw: &str) -> Result<u32, &'static str> {
    if raw.trim().is_empty() {
        return Err(REQUIRED);
    }
    match number(raw) {
        Some(m) if (1..=12).contains(&m) => Ok(m as u32),
        _ => Err(INVALID_MONTH),
    }
}

fn check_year(raw: &str, current_year: i32) -> Result<i32, &'static str> {
    if raw.trim().is_empty() {
        return Err(REQUIRED);
    }
    match number(raw) {
        None => Err(INVALID_YEAR),
        Some(y) if y > i64::from(current_year) => Err(YEAR_IN_FUTURE),
        Some(y) if y < i64::from(MIN_YEAR) => Err(YEAR_TOO_EARLY),
        Some(y) => Ok(y as i32),
    }
}
