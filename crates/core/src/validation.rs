//! Custom field rules for `validator` derive schemas and error flattening.
//!
//! Every rule here has the `fn(&T) -> Result<(), ValidationError>` shape the
//! derive expects; when the field is an `Option<T>`, the derive only calls
//! the rule for `Some`.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidateEmail, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::datetime::{DateInput, DateTimeInput};
use crate::enums::{BookingStatus, Decade, EmbedType, MediaType};
use crate::storage;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn one_of(value: &str, allowed: &'static [&'static str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(error(
            "one_of",
            format!("Must be one of: {}", allowed.join(", ")),
        ))
    }
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// An absolute URL, or the empty string (field explicitly cleared).
pub fn url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(error("url", "Invalid URL"))
    }
}

/// An email address, or the empty string (field explicitly cleared).
pub fn email_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(error("email", "Invalid email address"))
    }
}

/// A string with at least one non-whitespace character.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("required", "Must not be empty"))
    } else {
        Ok(())
    }
}

/// A datetime that parsed successfully.
pub fn datetime(value: &DateTimeInput) -> Result<(), ValidationError> {
    match value.value() {
        Some(_) => Ok(()),
        None => Err(error("datetime", "Invalid date")),
    }
}

/// A datetime that parsed successfully, or an empty string (cleared).
pub fn datetime_or_empty(value: &DateTimeInput) -> Result<(), ValidationError> {
    if value.is_blank() {
        Ok(())
    } else {
        datetime(value)
    }
}

/// A calendar date that parsed successfully.
pub fn date(value: &DateInput) -> Result<(), ValidationError> {
    match value.value() {
        Some(_) => Ok(()),
        None => Err(error("date", "Invalid date")),
    }
}

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

pub fn booking_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, BookingStatus::ALL)
}

pub fn embed_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, EmbedType::ALL)
}

pub fn decade(value: &str) -> Result<(), ValidationError> {
    one_of(value, Decade::ALL)
}

/// A decade, or the empty string (field explicitly cleared).
pub fn decade_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Ok(())
    } else {
        decade(value)
    }
}

pub fn media_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, MediaType::ALL)
}

pub fn upload_content_type(value: &str) -> Result<(), ValidationError> {
    if storage::is_allowed_content_type(value) {
        Ok(())
    } else {
        Err(error("content_type", "File type not allowed"))
    }
}

// ---------------------------------------------------------------------------
// Error flattening
// ---------------------------------------------------------------------------

/// Struct fields whose JSON name is set with `#[serde(rename)]` rather than
/// derived from `rename_all = "camelCase"`.
const RENAMED_FIELDS: &[(&str, &str)] = &[("media_type", "type")];

/// Flatten `validator` errors into `{"fieldName": ["message", ...]}`.
///
/// Keys are the JSON names the client sent (see [`wire_name`]); nested struct fields are
/// joined with `.` and list items with `[index]`.
pub fn flatten_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    collect(errors, None, &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut BTreeMap<String, Vec<String>>) {
    for (field, kind) in errors.errors() {
        let name = wire_name(field.as_ref());
        let path = match prefix {
            Some(p) => format!("{p}.{name}"),
            None => name,
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(path).or_insert_with(Vec::new);
                messages.extend(field_errors.iter().map(describe));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

fn describe(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => match err.code.as_ref() {
            "length" => match err.params.get("min") {
                Some(min) => format!("Must be at least {min} characters"),
                None => "Invalid length".to_string(),
            },
            "range" => match err.params.get("min") {
                Some(min) => format!("Must be at least {min}"),
                None => "Out of range".to_string(),
            },
            "email" => "Invalid email address".to_string(),
            "url" => "Invalid URL".to_string(),
            other => format!("Invalid value ({other})"),
        },
    }
}

/// JSON name of a DTO field: its explicit rename, else its camelCase form.
pub fn wire_name(field: &str) -> String {
    RENAMED_FIELDS
        .iter()
        .find(|(rust, _)| *rust == field)
        .map(|(_, wire)| (*wire).to_string())
        .unwrap_or_else(|| to_camel_case(field))
}

/// `bio_short` -> `bioShort`.
pub fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
