//! Field validators, payload helpers and conversion of `validator` reports into issues.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::ValidationIssue;
use crate::types::{ist_nicht_negativ, ist_positiv};

/// Deserializes an optional field that must not be `null` when present.
///
/// Use with `#[serde(default, deserialize_with = "present")]` on partial
/// update payloads: an omitted key stays `None`, an explicit `null` fails.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Rejects blank strings (after trimming).
pub fn nicht_leer(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty"));
        error.add_param(Cow::Borrowed("expected"), &"non-empty string");
        error.add_param(Cow::Borrowed("value"), &value);
        return Err(error);
    }
    Ok(())
}

/// Requires an amount strictly greater than zero.
pub fn positiv(value: &Decimal) -> Result<(), ValidationError> {
    if ist_positiv(*value) {
        Ok(())
    } else {
        Err(amount_error("not_positive", "must be greater than 0", "> 0", value))
    }
}

/// Requires an amount of zero or more.
pub fn nicht_negativ(value: &Decimal) -> Result<(), ValidationError> {
    if ist_nicht_negativ(*value) {
        Ok(())
    } else {
        Err(amount_error("negative", "must not be negative", ">= 0", value))
    }
}

fn amount_error(
    code: &'static str,
    message: &'static str,
    expected: &'static str,
    value: &Decimal,
) -> ValidationError {
    let mut error = ValidationError::new(code).with_message(Cow::Borrowed(message));
    error.add_param(Cow::Borrowed("expected"), &expected);
    error.add_param(Cow::Borrowed("value"), &value.to_string());
    error
}

/// Flattens a `validator` report into issues sorted by path.
#[must_use]
pub fn issues_from(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    collect(errors, "", &mut issues);
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

fn collect(errors: &ValidationErrors, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                issues.extend(field_errors.iter().map(|error| issue_from(&path, error)));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, issues),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}.{index}"), issues);
                }
            }
        }
    }
}

fn issue_from(path: &str, error: &ValidationError) -> ValidationIssue {
    let message = error
        .message
        .as_ref()
        .map_or_else(|| default_message(error), ToString::to_string);

    let expected = error
        .params
        .get("expected")
        .map(json_text)
        .or_else(|| length_expectation(error));
    let received = error.params.get("value").map(json_text);

    ValidationIssue {
        path: path.to_string(),
        message,
        expected,
        received,
    }
}

fn default_message(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        code => format!("failed `{code}` check"),
    }
}

fn length_expectation(error: &ValidationError) -> Option<String> {
    if error.code != "length" {
        return None;
    }
    match (error.params.get("min"), error.params.get("max")) {
        (Some(min), Some(max)) => Some(format!("{min}..={max} characters")),
        (Some(min), None) => Some(format!("at least {min} characters")),
        (None, Some(max)) => Some(format!("at most {max} characters")),
        (None, None) => None,
    }
}

fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
