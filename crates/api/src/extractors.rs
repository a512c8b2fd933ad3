//! Request extractors that reject with the validation envelope.
//!
//! Every rejection here is a 400 `VALIDATION_ERROR` carrying at least one
//! issue, so malformed bodies, wrong types and bad path parameters all look the
//! same to the client as schema violations.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use kontor_shared::validation::issues_from;
use kontor_shared::{AppError, ValidationIssue};

use crate::ApiError;

const SERDE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON body that has been deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| invalid(vec![json_issue(&rejection)]))?;

        value
            .validate()
            .map_err(|errors| invalid(issues_from(&errors)))?;

        Ok(Self(value))
    }
}

/// A single positive integer path parameter (`{id}`, `{kunde_id}`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid(vec![ValidationIssue::new("", rejection.body_text())]))?;

        let Some((name, raw)) = params.into_iter().next_back() else {
            return Err(invalid(vec![ValidationIssue::new("", "missing path parameter")]));
        };

        parse_id(&raw).map(Self).ok_or_else(|| {
            invalid(vec![
                ValidationIssue::new(name, "must be a positive integer")
                    .with_detail("positive integer", raw),
            ])
        })
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

fn invalid(issues: Vec<ValidationIssue>) -> ApiError {
    ApiError(AppError::validation(issues))
}

/// Turns a body rejection into an issue, recovering the field path when serde
/// reported one.
fn json_issue(rejection: &JsonRejection) -> ValidationIssue {
    let text = rejection.body_text();
    let detail = text.strip_prefix(SERDE_PREFIX).unwrap_or(&text);

    if let Some(field) = detail
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field)
    {
        return ValidationIssue::new(field, "is required");
    }

    match detail.split_once(": ") {
        Some((path, message)) if !path.is_empty() && !path.contains(char::is_whitespace) => {
            ValidationIssue::new(path, message)
        }
        _ => ValidationIssue::new("", detail),
    }
}
