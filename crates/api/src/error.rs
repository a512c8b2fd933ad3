//! Conversion of application errors into the failure envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use kontor_core::auth::{AccessError, PasswordError};
use kontor_db::RepositoryError;
use kontor_shared::{AppError, ValidationIssue};

/// Error returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// `{ "success": false, "error": ..., "code": ..., "issues": [...] }`
#[derive(Debug, Serialize)]
struct Failure<'a> {
    success: bool,
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    issues: Option<&'a [ValidationIssue]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let app = self.0;
        let status =
            StatusCode::from_u16(app.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &app {
            AppError::Database(_) | AppError::Internal(_) => {
                error!(error = %app, "Request failed");
                "An internal error occurred".to_string()
            }
            AppError::Validation { message, .. } => message.clone(),
            AppError::Unauthorized(message)
            | AppError::Forbidden(message)
            | AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Conflict(message) => message.clone(),
        };

        let issues = match &app {
            AppError::Validation { issues, .. } => Some(issues.as_slice()),
            _ => None,
        };

        let body = Failure {
            success: false,
            error: message,
            code: app.error_code(),
            issues,
        };
        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self(match err {
            RepositoryError::NotFound { entity, id } => {
                AppError::NotFound(format!("{entity} {id} not found"))
            }
            RepositoryError::Conflict(message) => AppError::Conflict(message),
            RepositoryError::Precondition(message) => AppError::BadRequest(message),
            RepositoryError::Database(db) => AppError::Database(db.to_string()),
        })
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self(AppError::Forbidden(err.to_string()))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self(match err {
            PasswordError::TooShort { min } => AppError::validation(vec![ValidationIssue {
                path: "password".to_string(),
                message: err.to_string(),
                expected: Some(format!("at least {min} characters")),
                received: None,
            }]),
            _ => AppError::Internal(err.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use sea_orm::DbErr;

    async fn body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let err = ApiError::from(RepositoryError::NotFound {
            entity: "Kunde",
            id: 9,
        });
        let (status, json) = body(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "Kunde 9 not found");
        assert!(json.get("issues").is_none());
    }

    #[tokio::test]
    async fn test_validation_envelope_lists_issues() {
        let err = ApiError(AppError::validation(vec![ValidationIssue::new(
            "betrag",
            "must be greater than 0",
        )]));
        let (status, json) = body(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["issues"][0]["path"], "betrag");
    }

    #[tokio::test]
    async fn test_database_errors_are_masked() {
        let err = ApiError::from(RepositoryError::Database(DbErr::Custom(
            "disk I/O error at /var/lib".to_string(),
        )));
        let (status, json) = body(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "An internal error occurred");
        assert!(!json.to_string().contains("/var/lib"));
    }

    #[tokio::test]
    async fn test_precondition_and_access_mapping() {
        let (status, _) = body(ApiError::from(RepositoryError::Precondition(
            "insufficient stock".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = body(ApiError::from(AccessError::AdminRequired)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "FORBIDDEN");
    }
}
