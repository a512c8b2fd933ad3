//! The success envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::ApiError;

/// Result type of every handler.
pub type ApiResult = Result<Response, ApiError>;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    /// Always `true`.
    pub success: bool,
    /// Payload.
    pub data: T,
}

/// 200 with the payload wrapped in the envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    with_status(StatusCode::OK, data)
}

/// 201 with the payload wrapped in the envelope.
pub fn created<T: Serialize>(data: T) -> Response {
    with_status(StatusCode::CREATED, data)
}

fn with_status<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(Envelope {
            success: true,
            data,
        }),
    )
        .into_response()
}
