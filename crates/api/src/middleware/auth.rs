//! The `x-user-id` auth gate for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use kontor_core::auth::{Caller, Principal, UserStatus};
use kontor_db::UserRepository;
use kontor_shared::AppError;

use crate::{ApiError, AppState};

/// Header carrying the numeric user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the caller and stores it in request extensions.
///
/// The `auth.enabled` switch is read from the shared configuration on every
/// request. While disabled every request runs as [`Caller::Unrestricted`].
/// Otherwise the request must name an existing, active user.
pub async fn auth_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let caller = if state.config.auth.enabled {
        match resolve(&state, request.headers()).await {
            Ok(principal) => Caller::User(principal),
            Err(err) => return err.into_response(),
        }
    } else {
        Caller::Unrestricted
    };

    request.extensions_mut().insert(caller);
    next.run(request).await
}

async fn resolve(state: &AppState, headers: &HeaderMap) -> Result<Principal, ApiError> {
    let Some(raw) = headers.get(USER_ID_HEADER).and_then(|h| h.to_str().ok()) else {
        return Err(unauthorized("x-user-id header is required"));
    };
    let Ok(user_id) = raw.trim().parse::<i32>() else {
        warn!(header = raw, "Unparseable x-user-id header");
        return Err(unauthorized("x-user-id must be a user ID"));
    };

    let Some(user) = UserRepository::new(state.conn())
        .find_by_id(user_id)
        .await?
    else {
        warn!(user_id, "Request for unknown user");
        return Err(unauthorized("unknown user"));
    };

    if !UserStatus::from(user.status).is_active() {
        warn!(user_id, status = ?user.status, "Request for inactive user");
        return Err(unauthorized("user is not active"));
    }

    Ok(Principal {
        user_id,
        role: user.role.into(),
        kunde_id: user.kunde_id,
    })
}

fn unauthorized(message: &str) -> ApiError {
    ApiError(AppError::Unauthorized(message.to_string()))
}

/// Extractor for the caller resolved by [`auth_gate`].
#[derive(Debug, Clone, Copy)]
pub struct AuthCaller(pub Caller);

impl<S> FromRequestParts<S> for AuthCaller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Caller>()
            .copied()
            .map(AuthCaller)
            .ok_or_else(|| unauthorized("authentication required"))
    }
}
