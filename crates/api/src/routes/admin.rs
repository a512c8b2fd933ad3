//! Admin user management.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use super::auth::{hashed_password, user_info};
use crate::extractors::{PathId, ValidatedJson};
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, ok};
use crate::{ApiError, AppState};
use kontor_db::UserRepository;
use kontor_shared::AppError;
use kontor_shared::auth::{ApproveUserRequest, SetPasswordRequest, UserInfo};

/// Creates the admin routes (requires the auth gate to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}/approve", post(approve_user))
        .route("/admin/users/{id}/disable", post(disable_user))
        .route("/admin/users/{id}/password", post(set_password))
}

/// GET /admin/users
async fn list_users(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    caller.require_admin()?;

    let users = UserRepository::new(state.conn()).list().await?;
    Ok(ok(users.into_iter().map(user_info).collect::<Vec<UserInfo>>()))
}

/// POST /admin/users/{id}/approve
async fn approve_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ApproveUserRequest>,
) -> ApiResult {
    caller.require_admin()?;

    let user = UserRepository::new(state.conn())
        .approve(id, payload.kunde_id)
        .await?;
    Ok(ok(user_info(user)))
}

/// POST /admin/users/{id}/disable
async fn disable_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    if caller.user_id() == Some(id) {
        return Err(ApiError(AppError::BadRequest(
            "admins cannot disable themselves".to_string(),
        )));
    }

    let user = UserRepository::new(state.conn()).disable(id).await?;
    Ok(ok(user_info(user)))
}

/// POST /admin/users/{id}/password
async fn set_password(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<SetPasswordRequest>,
) -> ApiResult {
    caller.require_admin()?;

    let password_hash = hashed_password(&state, &payload.password)?;
    let user = UserRepository::new(state.conn())
        .set_password(id, &password_hash)
        .await?;
    Ok(ok(user_info(user)))
}
