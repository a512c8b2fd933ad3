//! Authentication routes: status probe, bootstrap claim, signup and login.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use tracing::info;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, created, ok};
use crate::{ApiError, AppState};
use kontor_core::auth::{
    UserRole, UserStatus, ensure_password_length, hash_password, verify_password,
};
use kontor_db::{UserRepository, entities::users};
use kontor_shared::AppError;
use kontor_shared::auth::{AuthStatus, LoginRequest, RegisterRequest, UserInfo};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/status", get(status))
        .route("/auth/bootstrap-admin", post(bootstrap_admin))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Public view of a stored user.
pub(crate) fn user_info(user: users::Model) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: UserRole::from(user.role).as_str().to_string(),
        status: UserStatus::from(user.status).as_str().to_string(),
        kunde_id: user.kunde_id,
    }
}

/// Checks the configured minimum length and hashes the password.
pub(crate) fn hashed_password(state: &AppState, password: &str) -> Result<String, ApiError> {
    ensure_password_length(password, state.config.auth.min_password_length)?;
    Ok(hash_password(password)?)
}

/// GET /auth/status
async fn status(State(state): State<AppState>) -> ApiResult {
    let bootstrap_pending = UserRepository::new(state.conn())
        .bootstrap_pending()
        .await?;

    Ok(ok(AuthStatus {
        enabled: state.config.auth.enabled,
        bootstrap_pending,
    }))
}

/// POST /auth/bootstrap-admin - Claim the seeded admin account.
async fn bootstrap_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> ApiResult {
    let password_hash = hashed_password(&state, &payload.password)?;
    let admin = UserRepository::new(state.conn())
        .claim_bootstrap(&payload.username, &payload.display_name, &password_hash)
        .await?;

    Ok(created(user_info(admin)))
}

/// POST /auth/signup - Register a user awaiting approval.
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> ApiResult {
    let password_hash = hashed_password(&state, &payload.password)?;
    let user = UserRepository::new(state.conn())
        .register(&payload.username, &payload.display_name, &password_hash)
        .await?;

    Ok(created(user_info(user)))
}

/// POST /auth/login - Check credentials and return the user.
///
/// The returned `id` is what the client sends as `x-user-id` afterwards.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> ApiResult {
    let repo = UserRepository::new(state.conn());

    let Some(user) = repo.find_by_username(&payload.username).await? else {
        info!(username = %payload.username, "Login attempt for non-existent user");
        return Err(invalid_credentials());
    };
    let Some(password_hash) = user.password_hash.as_deref() else {
        return Err(invalid_credentials());
    };
    if !verify_password(&payload.password, password_hash)? {
        info!(user_id = user.id, "Failed login attempt - invalid password");
        return Err(invalid_credentials());
    }

    match UserStatus::from(user.status) {
        UserStatus::Active => {}
        UserStatus::Pending => {
            return Err(ApiError(AppError::Forbidden(
                "account is awaiting approval".to_string(),
            )));
        }
        UserStatus::Disabled | UserStatus::Bootstrap => {
            return Err(ApiError(AppError::Forbidden(
                "account has been disabled".to_string(),
            )));
        }
    }

    info!(user_id = user.id, "User logged in successfully");
    Ok(ok(user_info(user)))
}

fn invalid_credentials() -> ApiError {
    ApiError(AppError::Unauthorized(
        "invalid username or password".to_string(),
    ))
}
