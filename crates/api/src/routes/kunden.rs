//! Kunden routes. Users only ever see their own Kunde.

use axum::{Router, extract::State, routing::get};

use crate::AppState;
use crate::extractors::{PathId, ValidatedJson};
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, created, ok};
use kontor_core::kunde::{CreateKundeInput, UpdateKundeInput};
use kontor_db::KundeRepository;

/// Creates the Kunden routes (requires the auth gate to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/kunden", get(list_kunden).post(create_kunde))
        .route(
            "/kunden/{id}",
            get(get_kunde).put(update_kunde).delete(delete_kunde),
        )
}

/// GET /kunden
async fn list_kunden(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    let scope = caller.kunde_scope()?;
    let kunden = KundeRepository::new(state.conn()).list(scope).await?;
    Ok(ok(kunden))
}

/// POST /kunden
async fn create_kunde(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(payload): ValidatedJson<CreateKundeInput>,
) -> ApiResult {
    caller.require_admin()?;
    let kunde = KundeRepository::new(state.conn()).create(payload).await?;
    Ok(created(kunde))
}

/// GET /kunden/{id}
async fn get_kunde(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.ensure_kunde(id)?;
    let kunde = KundeRepository::new(state.conn()).get(id).await?;
    Ok(ok(kunde))
}

/// PUT /kunden/{id}
async fn update_kunde(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateKundeInput>,
) -> ApiResult {
    caller.ensure_kunde(id)?;
    let kunde = KundeRepository::new(state.conn())
        .update(id, payload)
        .await?;
    Ok(ok(kunde))
}

/// DELETE /kunden/{id}
async fn delete_kunde(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    let kunde = KundeRepository::new(state.conn()).delete(id).await?;
    Ok(ok(kunde))
}
