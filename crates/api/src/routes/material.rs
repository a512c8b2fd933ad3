//! Material routes (admin-only while the auth gate is enabled).

use axum::{Router, extract::State, routing::get};

use crate::AppState;
use crate::extractors::{PathId, ValidatedJson};
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, created, ok};
use kontor_core::material::{CreateMaterialInput, UpdateMaterialInput};
use kontor_db::MaterialRepository;

/// Creates the material routes (requires the auth gate to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/material", get(list_material).post(create_material))
        .route(
            "/material/{id}",
            get(get_material)
                .put(update_material)
                .delete(delete_material),
        )
        .route("/material/{id}/historie", get(material_historie))
}

/// GET /material
async fn list_material(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialRepository::new(state.conn()).list().await?))
}

/// POST /material
async fn create_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(payload): ValidatedJson<CreateMaterialInput>,
) -> ApiResult {
    caller.require_admin()?;
    Ok(created(
        MaterialRepository::new(state.conn()).create(payload).await?,
    ))
}

/// GET /material/{id}
async fn get_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialRepository::new(state.conn()).get(id).await?))
}

/// PUT /material/{id}
async fn update_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateMaterialInput>,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialRepository::new(state.conn())
        .update(id, payload)
        .await?))
}

/// DELETE /material/{id}
async fn delete_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialRepository::new(state.conn()).delete(id).await?))
}

/// GET /material/{id}/historie - Material with both movement logs and totals.
async fn material_historie(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialRepository::new(state.conn()).historie(id).await?))
}
