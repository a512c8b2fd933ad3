//! Append-only material movement logs.

use axum::{Router, extract::State, routing::get};

use crate::AppState;
use crate::extractors::{PathId, ValidatedJson};
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, created, ok};
use kontor_core::material::{CreateBarBewegungInput, CreateKombiBewegungInput};
use kontor_db::MaterialBewegungRepository;

/// Creates the movement routes (requires the auth gate to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/material-bewegungen-bar", get(list_bar).post(book_bar))
        .route(
            "/material-bewegungen-bar/material/{material_id}",
            get(list_bar_for_material),
        )
        .route(
            "/material-bewegungen-kombi",
            get(list_kombi).post(book_kombi),
        )
        .route(
            "/material-bewegungen-kombi/material/{material_id}",
            get(list_kombi_for_material),
        )
}

async fn list_bar(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialBewegungRepository::new(state.conn())
        .list_bar(None)
        .await?))
}

async fn list_bar_for_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(material_id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialBewegungRepository::new(state.conn())
        .list_bar(Some(material_id))
        .await?))
}

/// POST /material-bewegungen-bar - Cash sale; reduces stock.
async fn book_bar(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(payload): ValidatedJson<CreateBarBewegungInput>,
) -> ApiResult {
    caller.require_admin()?;
    Ok(created(
        MaterialBewegungRepository::new(state.conn())
            .book_bar(payload)
            .await?,
    ))
}

async fn list_kombi(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialBewegungRepository::new(state.conn())
        .list_kombi(None)
        .await?))
}

async fn list_kombi_for_material(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(material_id): PathId,
) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(MaterialBewegungRepository::new(state.conn())
        .list_kombi(Some(material_id))
        .await?))
}

/// POST /material-bewegungen-kombi - Sale split between cash and invoice.
async fn book_kombi(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(payload): ValidatedJson<CreateKombiBewegungInput>,
) -> ApiResult {
    caller.require_admin()?;
    Ok(created(
        MaterialBewegungRepository::new(state.conn())
            .book_kombi(payload)
            .await?,
    ))
}
