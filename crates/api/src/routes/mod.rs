//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_gate};
use kontor_db::{
    GlaeubigerRepository, KundenPostenMatRepository, KundenPostenRepository, SchuldnerRepository,
};

pub mod admin;
pub mod auth;
pub mod bewegungen;
pub mod dashboard;
pub mod health;
pub mod kunden;
pub mod material;
pub mod posten;
pub mod ui;

/// Creates the API router; everything except health, UI config and auth
/// passes the auth gate.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(kunden::routes())
        .nest("/schuldner", posten::routes::<SchuldnerRepository>())
        .nest("/glaeubiger", posten::routes::<GlaeubigerRepository>())
        .nest(
            "/kunden-posten",
            posten::kunden_routes::<KundenPostenRepository>(),
        )
        .nest(
            "/kunden-posten-mat",
            posten::kunden_routes::<KundenPostenMatRepository>(),
        )
        .merge(material::routes())
        .merge(bewegungen::routes())
        .merge(dashboard::routes())
        .merge(admin::routes())
        .layer(middleware::from_fn_with_state(state, auth_gate));

    Router::new()
        .merge(health::routes())
        .merge(ui::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
