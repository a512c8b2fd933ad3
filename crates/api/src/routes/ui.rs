//! Read-only client slice of the configuration document.

use axum::{Router, extract::State, response::Response, routing::get};

use crate::AppState;
use crate::response::ok;

/// GET /config/ui
async fn ui_config(State(state): State<AppState>) -> Response {
    ok(&state.config.ui)
}

/// Creates the config routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/config/ui", get(ui_config))
}
