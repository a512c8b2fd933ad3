//! Dashboard aggregate.

use axum::{Router, extract::State, routing::get};

use crate::AppState;
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, ok};
use kontor_db::DashboardRepository;

/// Creates the dashboard routes (requires the auth gate to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// GET /dashboard
async fn dashboard(State(state): State<AppState>, AuthCaller(caller): AuthCaller) -> ApiResult {
    caller.require_admin()?;
    Ok(ok(DashboardRepository::new(state.conn()).overview().await?))
}
