//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - The `x-user-id` auth gate
//! - Request extractors with validation
//! - The `{ success, data }` response envelope

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::Router;
use kontor_shared::AppConfig;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Validated configuration, loaded once at startup.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Bundles a connection and a configuration into router state.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }

    /// A connection handle for building a repository.
    #[must_use]
    pub fn conn(&self) -> DatabaseConnection {
        (*self.db).clone()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
