//! Kontor API Server
//!
//! Main entry point for the Kontor back-office service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kontor_api::{AppState, create_router};
use kontor_db::{UserRepository, connect, migrate};
use kontor_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kontor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A broken configuration document is fatal.
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        auth_enabled = config.auth.enabled,
        title = %config.ui.title,
        "Configuration loaded"
    );

    let db = connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    if config.database.run_migrations {
        migrate(&db).await.context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    if let Some(bootstrap) = UserRepository::new(db.clone()).ensure_bootstrap().await? {
        info!(
            user_id = bootstrap.id,
            "Bootstrap admin awaiting claim via POST /api/auth/bootstrap-admin"
        );
    }

    let addr = config.server.bind_address();
    let app = create_router(AppState::new(db, config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
