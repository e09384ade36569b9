use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use resort_api::{app, AppState};
use resort_core::{ContentRepository, ContentService};
use resort_store::{app_config::Config, DbClient, PgContentRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resort_api=debug,resort_core=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting resort API on port {}", config.server.port);

    // One pool for the whole process, handed to the repository
    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to Postgres")?;
    if config.database.run_migrations {
        db.migrate().await.context("Failed to run migrations")?;
    }

    let repo: Arc<dyn ContentRepository> = Arc::new(PgContentRepository::new(db.pool.clone()));
    let app_state = AppState::new(ContentService::new(repo, config.listing));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
