use anyhow::Context;
use boxoffice_api::app_config::{Config, MAX_HOLD_TIMEOUT_MS};
use boxoffice_api::{app, AppState};
use boxoffice_engine::SeatEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "boxoffice_api=debug,boxoffice_engine=debug,tower_http=debug,axum::rejection=trace"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let venue = config.venue.build().context("Invalid venue configuration")?;
    let max_hold = config.holds.timeout().with_context(|| {
        format!(
            "holds.timeout_ms must be between 1 and {}, got {}",
            MAX_HOLD_TIMEOUT_MS, config.holds.timeout_ms
        )
    })?;
    tracing::info!(
        "Starting box office for {} with {} ms holds",
        venue,
        config.holds.timeout_ms
    );

    let engine = Arc::new(SeatEngine::new(&venue, max_hold));
    let app = app(AppState::new(venue, engine));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
