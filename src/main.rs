//! Traindata server binary

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use traindata::api::{create_router, AppState};
use traindata::config::{AppConfig, LogFormat};
use traindata::service::InMemoryTrainData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let backend = load_backend(&config)?;
    let train_count = backend.train_count().await;
    tracing::info!(train_count, "Train data seeded");

    let state = AppState::new(Arc::new(backend));
    let router = create_router(state);

    // Bind failures (port already taken) are startup fatal
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn load_backend(config: &AppConfig) -> anyhow::Result<InMemoryTrainData> {
    let seed_path = Path::new(&config.data.seed_path);
    if seed_path.exists() {
        InMemoryTrainData::from_seed_file(seed_path)
            .with_context(|| format!("failed to load seed file {}", seed_path.display()))
    } else {
        tracing::warn!(
            path = %config.data.seed_path,
            "Seed file not found; starting with an empty fleet"
        );
        Ok(InMemoryTrainData::new())
    }
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("traindata=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
