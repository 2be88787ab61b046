use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_recommender::{
    api::{create_router, AppState},
    catalog::Catalog,
    config::Config,
    services::{AssetStore, HttpAssetStore, InMemoryAssetStore},
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // A catalog that cannot be loaded is fatal
    let catalog = Catalog::load_from_file(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;

    // No base URL: no details fragments and no image URLs
    let assets: Arc<dyn AssetStore> = if config.asset_base_url.is_empty() {
        Arc::new(InMemoryAssetStore::new(
            String::new(),
            config.image_extension.clone(),
        ))
    } else {
        Arc::new(HttpAssetStore::new(
            config.asset_base_url.clone(),
            config.image_extension.clone(),
        ))
    };
    tracing::info!(
        store = assets.name(),
        game_count = catalog.len(),
        "Catalog initialized"
    );

    let state = AppState::from_config(&config, catalog, assets);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
