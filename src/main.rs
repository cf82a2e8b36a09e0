use anyhow::Context;
use std::sync::Arc;

use searchfront::api::create_router;
use searchfront::client::SearchClient;
use searchfront::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::load();
    let client = Arc::new(SearchClient::from_config(&config)?);
    let app = create_router(client, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("Search front-end listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
