//! The everything website
//!
//! Serves an AI-generated page for any path. Pages are cached in memory and
//! the number of generations per day is capped.

mod config;
mod error;
mod generator;
mod pages;
mod server;
mod types;

use crate::config::Config;
use crate::error::Result;
use crate::generator::CompletionPageGenerator;
use crate::server::{start_server, ServerState, SharedState};
use completion_client::CompletionClient;
use page_cache::{CacheSettings, PageController};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Values from .env are only defaults; real environment wins
    dotenv::dotenv().ok();

    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("everything_server=info".parse()?)
        .add_directive("page_cache=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting the everything website...");

    let config = Config::from_env()?;
    let client = CompletionClient::with_base_url(&config.api_key, &config.completion_base_url);
    info!("Port: {}", config.port);
    info!("Cache lifetime: {} seconds", config.cache_lifetime_secs);
    info!("Max pages per day: {}", config.max_pages_per_day);
    info!("Max tokens: {}", config.max_tokens);
    info!("Model: {} at {}", config.model, client.base_url());
    info!("API key: {}", client.masked_key());

    let generator = CompletionPageGenerator::new(
        client,
        &config.model,
        config.max_tokens,
        config.temperature,
    );
    let controller = PageController::new(
        CacheSettings::from_secs(config.cache_lifetime_secs, config.max_pages_per_day),
        Arc::new(generator),
    );

    // Create shared state
    let state: SharedState = Arc::new(ServerState::new(controller));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
