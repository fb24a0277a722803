//! TTL Cache Demo - demonstration entry point
//!
//! Constructs a cache, stores one entry, reads it back before and after its
//! expiration, and closes the cache. Imposes no contract on the engine.

mod cache;
mod config;
mod error;
mod tasks;

use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::Cache;
use config::Config;

/// Main entry point for the cache demonstration.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct a cache (this schedules the janitor's first sweep)
/// 4. Store one entry with a 5 second lifetime
/// 5. Read it back while live, then again once expired
/// 6. Close the cache, cancelling the janitor
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TTL cache demo");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: default_expiration={}ms, cleanup_interval={}ms, capacity={}",
        config.default_expiration_ms, config.cleanup_interval_ms, config.initial_capacity
    );

    let cache = Cache::with_capacity(
        config.default_expiration(),
        config.cleanup_interval(),
        config.initial_capacity,
    );

    cache.put("one", 1, Duration::from_secs(5)).await;
    info!("Stored \"one\" with a 5s lifetime");

    tokio::time::sleep(Duration::from_secs(4)).await;
    info!("get(\"one\") at t=4s -> {:?}", cache.get("one").await);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    info!("get(\"one\") at t=5.1s -> {:?}", cache.get("one").await);

    cache.close();
    info!("Cache closed");

    Ok(())
}
