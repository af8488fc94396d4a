//! Sahara game client binary.
//!
//! # Examples
//!
//! ```bash
//! # Built-in content, text output
//! cargo run -p sahara-client
//!
//! # Custom tables, JSON snapshots for a renderer on the other end of a pipe
//! SAHARA_CONFIG=game.toml SAHARA_SPAWNS=spawns.toml SAHARA_OUTPUT=json \
//!     cargo run -p sahara-client
//! ```

use anyhow::Result;
use runtime::{Runtime, Topic};
use sahara_client::{ClientConfig, StdinIntentProvider};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let oracles = config.oracles()?;
    tracing::info!("Starting Sahara client ({:?} output)", config.output);

    let provider = StdinIntentProvider::spawn(oracles.items().clone(), config.output);
    let mut runtime = Runtime::builder()
        .config(config.runtime.clone())
        .oracles(oracles)
        .start_in_world(config.skip_menu)
        .intent_provider(provider)
        .build()
        .await?;

    let mut session_rx = runtime.subscribe(Topic::Session);
    let watcher = tokio::spawn(async move {
        while let Ok(event) = session_rx.recv().await {
            tracing::debug!("[{}] {:?}", event.clock.0, event.payload);
        }
    });

    let ticks = runtime.run().await?;
    tracing::info!("Session ended after {} ticks", ticks);

    runtime.shutdown().await?;
    watcher.abort();
    Ok(())
}
