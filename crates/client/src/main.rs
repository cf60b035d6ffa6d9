//! Creature-detective client binary.
//!
//! Composition root: sets up logging, builds the session runtime against
//! the public creature database, and hands the cloneable handle to the
//! line-oriented presentation loop. All game rules live behind the handle;
//! this binary only renders state and forwards intents.

use anyhow::Result;

mod app;
mod config;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::ClientConfig::from_env();

    tracing::info!("starting creature detective client");

    let runtime = runtime::Runtime::builder().config(config.runtime).build();
    let handle = runtime.handle();

    app::run(handle).await?;

    runtime.shutdown().await?;
    Ok(())
}
