use anyhow::Context;
use movies::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("Starting movies server...");

    let app = Application::builder()
        .config(config)
        .module::<MoviesModule>()
        .context("failed to register modules")?
        .build()?;

    app.serve().await.context("server terminated with an error")?;

    tracing::info!("Goodbye");
    Ok(())
}
