use anyhow::Context;
use clap::Parser;
use crud_recipe::http::TokenTable;
use crud_recipe::lifecycle::{setup_tracing, ServiceConfig, ServiceSystem};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Books and todos CRUD services.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `bind_addr` from the config file.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let system = ServiceSystem::new(&config).context("failed to open the todo store")?;
    let auth = TokenTable::from_grants(&config.tokens);
    if auth.is_empty() {
        warn!("No tokens configured; todo routes will refuse every request");
    }
    let app = system.router(Arc::new(auth));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C; shutting down");
    }
}
