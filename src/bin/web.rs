//! Browser dashboard for the coinlayer data
//!
//! Run with: cargo run --bin web
//!
//! Then open http://localhost:3000 in your browser.

use anyhow::{Context, Result};
use clap::Parser;
use cryptoeconomy::api::CoinlayerClient;
use cryptoeconomy::web::{router, WebState};
use cryptoeconomy::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "web", about = "Serve the cryptoeconomy dashboard over HTTP")]
struct Args {
    /// Configuration file (defaults to config/default.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides web.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("web=info,cryptoeconomy=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    if !config.has_api_key() {
        warn!("No coinlayer API key configured, set CRYPTOECONOMY_COINLAYER__API_KEY");
    }

    let client = CoinlayerClient::new(&config.coinlayer).context("Failed to build HTTP client")?;
    let state = Arc::new(WebState {
        client,
        dashboard: config.dashboard.clone(),
    });

    let port = args.port.unwrap_or(config.web.port);
    let addr = format!("{}:{}", config.web.host, port);

    info!("Dashboard running at http://localhost:{}", port);
    info!("Using coinlayer at {}", config.coinlayer.base_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
