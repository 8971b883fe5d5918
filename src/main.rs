use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cryptoeconomy::{ui::App, ui::Page, Config};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartPage {
    Dashboard,
    Search,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Dashboard => Page::Dashboard,
            StartPage::Search => Page::Search,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cryptoeconomy", about = "Terminal dashboard for coinlayer crypto rates")]
struct Args {
    /// Configuration file (defaults to config/default.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page shown on startup
    #[arg(short, long, value_enum, default_value = "dashboard")]
    page: StartPage,

    /// Symbol to search once the symbol list is loaded
    #[arg(short, long)]
    symbol: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // Log to a file, the terminal belongs to the TUI
    let log_file = File::create(&config.ui.log_file)
        .with_context(|| format!("Failed to create log file {}", config.ui.log_file))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cryptoeconomy=info")))
        .init();

    tracing::info!("Starting cryptoeconomy dashboard");
    tracing::info!(
        "Loaded config: {} default symbols, {} random picks, {} days of history",
        config.dashboard.default_symbols.len(),
        config.dashboard.random_count,
        config.dashboard.history_days
    );

    let page = if args.symbol.is_some() {
        Page::Search
    } else {
        args.page.into()
    };

    let mut app = App::new(config, page, args.symbol)?;
    app.run().await?;

    Ok(())
}
