// In app/src/main.rs

use anyhow::Result;
use api_client::PriceSource;
use app_config::Settings;
use clap::{Parser, Subcommand};
use engine::SignalService;
use std::sync::Arc;
use strategies::{RsiStrategy, types::RsiSettings};
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "An RSI buy/sell signal service for a single asset.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serves the signal page and the `/predict` endpoint.
    Serve,

    /// Fetches the current price once and prints it.
    Quote,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level);

    tracing::info!(environment = %settings.app.environment, "Starting RSI signal application");

    match cli.command {
        Commands::Serve => run_server(settings).await?,
        Commands::Quote => handle_quote(settings).await?,
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    // Per-request HTTP spans are only interesting when debugging.
    let http_level = if level >= tracing::Level::DEBUG { level } else { tracing::Level::WARN };

    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(
        tracing_subscriber::filter::Targets::new()
            .with_target("tower_http", http_level)
            .with_target("hyper", tracing::Level::WARN)
            .with_target("reqwest", tracing::Level::WARN)
            .with_default(level),
    );
    tracing_subscriber::registry().with(fmt_layer).init();
}

// --- "Serve" Subcommand Logic ---

/// Wires the quote client, the RSI strategy and the signal service into the web server.
/// It will run indefinitely until terminated.
async fn run_server(settings: Settings) -> Result<()> {
    let client = api_client::new(&settings.quote)?;
    tracing::info!(
        asset = %client.asset_id,
        currency = %client.vs_currency,
        timeout = ?client.timeout,
        "Quote client ready."
    );

    let strategy = RsiStrategy::new(RsiSettings { window: settings.signal.rsi_window });
    let service = Arc::new(SignalService::new(
        Arc::new(client),
        Box::new(strategy),
        settings.history.capacity,
    ));
    tracing::info!(
        capacity = settings.history.capacity,
        rsi_window = settings.signal.rsi_window,
        "Signal service initialized."
    );

    web_server::run(settings.server, service).await?;

    anyhow::bail!("Web server terminated unexpectedly.");
}

// --- "Quote" Subcommand Logic ---

async fn handle_quote(settings: Settings) -> Result<()> {
    let client = api_client::new(&settings.quote)?;
    let price = client.fetch().await?;
    println!("{} = {} {}", client.asset_id, price, client.vs_currency.to_uppercase());
    Ok(())
}
