//! Tuna gateway command-line client
//!
//! Thin front end over `tuna-payments` for poking at a gateway from a shell.
//! Configuration comes from the environment (or a `.env` file):
//! `TUNA_BASE_URL`, `TUNA_APP_TOKEN`, `TUNA_USER_AGENT`, `TUNA_TIMEOUT_SECS`.

mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuna_payments::{Dispatcher, GatewayConfig, PaymentAdapter};

use crate::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,tuna_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig::from_env_with_base_url(cli.base_url.clone())?;
    tracing::debug!(?config, "Loaded gateway configuration");

    let dispatcher = Dispatcher::from_config(&config)?;
    let adapter = PaymentAdapter::from_dispatcher(dispatcher.clone());
    let output = commands::run(&adapter, &dispatcher, &config, cli.command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
