mod handlers;
mod models;
mod processors;
mod services;
mod utils;

use crate::handlers::{download_contract, written_message};
use crate::models::{Cli, Config};
use clap::Parser;
use eyre::Result;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const OUTPUT_ROOT: &str = "downloads";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sourcedl=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let download = download_contract(&config, &cli.address, Path::new(OUTPUT_ROOT)).await?;
    info!("Wrote {} {} files", download.files.len(), download.format);

    println!("{}", written_message(&download.out_dir));

    Ok(())
}
