//! Quotehub Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loaded from the first existing location of:
//! - `--config <path>`
//! - `$XDG_CONFIG_HOME/quotehub/config.toml`
//! - `/etc/quotehub/config.toml`
//! - `./config.toml`
//!
//! Environment variables override file settings:
//! - `QUOTEHUB_DB_PATH`: SQLite database file
//! - `QUOTEHUB_API_HOST` / `QUOTEHUB_API_PORT`: bind address
//! - `QUOTEHUB_WS_PATH`: WebSocket endpoint path
//! - `QUOTEHUB_LOG_LEVEL` / `QUOTEHUB_LOG_FORMAT`: logging
//! - `RUST_LOG`: full tracing filter (takes precedence)

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotehub::api::{serve, AppState};
use quotehub::config::{generate_default_config, Config, LoggingConfig};
use quotehub::store::QuoteStore;

#[derive(Parser)]
#[command(name = "quotehub", version, about = "Quote collection service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server (default)
    Serve {
        /// Path to a config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write a default config file
    InitConfig {
        /// Where to write it
        #[arg(default_value = "config.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::InitConfig { path } => init_config(&path),
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    if let Some(host) = host {
        config.api.host = host;
    }
    if let Some(port) = port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Quotehub v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.store.db_path);

    let store = Arc::new(
        QuoteStore::open(Path::new(&config.store.db_path))
            .with_context(|| format!("opening store at {}", config.store.db_path))?,
    );

    let state = AppState::new(store, config.clone());

    tracing::info!(
        "Notification room at {} (max {} connections)",
        config.notifications.ws_path,
        config.notifications.max_connections
    );

    serve(state, &config.api).await?;

    tracing::info!("Quotehub stopped");
    Ok(())
}

fn init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{:?} already exists, refusing to overwrite", path);
    }
    std::fs::write(path, generate_default_config())
        .with_context(|| format!("writing {:?}", path))?;
    println!("Wrote default config to {:?}", path);
    Ok(())
}

/// Initialize tracing from the logging config
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("quotehub={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
