//! EthosLens Store — Entry Point
//!
//! Opens the configured storage backend and runs one store operation,
//! printing the result as JSON.
//!
//! Wiring sequence:
//! 1. Load config.toml (path from ETHOSLENS_CONFIG) + validate
//! 2. Init tracing (text or JSON structured logging)
//! 3. Open the storage backend (file or memory)
//! 4. Run the requested command against `EthosStore`

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use ethoslens::adapters::persistence::open_backend;
use ethoslens::config;
use ethoslens::usecases::store::EthosStore;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

const USAGE: &str =
    "usage: ethoslens [stats|models|datasets|reports|posts|profile|demo|clear]";

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path =
        std::env::var("ETHOSLENS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config.app);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.storage.backend,
        "Starting EthosLens store"
    );

    // ── 3. Open storage backend ─────────────────────────────
    let backend = open_backend(&config.storage).context("Failed to open storage backend")?;
    let store = EthosStore::new(backend);
    if !store.is_healthy() {
        warn!("Storage backend reports unhealthy, writes may be dropped");
    }

    // ── 4. Run command ──────────────────────────────────────
    let command = std::env::args().nth(1).unwrap_or_else(|| "stats".to_string());
    match command.as_str() {
        "stats" => print_json(&store.get_stats()),
        "models" => print_json(&store.get_models()),
        "datasets" => print_json(&store.get_datasets()),
        "reports" => print_json(&store.get_reports()),
        "posts" => print_json(&store.get_posts()),
        "profile" => print_json(&store.get_profile()),
        "demo" => {
            store.insert_demo_data();
            print_json(&store.get_stats())
        }
        "clear" => {
            store.clear_all_data();
            print_json(&store.get_stats())
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

fn init_tracing(app: &config::AppSection) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app.log_level));

    // Logs go to stderr so stdout stays clean JSON output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}
