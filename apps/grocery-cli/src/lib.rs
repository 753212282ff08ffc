//! # Grocery CLI
//!
//! Terminal shell over the Item Store.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Command Startup                                 │
//! │                                                                         │
//! │  1. Parse Arguments ──────────────────────────────────────────────────► │
//! │     • clap derive, `list` when no subcommand is given                   │
//! │                                                                         │
//! │  2. Resolve Configuration ────────────────────────────────────────────► │
//! │     • --db, then GROCERY_DB_PATH, then the platform data directory      │
//! │                                                                         │
//! │  3. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │                                                                         │
//! │  4. Open the Item Store ──────────────────────────────────────────────► │
//! │     • SQLite with WAL mode, pending migrations applied                  │
//! │                                                                         │
//! │  5. Dispatch ─────────────────────────────────────────────────────────► │
//! │     • One store operation, then the refreshed list on stdout            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io::{self, BufWriter, Write};
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::{item, session};
use config::CliConfig;
use error::CliError;
use grocery_db::ItemStore;

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for list and JSON output.
/// An unparsable filter falls back to [`config::DEFAULT_LOG_FILTER`].
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Opens the store, runs one command, and closes the store again.
pub async fn run(cli: Cli, config: CliConfig) -> Result<(), CliError> {
    info!(path = %config.database_path.display(), "Opening grocery list");
    let store = ItemStore::open(config.db_config(), config.store_config()).await?;

    let result = dispatch(&store, &cli).await;

    store.close().await;
    result
}

async fn dispatch(store: &ItemStore, cli: &Cli) -> Result<(), CliError> {
    let format = cli.output_format();
    let command = cli.command.clone().unwrap_or(Command::List);
    debug!(?command, "Dispatching");

    let mut out = BufWriter::new(io::stdout());

    match command {
        Command::List => item::list(store, &mut out, format).await?,
        Command::Add { title } => item::add(store, &mut out, format, &title.join(" ")).await?,
        Command::Toggle { item: selector } => item::toggle(store, &mut out, format, &selector).await?,
        Command::Delete { item: selector } => item::delete(store, &mut out, format, &selector).await?,
        Command::Essentials { force } => item::essentials(store, &mut out, format, force).await?,
        Command::Session => {
            let input = BufReader::new(tokio::io::stdin());
            session::run(store, input, &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}
