//! Stacks web server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus environment
//! overrides, opens the SQLite catalog, seeds it on first run, and serves the
//! site over HTTP.
//!
//! ```
//! DATABASE_URL=sqlite:///library.db PORT=8080 cargo run -p stacks-web --bin server
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use stacks_core::{seed::sample_books, store::BookStore};
use stacks_store_sqlite::SqliteStore;
use stacks_web::{
  AppState,
  config::{ServerConfig, StoreLocation},
};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Library book locator")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Skip loading the sample catalog into an empty store.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let location = server_cfg
    .store_location()
    .context("failed to resolve database url")?;

  let store = match &location {
    StoreLocation::Memory => {
      tracing::warn!("using an in-memory catalog; nothing will persist");
      SqliteStore::open_in_memory().await
    }
    StoreLocation::File(path) => {
      tracing::info!(path = %path.display(), "opening catalog");
      SqliteStore::open(path).await
    }
  }
  .with_context(|| format!("failed to open store at {location:?}"))?;

  if cli.no_seed {
    tracing::info!("seeding disabled");
  } else {
    let books = sample_books().context("failed to load sample catalog")?;
    let inserted = store.seed(books).await.context("failed to seed catalog")?;
    if inserted > 0 {
      tracing::info!(inserted, "seeded empty catalog with sample books");
    }
  }

  let total = store.count_books().await.context("failed to count books")?;
  tracing::info!(books = total, "catalog ready");

  let state = AppState { store: Arc::new(store) };
  let app = stacks_web::router(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
