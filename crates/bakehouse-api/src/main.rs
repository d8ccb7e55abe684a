//! Bakehouse server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the image
//! store at the configured path, brings the embedded database up, and serves
//! the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use bakehouse_store::{Database, FileImageStore};

/// Runtime server configuration, deserialised from `config.toml` and
/// `BAKEHOUSE_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  host:       String,
  port:       u16,
  /// Where the database image lives on disk.
  image_path: PathBuf,
}

#[derive(Parser)]
#[command(author, version, about = "Bakehouse management server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("BAKEHOUSE"))
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8620)?
    .set_default("image_path", "bakehouse.image")?
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Bring the database up before accepting traffic so a corrupt image or an
  // unreadable store fails loudly at startup instead of on the first request.
  let images = FileImageStore::new(&server_cfg.image_path);
  let db = Arc::new(Database::new(images));
  db.ensure_initialized()
    .await
    .context("database initialization failed")?;

  let app = bakehouse_api::router(db);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
