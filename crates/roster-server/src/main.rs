//! roster server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), overlays
//! `ROSTER_*` environment variables, opens the configured store and serves
//! the people API over HTTP.
//!
//! ```text
//! ROSTER_STORE=sqlite ROSTER_PORT=9000 cargo run -p roster-server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use roster_server::ServerConfig;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "roster people service")]
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
  let server_cfg = ServerConfig::load(&cli.config)?;

  let app = roster_server::build_app(&server_cfg).await?;
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
