//! Server wiring for roster: configuration, store selection and the
//! top-level axum [`Router`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use roster_core::{MemoryStore, PersonStore};
use roster_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Which [`PersonStore`] backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
  /// Records live in process memory and vanish on exit.
  #[default]
  Memory,
  /// Records live in the SQLite file at `store_path`.
  Sqlite,
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store:      StoreKind,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store:      StoreKind::Memory,
      store_path: PathBuf::from("roster.db"),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `ROSTER_*` environment
  /// variables. Missing keys fall back to [`ServerConfig::default`].
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Wrap the people API for `store` in request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: PersonStore + 'static,
{
  roster_api::api_router(store).layer(TraceLayer::new_for_http())
}

/// Open the store selected by `cfg` and build the application around it.
pub async fn build_app(cfg: &ServerConfig) -> anyhow::Result<Router> {
  match cfg.store {
    StoreKind::Memory => {
      tracing::info!("Using in-memory store");
      Ok(app(Arc::new(MemoryStore::new())))
    }
    StoreKind::Sqlite => {
      let store_path = expand_tilde(&cfg.store_path);
      let store = SqliteStore::open(&store_path)
        .await
        .with_context(|| format!("failed to open store at {store_path:?}"))?;
      tracing::info!("Using SQLite store at {}", store_path.display());
      Ok(app(Arc::new(store)))
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
