//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Every id above the largest stored one is taken.
  #[error("person id space exhausted")]
  IdsExhausted,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
