//! JSON REST API for roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::PersonStore`].
//! Tracing layers, TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = Router::new().merge(roster_api::api_router(store.clone()));
//! ```

pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{PersonService, PersonStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/people",
      get(people::list::<S>)
        .post(people::create::<S>)
        .put(people::upsert::<S>),
    )
    .route(
      "/people/{id}",
      get(people::get_one::<S>).delete(people::delete_one::<S>),
    )
    .with_state(PersonService::new(store))
}

// ─── Integration tests ────────────────────────────────────────────────────────
