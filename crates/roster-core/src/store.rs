//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (the in-memory
//! [`MemoryStore`](crate::memory::MemoryStore) and `roster-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{NewPerson, Person, PersonId};

/// Abstraction over a person store backend.
///
/// The store owns uniqueness and consistency of records; callers perform no
/// locking of their own. All methods return `Send` futures so the trait can
/// be used in multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `person`, overwriting any record with the same id, and return
  /// the stored record. Assigns a fresh id when `person.id` is `None`.
  fn save(
    &self,
    person: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Every stored person, in the store's iteration order.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Remove the person with `id`. Removing a missing id is a no-op.
  fn delete(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
